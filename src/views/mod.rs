// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-rendered HTML pages.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod onboarding;

use crate::controllers::{Notification, NotificationKind};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #0f172a; background: #fff; }
a { color: inherit; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.nav { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 0; }
.brand { font-weight: 700; font-size: 1.5rem; color: #7c3aed; text-decoration: none; }
.button { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 9999px; border: 0;
  background: #0f172a; color: #fff; text-decoration: none; font: inherit; cursor: pointer; }
.button.secondary { background: #f1f5f9; color: #0f172a; }
.grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.card { border: 1px solid #e2e8f0; border-radius: 1rem; padding: 1.5rem; }
.card.popular { border-color: #7c3aed; }
.muted { color: #64748b; }
.toast { position: fixed; top: 1rem; right: 1rem; padding: 0.75rem 1.25rem; border-radius: 0.75rem; color: #fff; }
.toast.success { background: #16a34a; }
.toast.error { background: #dc2626; }
form .field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
form input, form textarea { padding: 0.6rem 0.9rem; border: 1px solid #cbd5e1; border-radius: 0.75rem; font: inherit; }
.tabs { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.tabs a { flex: 1; text-align: center; padding: 0.5rem; border-radius: 0.75rem; text-decoration: none; }
.tabs a.active { background: #ede9fe; color: #7c3aed; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 16rem; padding: 1.5rem; border-right: 1px solid #e2e8f0; display: flex; flex-direction: column; gap: 0.5rem; }
.sidebar .link { padding: 0.6rem 0.9rem; border-radius: 0.75rem; }
.sidebar .link.active { background: #ede9fe; color: #7c3aed; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 9999px; background: #7c3aed; color: #fff;
  display: inline-flex; align-items: center; justify-content: center; font-weight: 700; }
main.content { flex: 1; padding: 2rem; }
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Toast markup for a pending notification.
pub fn toast(notification: Option<&Notification>) -> String {
    let Some(n) = notification else {
        return String::new();
    };
    let (class, role) = match n.kind {
        NotificationKind::Success => ("success", "status"),
        NotificationKind::Error => ("error", "alert"),
    };
    format!(
        r#"<div class="toast {class}" role="{role}">{}</div>"#,
        escape(&n.message)
    )
}

/// Wrap `body` in the shared document shell.
pub fn page(title: &str, notification: Option<&Notification>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{toast}
{body}
</body>
</html>"#,
        title = escape(title),
        toast = toast(notification),
    )
}
