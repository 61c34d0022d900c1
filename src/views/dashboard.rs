// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard shell for a signed-in user.

use super::{escape, page};
use crate::controllers::Notification;
use crate::models::User;
use crate::routes::paths;

const SIDEBAR: [&str; 6] = [
    "Dashboard",
    "AI Chat",
    "Study Plans",
    "Notes",
    "Progress",
    "Settings",
];

const STATS: [(&str, &str); 4] = [
    ("Study Hours", "24.5"),
    ("Tasks Completed", "12"),
    ("Goals Achieved", "8"),
    ("Current Streak", "5 days"),
];

const RECENT_ACTIVITY: [(&str, &str); 4] = [
    ("Completed Physics Chapter 5", "2 hours ago"),
    ("Wrote Essay on Climate Change", "5 hours ago"),
    ("Solved Math Problems", "Yesterday"),
    ("Researched History Topic", "2 days ago"),
];

pub fn render(user: &User, notification: Option<&Notification>) -> String {
    let email = escape(user.email.as_deref().unwrap_or_default());
    let initial = user
        .initial()
        .map(|c| escape(&c.to_string()))
        .unwrap_or_else(|| "?".to_string());

    let links: String = SIDEBAR
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let class = if i == 0 { "link active" } else { "link" };
            format!(r#"<span class="{class}">{label}</span>"#)
        })
        .collect();
    let stats: String = STATS
        .iter()
        .map(|(label, value)| {
            format!(r#"<div class="card"><strong>{value}</strong><div class="muted">{label}</div></div>"#)
        })
        .collect();
    let activity: String = RECENT_ACTIVITY
        .iter()
        .map(|(title, time)| format!(r#"<li>{title} <span class="muted">{time}</span></li>"#))
        .collect();

    let body = format!(
        r#"<div class="layout">
<aside class="sidebar">
<a class="brand" href="/">Lectura</a>
<div class="user"><span class="avatar">{initial}</span> <span>{email}</span><div class="muted">Student</div></div>
<nav>{links}</nav>
<form method="post" action="{sign_out}"><button class="button secondary" type="submit">Sign Out</button></form>
</aside>
<main class="content">
<h1>Welcome back! &#128075;</h1>
<p class="muted">Here's an overview of your learning progress</p>
<div class="grid">{stats}</div>
<div class="grid">
<section class="card"><h2>AI Study Assistant</h2><p class="muted">Ask anything...</p></section>
<section class="card"><h2>Recent Activity</h2><ul>{activity}</ul></section>
</div>
</main>
</div>"#,
        sign_out = paths::SIGN_OUT,
    );
    page("Lectura - Dashboard", notification, &body)
}
