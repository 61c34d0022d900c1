// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in / sign-up page.

use super::page;
use crate::controllers::{AuthMode, Notification};
use crate::routes::paths;

fn field(label: &str, name: &str, kind: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}" placeholder="{placeholder}" required></div>"#
    )
}

/// Render the auth page with `mode` preselected.
pub fn render(mode: AuthMode, notification: Option<&Notification>) -> String {
    let (sign_in_class, sign_up_class, heading, submit) = match mode {
        AuthMode::SignIn => ("active", "", "Welcome back", "Sign In"),
        AuthMode::SignUp => ("", "active", "Create your account", "Create Account"),
    };

    let mut fields = field("Email", "email", "email", "Enter your email");
    fields.push_str(&field("Password", "password", "password", "Enter your password"));
    if mode == AuthMode::SignUp {
        fields.push_str(&field(
            "Confirm Password",
            "confirmPassword",
            "password",
            "Confirm your password",
        ));
    }

    let body = format!(
        r#"<div class="container" style="max-width: 28rem;">
<nav class="nav"><a class="brand" href="/">Lectura</a></nav>
<div class="card">
<h1>{heading}</h1>
<div class="tabs"><a class="{sign_in_class}" href="{sign_in_url}">Sign In</a><a class="{sign_up_class}" href="{sign_up_url}">Sign Up</a></div>
<form method="post" action="{action}">
<input type="hidden" name="mode" value="{mode_param}">
{fields}
<button class="button" type="submit">{submit}</button>
</form>
</div>
</div>"#,
        sign_in_url = AuthMode::SignIn.page_url(),
        sign_up_url = AuthMode::SignUp.page_url(),
        action = paths::AUTH,
        mode_param = mode.as_param(),
    );
    page("Lectura - Sign In", notification, &body)
}
