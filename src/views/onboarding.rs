// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile setup page shown after sign-up.

use super::page;
use crate::controllers::Notification;
use crate::routes::paths;

pub fn render(notification: Option<&Notification>) -> String {
    let body = format!(
        r#"<div class="container" style="max-width: 32rem;">
<nav class="nav"><a class="brand" href="/">Lectura</a></nav>
<h1>Welcome to Lectura! &#128075;</h1>
<p class="muted">Let's set up your profile to get started</p>
<form class="card" method="post" action="{action}">
<div class="field"><label for="fullName">Full Name</label><input id="fullName" name="fullName" placeholder="Enter your full name" required></div>
<div class="field"><label for="username">Username</label><input id="username" name="username" placeholder="Choose a username" required></div>
<div class="field"><label for="bio">Bio</label><textarea id="bio" name="bio" placeholder="Tell us about yourself"></textarea></div>
<div class="field"><label for="educationLevel">Education Level</label><input id="educationLevel" name="educationLevel" placeholder="e.g., High School, University" required></div>
<button class="button" type="submit">Complete Profile</button>
</form>
</div>"#,
        action = paths::ONBOARDING,
    );
    page("Lectura - Set up your profile", notification, &body)
}
