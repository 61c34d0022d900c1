// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard routes. Mounted behind `require_session`.

use super::paths;
use crate::controllers::Notification;
use crate::middleware::auth::AuthUser;
use crate::middleware::session::{session_removal_cookie, SessionContext};
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(paths::DASHBOARD, get(dashboard_page))
        .route(paths::SIGN_OUT, post(sign_out))
}

async fn dashboard_page(
    Extension(auth): Extension<AuthUser>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, notification) = Notification::take(jar);
    (jar, Html(views::dashboard::render(&auth.user, notification.as_ref())))
}

/// Revoke the provider session and drop the cookie.
///
/// The cookie is removed even if the provider call fails, so the browser
/// always ends up signed out locally.
async fn sign_out(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    ctx: SessionContext,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    match ctx.sign_out().await {
        Ok(()) => tracing::info!(user_id = %auth.user.id, "User signed out"),
        Err(e) => {
            tracing::warn!(user_id = %auth.user.id, error = %e, "Provider sign-out failed")
        }
    }

    let jar = jar.remove(session_removal_cookie(&state.config));
    (jar, Redirect::to(paths::AUTH))
}
