// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in and sign-up routes.

use super::{flash, paths};
use crate::controllers::auth_form::GENERIC_ERROR;
use crate::controllers::{AuthForm, AuthFormController, AuthMode, Notification};
use crate::error::Result;
use crate::middleware::session::{session_cookie, SessionContext};
use crate::views;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(paths::AUTH, get(auth_page).post(submit_auth))
}

/// Query parameters for the auth page.
#[derive(Deserialize)]
pub struct AuthPageParams {
    /// `signup` opens the sign-up tab.
    #[serde(default)]
    mode: Option<String>,
}

async fn auth_page(
    Query(params): Query<AuthPageParams>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let mode = AuthMode::from_param(params.mode.as_deref());
    let (jar, notification) = Notification::take(jar);
    (jar, Html(views::auth::render(mode, notification.as_ref())))
}

/// Handle a sign-in or sign-up form post.
///
/// On success the session cookie is set and the browser is sent to the
/// dashboard; on failure it returns to the same tab with an error toast.
async fn submit_auth(
    State(state): State<Arc<AppState>>,
    ctx: SessionContext,
    jar: CookieJar,
    Form(form): Form<AuthForm>,
) -> Result<(CookieJar, Redirect)> {
    let mode = form.mode();

    match AuthFormController::new(&ctx, &state.submissions)
        .submit(form)
        .await
    {
        Ok(outcome) => {
            let jar = jar.add(session_cookie(&state.config, &outcome.session));
            let jar = flash(jar, &outcome.notification, &state)?;
            Ok((jar, Redirect::to(outcome.redirect_to)))
        }
        Err(e) => {
            tracing::warn!(error = %e, mode = mode.as_param(), "Auth form submission failed");
            let jar = flash(jar, &Notification::error(e.user_message(GENERIC_ERROR)), &state)?;
            Ok((jar, Redirect::to(&mode.page_url())))
        }
    }
}
