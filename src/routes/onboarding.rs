// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding routes. Mounted behind `require_session`.

use super::{flash, paths};
use crate::controllers::onboarding::GENERIC_ERROR;
use crate::controllers::{Notification, OnboardingController, OnboardingForm};
use crate::error::Result;
use crate::middleware::session::SessionContext;
use crate::views;
use crate::AppState;
use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(paths::ONBOARDING, get(onboarding_page).post(submit_onboarding))
}

async fn onboarding_page(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notification) = Notification::take(jar);
    (jar, Html(views::onboarding::render(notification.as_ref())))
}

async fn submit_onboarding(
    State(state): State<Arc<AppState>>,
    ctx: SessionContext,
    jar: CookieJar,
    Form(form): Form<OnboardingForm>,
) -> Result<(CookieJar, Redirect)> {
    match OnboardingController::new(&ctx, &state.submissions)
        .submit(form)
        .await
    {
        Ok(outcome) => {
            let jar = flash(jar, &outcome.notification, &state)?;
            Ok((jar, Redirect::to(outcome.redirect_to)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Onboarding submission failed");
            let jar = flash(jar, &Notification::error(e.user_message(GENERIC_ERROR)), &state)?;
            Ok((jar, Redirect::to(paths::ONBOARDING)))
        }
    }
}
