// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public marketing pages.

use super::paths;
use crate::controllers::Notification;
use crate::views::{self, landing::Billing};
use crate::AppState;
use axum::{extract::Query, response::Html, routing::get, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(paths::HOME, get(landing))
        .route(paths::LANDING, get(landing))
}

#[derive(Deserialize)]
pub struct LandingParams {
    #[serde(default)]
    billing: Option<String>,
}

async fn landing(
    Query(params): Query<LandingParams>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let billing = Billing::from_param(params.billing.as_deref());
    let (jar, notification) = Notification::take(jar);
    (jar, Html(views::landing::render(billing, notification.as_ref())))
}
