// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route guard: session-based redirects in front of every page.
//!
//! Rules, first match wins:
//! 1. protected path (`/dashboard`, `/onboarding`) without a session -> `/auth`
//! 2. `/auth` with a session -> `/dashboard`
//! 3. anything else passes through

use crate::middleware::session::{SessionContext, SessionLookup};
use crate::routes::paths;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Outcome of the guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    PassThrough,
    Redirect(&'static str),
}

/// `path` is `prefix` itself or lies beneath it.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Paths the guard evaluates at all. Anything else never triggers a
/// session lookup.
pub fn is_guarded(path: &str) -> bool {
    paths::PROTECTED
        .iter()
        .chain(std::iter::once(&paths::AUTH))
        .any(|prefix| matches_prefix(path, prefix))
}

/// Decide what to do with a request for `path`.
pub fn decide(path: &str, session_present: bool) -> GuardDecision {
    let protected = paths::PROTECTED
        .iter()
        .any(|prefix| matches_prefix(path, prefix));

    if protected && !session_present {
        GuardDecision::Redirect(paths::AUTH)
    } else if session_present && matches_prefix(path, paths::AUTH) {
        GuardDecision::Redirect(paths::DASHBOARD)
    } else {
        GuardDecision::PassThrough
    }
}

/// Redirect that keeps GET/HEAD as-is and turns form posts into a GET.
pub fn redirect_for(method: &Method, target: &str) -> Response {
    if method == Method::GET || method == Method::HEAD {
        Redirect::temporary(target).into_response()
    } else {
        Redirect::to(target).into_response()
    }
}

/// Middleware applying [`decide`] to every guarded request.
///
/// A failed session lookup lets the request through; failing closed would
/// lock everyone out while the provider is unreachable.
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if !is_guarded(&path) {
        return next.run(request).await;
    }

    let ctx = SessionContext::from_jar(&state, &jar);
    let session_present = match ctx.session().await {
        Ok(session) => {
            let present = session.is_some();
            request.extensions_mut().insert(SessionLookup(session));
            present
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path, "Session lookup failed, passing request through");
            return next.run(request).await;
        }
    };

    match decide(&path, session_present) {
        GuardDecision::PassThrough => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(path = %path, target, "Route guard redirect");
            redirect_for(request.method(), target)
        }
    }
}
