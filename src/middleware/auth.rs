// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session requirement for protected views.

use crate::error::AppError;
use crate::middleware::guard::redirect_for;
use crate::middleware::session::{SessionContext, SessionLookup};
use crate::models::User;
use crate::routes::paths;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Authenticated user, available to handlers behind [`require_session`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

/// Middleware that requires a provider session.
///
/// Reuses the route guard's lookup when it ran; otherwise asks the provider.
/// Without a session the request is sent to the auth page.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cached = request.extensions().get::<SessionLookup>().cloned();
    let session = match cached {
        Some(SessionLookup(session)) => session,
        None => SessionContext::from_jar(&state, &jar).session().await?,
    };

    let Some(session) = session else {
        return Ok(redirect_for(request.method(), paths::AUTH));
    };

    request
        .extensions_mut()
        .insert(AuthUser { user: session.user });

    Ok(next.run(request).await)
}
