// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request-scoped provider handle and session cookie helpers.

use crate::config::Config;
use crate::db::ProfileStore;
use crate::error::ProviderError;
use crate::models::{Credentials, Profile, Session, User};
use crate::services::AuthProvider;
use crate::AppState;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;
use std::sync::Arc;

/// Cookie carrying the provider access token.
pub const SESSION_COOKIE: &str = "lectura_session";

/// Cookie lifetime when the provider does not report one.
const DEFAULT_SESSION_SECONDS: i64 = 60 * 60;

/// Result of the guard's session lookup, stashed in request extensions so
/// later layers do not ask the provider again.
#[derive(Debug, Clone)]
pub struct SessionLookup(pub Option<Session>);

/// Provider and profile-store handle bound to one request's access token.
#[derive(Clone)]
pub struct SessionContext {
    auth: Arc<dyn AuthProvider>,
    profiles: Arc<dyn ProfileStore>,
    access_token: Option<String>,
}

impl SessionContext {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        profiles: Arc<dyn ProfileStore>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            auth,
            profiles,
            access_token: access_token.filter(|t| !t.is_empty()),
        }
    }

    /// Build from application state and the request's cookies.
    pub fn from_jar(state: &AppState, jar: &CookieJar) -> Self {
        Self::new(
            state.auth.clone(),
            state.profiles.clone(),
            jar.get(SESSION_COOKIE).map(|c| c.value().to_string()),
        )
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Current session, or `None` without a network call when no token is held.
    pub async fn session(&self) -> Result<Option<Session>, ProviderError> {
        match self.access_token() {
            Some(token) => self.auth.get_session(token).await,
            None => Ok(None),
        }
    }

    /// Current user, or `None` without a network call when no token is held.
    pub async fn user(&self) -> Result<Option<User>, ProviderError> {
        match self.access_token() {
            Some(token) => self.auth.get_user(token).await,
            None => Ok(None),
        }
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ProviderError> {
        self.auth.sign_in_with_password(credentials).await
    }

    pub async fn sign_up(
        &self,
        credentials: &Credentials,
        metadata: serde_json::Value,
    ) -> Result<User, ProviderError> {
        self.auth.sign_up(credentials, metadata).await
    }

    /// Revoke the held session. A no-op without a token.
    pub async fn sign_out(&self) -> Result<(), ProviderError> {
        match self.access_token() {
            Some(token) => self.auth.sign_out(token).await,
            None => Ok(()),
        }
    }

    /// Write a profile row as the session's user.
    pub async fn upsert_profile(&self, profile: &Profile) -> Result<(), ProviderError> {
        let token = self.access_token().ok_or(ProviderError::Api {
            status: 401,
            message: None,
        })?;
        self.profiles.upsert_profile(token, profile).await
    }
}

impl FromRequestParts<Arc<AppState>> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self::from_jar(state, &jar))
    }
}

/// Session cookie for a freshly issued provider session.
pub fn session_cookie(config: &Config, session: &Session) -> Cookie<'static> {
    let seconds = session.expires_in.unwrap_or(DEFAULT_SESSION_SECONDS);
    Cookie::build((SESSION_COOKIE, session.access_token.clone()))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies())
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(seconds))
        .build()
}

/// Cookie matching [`session_cookie`]'s attributes, for removal.
pub fn session_removal_cookie(config: &Config) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE)
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies())
        .same_site(SameSite::Lax)
        .build()
}
