// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - identity provider seam and its implementations.

pub mod mock;
pub mod supabase_auth;

pub use mock::{MockAuthProvider, MockProfileStore, ProviderCall};
pub use supabase_auth::SupabaseAuth;

use crate::error::ProviderError;
use crate::models::{Credentials, Session, User};
use async_trait::async_trait;

/// Operations consumed from the external identity/session provider.
///
/// The provider owns sessions entirely; this crate only forwards tokens it
/// was handed and observes whether a session exists.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the session behind an access token. `Ok(None)` when the
    /// provider does not recognise the token.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, ProviderError>;

    /// Exchange email and password for a new session.
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, ProviderError>;

    /// Create an account. Does not establish a session.
    async fn sign_up(
        &self,
        credentials: &Credentials,
        metadata: serde_json::Value,
    ) -> Result<User, ProviderError>;

    /// Revoke the session behind an access token.
    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError>;

    /// Fetch the user behind an access token, if any.
    async fn get_user(&self, access_token: &str) -> Result<Option<User>, ProviderError>;
}
