// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and session models as returned by the identity provider.

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Provider user id (UUID string); primary key of the profile row
    pub id: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata supplied at sign-up
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl User {
    /// First character of the email, upper-cased, for the avatar badge.
    pub fn initial(&self) -> Option<char> {
        self.email
            .as_deref()
            .and_then(|e| e.chars().next())
            .and_then(|c| c.to_uppercase().next())
    }
}

/// Provider-issued session. Only its presence matters to the route guard;
/// the token is carried opaquely in a cookie.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Seconds until the access token expires, when the provider says
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: User,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .finish()
    }
}
