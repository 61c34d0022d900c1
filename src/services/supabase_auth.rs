// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase Auth (GoTrue) client.
//!
//! Handles:
//! - Password sign-in and sign-up
//! - Resolving the user/session behind an access token
//! - Sign-out (token revocation)

use crate::error::ProviderError;
use crate::models::{Credentials, Session, User};
use crate::services::AuthProvider;
use async_trait::async_trait;
use serde::Deserialize;

/// Supabase Auth API client.
#[derive(Clone)]
pub struct SupabaseAuth {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// `/signup` answers with a full session when email confirmation is off
/// and with the bare user when it is on.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(User),
}

impl SupabaseAuth {
    /// Create a client for the project at `supabase_url`.
    pub fn new(http: reqwest::Client, supabase_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/auth/v1", supabase_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    /// Check response status and return the provider's error if not successful.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::debug!(status = status.as_u16(), message = ?message, "Auth API error");

        Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, ProviderError> {
        Ok(self.get_user(access_token).await?.map(|user| Session {
            access_token: access_token.to_string(),
            expires_in: None,
            user,
        }))
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, ProviderError> {
        let response = self
            .http
            .post(format!("{}/token", self.base_url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&credentials.to_json())
            .send()
            .await?;

        let response = self.check_response(response).await?;
        Ok(response.json().await?)
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        metadata: serde_json::Value,
    ) -> Result<User, ProviderError> {
        let mut body = credentials.to_json();
        body["data"] = metadata;

        let response = self
            .http
            .post(format!("{}/signup", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        let response = self.check_response(response).await?;
        match response.json::<SignUpResponse>().await? {
            SignUpResponse::Session(session) => Ok(session.user),
            SignUpResponse::User(user) => Ok(user),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        self.check_response(response).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<User>, ProviderError> {
        let response = self
            .http
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match self.check_response(response).await {
            Ok(response) => Ok(Some(response.json().await?)),
            // Expired or revoked token: no session, not a failure
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// GoTrue and PostgREST disagree on the field name, so the known ones are
/// tried in order.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|msg| !msg.trim().is_empty())
        .map(str::to_string)
}
