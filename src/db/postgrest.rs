// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PostgREST client for the profile table.

use crate::db::{tables, ProfileStore};
use crate::error::ProviderError;
use crate::models::Profile;
use crate::services::supabase_auth::extract_error_message;
use async_trait::async_trait;

/// Supabase REST client scoped to profile writes.
#[derive(Clone)]
pub struct SupabaseProfiles {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseProfiles {
    pub fn new(http: reqwest::Client, supabase_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/rest/v1", supabase_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfiles {
    async fn upsert_profile(
        &self,
        access_token: &str,
        profile: &Profile,
    ) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, tables::PROFILES))
            .query(&[("on_conflict", "id")])
            .header("apikey", &self.anon_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .bearer_auth(access_token)
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(user_id = %profile.id, "Profile upserted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ProviderError::Api {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}
