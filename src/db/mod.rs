// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store (Supabase PostgREST).

pub mod postgrest;

pub use postgrest::SupabaseProfiles;

use crate::error::ProviderError;
use crate::models::Profile;
use async_trait::async_trait;

/// Table names as constants.
pub mod tables {
    /// Student profiles (keyed by provider user id)
    pub const PROFILES: &str = "profiles";
}

/// Write access to the externally owned profile table.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or fully overwrite the profile row keyed by `profile.id`,
    /// acting as the user who owns `access_token`.
    async fn upsert_profile(&self, access_token: &str, profile: &Profile)
        -> Result<(), ProviderError>;
}
