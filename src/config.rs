// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use url::Url;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project (e.g. `https://xyz.supabase.co`)
    pub supabase_url: String,
    /// Public anon key sent as `apikey` on every provider call
    pub supabase_anon_key: String,
    /// Public URL of this site; decides whether cookies are `Secure`
    pub site_url: String,
    /// Server port
    pub port: u16,
    /// Serve with in-memory collaborators instead of Supabase
    pub offline: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test_anon_key".to_string(),
            site_url: "http://localhost:3000".to_string(),
            port: 3000,
            offline: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let supabase_url =
            env::var("SUPABASE_URL").map_err(|_| ConfigError::Missing("SUPABASE_URL"))?;
        let site_url =
            env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            supabase_url: validate_url("SUPABASE_URL", &supabase_url)?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            site_url: validate_url("SITE_URL", &site_url)?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            offline: env::var("LECTURA_OFFLINE")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}

/// Check that a configured value parses as an absolute URL and strip any
/// trailing slash so paths can be appended with `format!`.
fn validate_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    Url::parse(trimmed).map_err(|e| ConfigError::Invalid(name, e.to_string()))?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
