// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lectura web server
//!
//! Serves the marketing site, the auth and onboarding forms, and the
//! dashboard, backed by a Supabase project for identity and profiles.

use lectura::{
    config::Config,
    controllers::Submissions,
    db::{ProfileStore, SupabaseProfiles},
    services::{AuthProvider, MockAuthProvider, MockProfileStore, SupabaseAuth},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, offline = config.offline, "Starting Lectura");

    let (auth, profiles): (Arc<dyn AuthProvider>, Arc<dyn ProfileStore>) = if config.offline {
        tracing::warn!("LECTURA_OFFLINE set, using in-memory identity provider and profile store");
        (
            Arc::new(MockAuthProvider::new()),
            Arc::new(MockProfileStore::new()),
        )
    } else {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        tracing::info!(supabase_url = %config.supabase_url, "Supabase clients initialized");
        (
            Arc::new(SupabaseAuth::new(
                http.clone(),
                &config.supabase_url,
                &config.supabase_anon_key,
            )),
            Arc::new(SupabaseProfiles::new(
                http,
                &config.supabase_url,
                &config.supabase_anon_key,
            )),
        )
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        auth,
        profiles,
        submissions: Submissions::new(),
    });

    // Build router
    let app = lectura::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at debug and
/// everything else at info.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lectura=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
