// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lectura: marketing site and authenticated dashboard shell.
//!
//! This crate serves the landing pages, the sign-in/sign-up and onboarding
//! forms, and the dashboard. Identity and profile storage are delegated to
//! an external Supabase project.

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use controllers::Submissions;
use db::ProfileStore;
use services::AuthProvider;
use std::sync::Arc;

/// Shared application state.
///
/// The provider handles are injected here rather than held in statics so
/// that every request builds its own [`middleware::session::SessionContext`]
/// from them.
pub struct AppState {
    pub config: Config,
    pub auth: Arc<dyn AuthProvider>,
    pub profiles: Arc<dyn ProfileStore>,
    /// Form submissions currently in flight
    pub submissions: Submissions,
}
