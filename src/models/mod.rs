// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod credentials;
pub mod profile;
pub mod user;

pub use credentials::Credentials;
pub use profile::Profile;
pub use user::{Session, User};
