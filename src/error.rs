// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error returned by the identity provider or the profile store.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("Provider error (HTTP {status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Human-readable reason suitable for showing to the user, if the
    /// provider supplied one. Transport and decode failures carry internal
    /// detail (URLs, parser output) and only go to the log.
    pub fn message(&self) -> Option<&str> {
        match self {
            ProviderError::Api { message, .. } => message.as_deref(),
            ProviderError::Network(_) | ProviderError::Decode(_) => None,
        }
    }

    /// Whether the provider rejected the caller's token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ProviderError::Api { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication provider unavailable: {0}")]
    Provider(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Provider(err) => {
                tracing::error!(error = %err, "Provider error");
                (
                    StatusCode::BAD_GATEWAY,
                    "provider_error",
                    err.message().map(str::to_string),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
