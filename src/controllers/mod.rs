// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form controllers for the auth and onboarding pages.

pub mod auth_form;
pub mod loading;
pub mod notification;
pub mod onboarding;

pub use auth_form::{AuthForm, AuthFormController, AuthMode, AuthOutcome};
pub use loading::{LoadingGuard, Submissions};
pub use notification::{Notification, NotificationKind};
pub use onboarding::{OnboardingController, OnboardingForm, OnboardingOutcome};

use crate::error::ProviderError;
use validator::ValidationErrors;

/// Why a form submit did not complete.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Rejected locally before any provider call.
    #[error("{0}")]
    Validation(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error("No user found")]
    NoUser,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl FormError {
    /// Message shown to the user. Provider errors without a message fall
    /// back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FormError::Provider(err) => err.message().unwrap_or(fallback).to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Please check the form and try again".to_string());
        FormError::Validation(message)
    }
}
