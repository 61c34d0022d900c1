// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in / sign-up form handling.

use crate::controllers::loading::Submissions;
use crate::controllers::notification::Notification;
use crate::controllers::FormError;
use crate::middleware::session::SessionContext;
use crate::models::{Credentials, Session};
use crate::routes::paths;
use serde::Deserialize;
use validator::Validate;

pub const SIGNED_IN: &str = "Successfully signed in!";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
/// Shown when the provider gives no message.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Which tab of the auth page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// `signup` selects sign-up; any other value, or none, selects sign-in.
    pub fn from_param(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => AuthMode::SignUp,
            _ => AuthMode::SignIn,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            AuthMode::SignIn => "login",
            AuthMode::SignUp => "signup",
        }
    }

    /// Auth page URL with this tab preselected.
    pub fn page_url(self) -> String {
        format!("{}?mode={}", paths::AUTH, self.as_param())
    }
}

/// Submitted auth form. `confirmPassword` is only present in sign-up mode.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthForm {
    #[serde(default)]
    pub mode: Option<String>,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

impl AuthForm {
    pub fn mode(&self) -> AuthMode {
        AuthMode::from_param(self.mode.as_deref())
    }
}

/// Successful submit: the new session plus what to show and where to go.
#[derive(Debug)]
pub struct AuthOutcome {
    pub session: Session,
    pub notification: Notification,
    pub redirect_to: &'static str,
}

pub struct AuthFormController<'a> {
    ctx: &'a SessionContext,
    submissions: &'a Submissions,
}

impl<'a> AuthFormController<'a> {
    pub fn new(ctx: &'a SessionContext, submissions: &'a Submissions) -> Self {
        Self { ctx, submissions }
    }

    /// Key under which a submit for `email` is tracked as in flight.
    pub fn submission_key(email: &str) -> String {
        format!("auth:{}", email.trim().to_lowercase())
    }

    /// Run the sign-in or sign-up chain for one form submit.
    ///
    /// The submission stays marked in flight until every provider call has
    /// resolved, whichever way it resolves.
    pub async fn submit(&self, form: AuthForm) -> Result<AuthOutcome, FormError> {
        let key = Self::submission_key(&form.email);
        match self.submissions.begin(&key) {
            Some(_guard) => self.run(form).await,
            None => Err(FormError::Busy),
        }
    }

    async fn run(&self, form: AuthForm) -> Result<AuthOutcome, FormError> {
        let mode = form.mode();

        if mode == AuthMode::SignUp
            && form.confirm_password.as_deref() != Some(form.password.as_str())
        {
            return Err(FormError::Validation(PASSWORDS_DO_NOT_MATCH.to_string()));
        }
        form.validate()?;

        let credentials = Credentials::new(form.email, form.password);

        match mode {
            AuthMode::SignIn => {
                let session = self.ctx.sign_in(&credentials).await?;
                tracing::info!(user_id = %session.user.id, "User signed in");
                Ok(AuthOutcome {
                    session,
                    notification: Notification::success(SIGNED_IN),
                    redirect_to: paths::DASHBOARD,
                })
            }
            AuthMode::SignUp => {
                let user = self
                    .ctx
                    .sign_up(&credentials, serde_json::json!({}))
                    .await?;
                tracing::info!(user_id = %user.id, "User signed up");

                // Sign-up does not establish a session on its own
                let session = self.ctx.sign_in(&credentials).await?;
                Ok(AuthOutcome {
                    session,
                    notification: Notification::success(ACCOUNT_CREATED),
                    redirect_to: paths::DASHBOARD,
                })
            }
        }
    }
}
