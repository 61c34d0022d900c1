// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding profile form handling.

use crate::controllers::loading::Submissions;
use crate::controllers::notification::Notification;
use crate::controllers::FormError;
use crate::middleware::session::SessionContext;
use crate::models::Profile;
use crate::routes::paths;
use crate::time_utils::now_rfc3339;
use serde::Deserialize;
use validator::Validate;

pub const PROFILE_CREATED: &str = "Profile created successfully!";
/// Shown when the provider gives no message.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Submitted onboarding form. `bio` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[validate(length(min = 1, message = "Education level is required"))]
    pub education_level: String,
}

impl OnboardingForm {
    fn trimmed(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            username: self.username.trim().to_string(),
            bio: self.bio.trim().to_string(),
            education_level: self.education_level.trim().to_string(),
        }
    }

    /// Full profile row for `user_id`, stamped with `updated_at`.
    pub fn into_profile(self, user_id: &str, updated_at: String) -> Profile {
        Profile {
            id: user_id.to_string(),
            full_name: self.full_name,
            username: self.username,
            bio: self.bio,
            education_level: self.education_level,
            subjects: None,
            study_goals: None,
            onboarding_completed: None,
            updated_at,
        }
    }
}

#[derive(Debug)]
pub struct OnboardingOutcome {
    pub profile: Profile,
    pub notification: Notification,
    pub redirect_to: &'static str,
}

pub struct OnboardingController<'a> {
    ctx: &'a SessionContext,
    submissions: &'a Submissions,
}

impl<'a> OnboardingController<'a> {
    pub fn new(ctx: &'a SessionContext, submissions: &'a Submissions) -> Self {
        Self { ctx, submissions }
    }

    /// Key under which this session's onboarding submit is tracked.
    pub fn submission_key(ctx: &SessionContext) -> String {
        format!("onboarding:{}", ctx.access_token().unwrap_or_default())
    }

    /// Validate, resolve the current user, and write the profile once.
    pub async fn submit(&self, form: OnboardingForm) -> Result<OnboardingOutcome, FormError> {
        let key = Self::submission_key(self.ctx);
        match self.submissions.begin(&key) {
            Some(_guard) => self.run(form).await,
            None => Err(FormError::Busy),
        }
    }

    async fn run(&self, form: OnboardingForm) -> Result<OnboardingOutcome, FormError> {
        let form = form.trimmed();
        form.validate()?;

        let user = self.ctx.user().await?.ok_or(FormError::NoUser)?;
        let profile = form.into_profile(&user.id, now_rfc3339());

        self.ctx.upsert_profile(&profile).await?;
        tracing::info!(user_id = %user.id, "Onboarding profile saved");

        Ok(OnboardingOutcome {
            profile,
            notification: Notification::success(PROFILE_CREATED),
            redirect_to: paths::DASHBOARD,
        })
    }
}
