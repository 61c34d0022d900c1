// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Student profile row stored in the `profiles` table.

use serde::{Deserialize, Serialize};

/// Profile keyed by the provider user id.
///
/// Onboarding writes the whole row each time. Columns that onboarding does
/// not collect are left out of the write when unset so the store keeps
/// whatever it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Provider user id (primary key)
    pub id: String,
    pub full_name: String,
    pub username: String,
    /// Optional free text; sent as an empty string when left blank
    pub bio: String,
    pub education_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
    /// RFC3339 timestamp of the last write
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_row_has_exact_columns() {
        let profile = Profile {
            id: "u1".to_string(),
            full_name: "Maria Garcia".to_string(),
            username: "maria".to_string(),
            bio: String::new(),
            education_level: "University".to_string(),
            subjects: None,
            study_goals: None,
            onboarding_completed: None,
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "bio",
                "education_level",
                "full_name",
                "id",
                "updated_at",
                "username"
            ]
        );
    }
}
