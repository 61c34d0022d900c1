// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot user notifications carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "lectura_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Encode as the flash cookie.
    pub fn to_cookie(&self, secure: bool) -> Result<Cookie<'static>, serde_json::Error> {
        let value = urlencoding::encode(&serde_json::to_string(self)?).into_owned();
        Ok(Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(60))
            .build())
    }

    /// Take the pending notification out of the jar, if any.
    ///
    /// The returned jar carries the removal cookie so the toast renders
    /// exactly once.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<Self>) {
        let Some(cookie) = jar.get(FLASH_COOKIE) else {
            return (jar, None);
        };

        let notification = urlencoding::decode(cookie.value())
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());
        if notification.is_none() {
            tracing::warn!("Discarding malformed flash cookie");
        }

        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, notification)
    }
}
