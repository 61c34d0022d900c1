// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory provider and profile store.
//!
//! Used by the test suite and by `LECTURA_OFFLINE=1` local runs. Every call
//! is recorded so tests can assert on ordering and on what was never called.

use crate::controllers::loading::Submissions;
use crate::db::ProfileStore;
use crate::error::ProviderError;
use crate::models::{Credentials, Profile, Session, User};
use crate::services::AuthProvider;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One recorded provider or store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    GetSession,
    SignIn { email: String },
    SignUp { email: String },
    SignOut,
    GetUser,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct Accounts {
    /// email -> (password, user)
    by_email: HashMap<String, (String, User)>,
    /// access token -> user
    sessions: HashMap<String, User>,
    next_id: u64,
}

/// In-memory identity provider.
#[derive(Default)]
pub struct MockAuthProvider {
    accounts: Mutex<Accounts>,
    calls: Mutex<Vec<ProviderCall>>,
    unavailable: Mutex<bool>,
    sign_in_failure: Mutex<Option<ProviderError>>,
    sign_up_failure: Mutex<Option<ProviderError>>,
    observer: Mutex<Option<(Submissions, String)>>,
    loading_seen: Mutex<Vec<bool>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and return its user.
    pub fn add_user(&self, email: &str, password: &str) -> User {
        let mut accounts = lock(&self.accounts);
        accounts.next_id += 1;
        let user = User {
            id: format!("user-{}", accounts.next_id),
            email: Some(email.to_string()),
            user_metadata: serde_json::json!({}),
        };
        accounts
            .by_email
            .insert(email.to_string(), (password.to_string(), user.clone()));
        user
    }

    /// Register an account with a live session and return its access token.
    pub fn add_session(&self, email: &str, password: &str) -> (User, String) {
        let user = self.add_user(email, password);
        let token = self.issue_token(&user);
        (user, token)
    }

    /// Make every call fail as if the provider were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        *lock(&self.unavailable) = unavailable;
    }

    /// Fail the next sign-in with the given provider message.
    pub fn fail_next_sign_in(&self, message: Option<&str>) {
        *lock(&self.sign_in_failure) = Some(ProviderError::Api {
            status: 400,
            message: message.map(str::to_string),
        });
    }

    /// Fail the next sign-up with the given provider message.
    pub fn fail_next_sign_up(&self, message: Option<&str>) {
        *lock(&self.sign_up_failure) = Some(ProviderError::Api {
            status: 400,
            message: message.map(str::to_string),
        });
    }

    /// Record the loading state of `key` at every call.
    pub fn observe_loading(&self, submissions: Submissions, key: &str) {
        *lock(&self.observer) = Some((submissions, key.to_string()));
    }

    /// Loading states recorded by [`Self::observe_loading`].
    pub fn loading_seen(&self) -> Vec<bool> {
        lock(&self.loading_seen).clone()
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        lock(&self.calls).clone()
    }

    /// Whether an access token currently maps to a session.
    pub fn has_session(&self, access_token: &str) -> bool {
        lock(&self.accounts).sessions.contains_key(access_token)
    }

    fn issue_token(&self, user: &User) -> String {
        let mut accounts = lock(&self.accounts);
        accounts.next_id += 1;
        let token = format!("token-{}", accounts.next_id);
        accounts.sessions.insert(token.clone(), user.clone());
        token
    }

    fn record(&self, call: ProviderCall) -> Result<(), ProviderError> {
        lock(&self.calls).push(call);
        if let Some((submissions, key)) = lock(&self.observer).as_ref() {
            lock(&self.loading_seen).push(submissions.is_loading(key));
        }
        if *lock(&self.unavailable) {
            return Err(ProviderError::Network("provider unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, ProviderError> {
        self.record(ProviderCall::GetSession)?;
        Ok(lock(&self.accounts)
            .sessions
            .get(access_token)
            .map(|user| Session {
                access_token: access_token.to_string(),
                expires_in: Some(3600),
                user: user.clone(),
            }))
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, ProviderError> {
        self.record(ProviderCall::SignIn {
            email: credentials.email.clone(),
        })?;
        if let Some(err) = lock(&self.sign_in_failure).take() {
            return Err(err);
        }

        let user = {
            let accounts = lock(&self.accounts);
            match accounts.by_email.get(&credentials.email) {
                Some((password, user)) if password == credentials.password.expose_secret() => {
                    user.clone()
                }
                _ => {
                    return Err(ProviderError::Api {
                        status: 400,
                        message: Some("Invalid login credentials".to_string()),
                    })
                }
            }
        };

        let access_token = self.issue_token(&user);
        Ok(Session {
            access_token,
            expires_in: Some(3600),
            user,
        })
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        metadata: serde_json::Value,
    ) -> Result<User, ProviderError> {
        self.record(ProviderCall::SignUp {
            email: credentials.email.clone(),
        })?;
        if let Some(err) = lock(&self.sign_up_failure).take() {
            return Err(err);
        }
        if lock(&self.accounts)
            .by_email
            .contains_key(&credentials.email)
        {
            return Err(ProviderError::Api {
                status: 422,
                message: Some("User already registered".to_string()),
            });
        }

        let mut user = self.add_user(&credentials.email, credentials.password.expose_secret());
        user.user_metadata = metadata;
        Ok(user)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        self.record(ProviderCall::SignOut)?;
        lock(&self.accounts).sessions.remove(access_token);
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<User>, ProviderError> {
        self.record(ProviderCall::GetUser)?;
        Ok(lock(&self.accounts).sessions.get(access_token).cloned())
    }
}

/// In-memory profile table.
#[derive(Default)]
pub struct MockProfileStore {
    rows: Mutex<HashMap<String, Profile>>,
    upserts: Mutex<Vec<Profile>>,
    failure: Mutex<Option<ProviderError>>,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next upsert with the given store message.
    pub fn fail_next_upsert(&self, message: Option<&str>) {
        *lock(&self.failure) = Some(ProviderError::Api {
            status: 400,
            message: message.map(str::to_string),
        });
    }

    /// Every profile passed to `upsert_profile`, including failed attempts.
    pub fn upserts(&self) -> Vec<Profile> {
        lock(&self.upserts).clone()
    }

    pub fn get(&self, id: &str) -> Option<Profile> {
        lock(&self.rows).get(id).cloned()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn upsert_profile(
        &self,
        _access_token: &str,
        profile: &Profile,
    ) -> Result<(), ProviderError> {
        lock(&self.upserts).push(profile.clone());
        if let Some(err) = lock(&self.failure).take() {
            return Err(err);
        }
        lock(&self.rows).insert(profile.id.clone(), profile.clone());
        Ok(())
    }
}
