// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-flight submission tracking.
//!
//! A form submit holds a [`LoadingGuard`] for its whole duration. A second
//! submit for the same key while the first is in flight is refused, and the
//! key is released on every exit path when the guard drops.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Keys of submissions currently in flight (account email or session).
#[derive(Debug, Clone, Default)]
pub struct Submissions(Arc<DashMap<String, ()>>);

impl Submissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as in flight. Returns `None` if it already is.
    ///
    /// Admission and release both go through the map's shard lock, so at
    /// most one guard exists per key at any time.
    pub fn begin(&self, key: &str) -> Option<LoadingGuard> {
        match self.0.entry(key.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(());
                Some(LoadingGuard {
                    submissions: self.0.clone(),
                    key: key.to_string(),
                })
            }
        }
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Releases its key when dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    submissions: Arc<DashMap<String, ()>>,
    key: String,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.submissions.remove(&self.key);
    }
}
