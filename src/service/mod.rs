//! Content service: every edit is load, pure transform, save.
//!
//! The transform comes from [`crate::ordering`]; the save is guarded by the
//! snapshot's version. When another writer got there first the service
//! reloads and recomputes, up to `max_retries` extra times.

mod operations;
mod retry;

use thiserror::Error;

use crate::content::ContentKind;
use crate::ordering::OrderError;
use crate::store::StoreError;

/// Default number of extra attempts after a version conflict.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Record not found in {kind}: {id}")]
    NotFound { kind: ContentKind, id: String },

    #[error("{0}")]
    InvalidOrder(#[from] OrderError),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Gave up writing {kind} after {attempts} conflicting attempts")]
    RetriesExhausted { kind: ContentKind, attempts: u32 },
}

impl ServiceError {
    pub(crate) fn not_found(kind: ContentKind, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// How an upsert treats a requested order outside the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpsertMode {
    /// Pull the order into range silently.
    #[default]
    Clamp,
    /// Reject the edit with [`ServiceError::InvalidOrder`].
    Strict,
}

/// Edits the content collections held by a store.
#[derive(Debug)]
pub struct ContentService<S> {
    store: S,
    max_retries: u32,
}

impl<S> ContentService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
