//! Collection persistence.
//!
//! A store hands out a whole collection together with a [`Version`] token
//! and only accepts a write made against the version currently stored.
//! A stale write fails with [`StoreError::Conflict`]; the caller reloads,
//! recomputes and tries again.

mod codec;
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::content::{ContentKind, Record};
use crate::utils::compute_hash;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version conflict on {kind}: expected {expected}, found {actual}")]
    Conflict {
        kind: ContentKind,
        expected: Version,
        actual: Version,
    },

    #[error("Duplicate id in {kind}: {id}")]
    DuplicateId { kind: ContentKind, id: String },
}

/// Optimistic-concurrency token: the SHA-256 of the stored bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Version of a collection that has never been written.
    #[must_use]
    pub fn absent() -> Self {
        Self(String::new())
    }

    /// Version of the given stored content.
    #[must_use]
    pub fn of(content: &str) -> Self {
        Self(compute_hash(content))
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_absent() {
            write!(f, "<absent>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A collection as read from a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub version: Version,
}

impl Snapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            version: Version::absent(),
        }
    }
}

/// Read-all / write-all access to the content collections.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Read the whole collection and its current version.
    async fn load(&self, kind: ContentKind) -> Result<Snapshot, StoreError>;

    /// Replace the whole collection, provided it is still at `expected`.
    ///
    /// Returns the version of the newly written content.
    async fn save(
        &self,
        kind: ContentKind,
        records: &[Record],
        expected: &Version,
    ) -> Result<Version, StoreError>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
