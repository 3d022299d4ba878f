use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::codec::{decode, encode};
use super::{CollectionStore, Snapshot, StoreError, Version};
use crate::content::{ContentKind, Record};

/// In-memory store with the same version semantics as [`super::FileStore`].
///
/// Collections are kept as their encoded text, so versions are computed
/// exactly as they are for files.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<ContentKind, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a collection's stored text without any version check, as
    /// another writer would.
    pub async fn put_raw(&self, kind: ContentKind, content: impl Into<String>) {
        self.collections.lock().await.insert(kind, content.into());
    }

    /// Stored text of a collection, if it was ever written.
    pub async fn raw(&self, kind: ContentKind) -> Option<String> {
        self.collections.lock().await.get(&kind).cloned()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self, kind: ContentKind) -> Result<Snapshot, StoreError> {
        let Some(content) = self.raw(kind).await else {
            return Ok(Snapshot::empty());
        };
        Ok(Snapshot {
            records: decode(kind, &content)?,
            version: Version::of(&content),
        })
    }

    async fn save(
        &self,
        kind: ContentKind,
        records: &[Record],
        expected: &Version,
    ) -> Result<Version, StoreError> {
        let mut collections = self.collections.lock().await;
        let actual = collections
            .get(&kind)
            .map_or_else(Version::absent, |content| Version::of(content));
        if &actual != expected {
            return Err(StoreError::Conflict {
                kind,
                expected: expected.clone(),
                actual,
            });
        }

        let content = encode(records)?;
        let version = Version::of(&content);
        collections.insert(kind, content);
        Ok(version)
    }
}
