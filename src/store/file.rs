use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::codec::{decode, encode};
use super::{CollectionStore, Snapshot, StoreError, Version};
use crate::content::{ContentKind, Record};
use crate::utils::atomic_write;

/// Stores each collection as `<root>/<kind>.json`.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    /// Serializes the version check and the write that follows it.
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the JSON file holding `kind`.
    #[must_use]
    pub fn collection_path(&self, kind: ContentKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    async fn read_current(&self, kind: ContentKind) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.collection_path(kind)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CollectionStore for FileStore {
    #[instrument(skip(self), fields(kind = %kind))]
    async fn load(&self, kind: ContentKind) -> Result<Snapshot, StoreError> {
        let Some(content) = self.read_current(kind).await? else {
            debug!(
                "No file at {}; treating {kind} as empty",
                self.collection_path(kind).display()
            );
            return Ok(Snapshot::empty());
        };

        let records = decode(kind, &content)?;
        debug!("Loaded {} {kind} records", records.len());
        Ok(Snapshot {
            records,
            version: Version::of(&content),
        })
    }

    #[instrument(skip(self, records), fields(kind = %kind, records = records.len()))]
    async fn save(
        &self,
        kind: ContentKind,
        records: &[Record],
        expected: &Version,
    ) -> Result<Version, StoreError> {
        let _guard = self.write_lock.lock().await;

        let actual = self
            .read_current(kind)
            .await?
            .map_or_else(Version::absent, |content| Version::of(&content));
        if &actual != expected {
            warn!("Rejected stale write to {kind}: expected {expected}, found {actual}");
            return Err(StoreError::Conflict {
                kind,
                expected: expected.clone(),
                actual,
            });
        }

        let content = encode(records)?;
        fs::create_dir_all(&self.root).await?;
        atomic_write(&self.collection_path(kind), &content).await?;

        let version = Version::of(&content);
        info!("Wrote {} {kind} records (version {version})", records.len());
        Ok(version)
    }
}
