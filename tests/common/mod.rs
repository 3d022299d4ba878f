//! Common test utilities

use content_store::{CollectionStore, ContentKind, FileStore, Record, Version};
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `records` as the initial content of a collection under `root`
pub async fn seed_collection(root: &Path, kind: ContentKind, records: &[Record]) -> FileStore {
    let store = FileStore::new(root);
    store
        .save(kind, records, &Version::absent())
        .await
        .expect("Failed to seed collection");
    store
}

/// `(id, order)` of the active records, in the order given
#[allow(dead_code)] // Not every test binary uses it
pub fn active_ranking(records: &[Record]) -> Vec<(String, u32)> {
    use content_store::Ordered;

    records
        .iter()
        .filter(|record| !record.is_archived())
        .map(|record| (record.id().to_string(), record.order()))
        .collect()
}
