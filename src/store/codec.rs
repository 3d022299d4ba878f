use std::collections::HashSet;

use super::StoreError;
use crate::content::{ContentKind, Record};
use crate::ordering::Ordered;

/// Decode a stored collection, rejecting repeated ids.
///
/// Blank content is an empty collection.
pub(super) fn decode(kind: ContentKind, content: &str) -> Result<Vec<Record>, StoreError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<Record> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id())) {
        return Err(StoreError::DuplicateId {
            kind,
            id: duplicate.id().to_string(),
        });
    }
    Ok(records)
}

/// Encode a collection the way it is written to disk: pretty JSON with a
/// trailing newline.
pub(super) fn encode(records: &[Record]) -> Result<String, StoreError> {
    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    Ok(content)
}
