use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{ContentService, ServiceError, UpsertMode};
use crate::content::{ContentKind, Record};
use crate::ordering::{self, Ordered};
use crate::store::CollectionStore;

impl<S: CollectionStore> ContentService<S> {
    /// Active records in display order, followed by the archived ones when
    /// `include_archived` is set.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn list(
        &self,
        kind: ContentKind,
        include_archived: bool,
    ) -> Result<Vec<Record>, ServiceError> {
        let snapshot = self.store.load(kind).await?;
        Ok(display_order(snapshot.records, include_archived))
    }

    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn get(&self, kind: ContentKind, id: &str) -> Result<Record, ServiceError> {
        let snapshot = self.store.load(kind).await?;
        find(&snapshot.records, id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(kind, id))
    }

    /// Create or replace a record and store the resulting collection.
    ///
    /// A record without an id gets a fresh UUID. Returns the record as
    /// stored, with its final order.
    #[instrument(skip(self, record), fields(kind = %kind, id = %record.id()))]
    pub async fn upsert(
        &self,
        kind: ContentKind,
        record: Record,
        mode: UpsertMode,
    ) -> Result<Record, ServiceError> {
        let record = with_assigned_id(record);
        let id = record.id().to_string();

        let stored = self
            .mutate(kind, |records| {
                let next = match mode {
                    UpsertMode::Clamp => ordering::upsert(records, record.clone()),
                    UpsertMode::Strict => ordering::checked_upsert(records, record.clone())?,
                };
                let stored = find(&next, &id)
                    .cloned()
                    .ok_or_else(|| ServiceError::not_found(kind, &id))?;
                Ok((next, stored))
            })
            .await?;

        info!(
            "Upserted {kind} record {id} at order {} (archived: {})",
            stored.order(),
            stored.is_archived()
        );
        Ok(stored)
    }

    /// [`Self::upsert`] for a raw editor payload, cleaned up by the
    /// collection's entity type first.
    pub async fn upsert_value(
        &self,
        kind: ContentKind,
        value: Value,
        mode: UpsertMode,
    ) -> Result<Record, ServiceError> {
        let record = kind.sanitize_record(value)?;
        self.upsert(kind, record, mode).await
    }

    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn archive(&self, kind: ContentKind, id: &str) -> Result<Record, ServiceError> {
        let archived = self
            .mutate(kind, |records| {
                ensure_present(&records, kind, id)?;
                let next = ordering::archive(records, id);
                let archived = find(&next, id)
                    .cloned()
                    .ok_or_else(|| ServiceError::not_found(kind, id))?;
                Ok((next, archived))
            })
            .await?;

        info!("Archived {kind} record {id}");
        Ok(archived)
    }

    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn restore(
        &self,
        kind: ContentKind,
        id: &str,
        order: Option<u32>,
    ) -> Result<Record, ServiceError> {
        let restored = self
            .mutate(kind, |records| {
                ensure_present(&records, kind, id)?;
                let next = ordering::restore(records, id, order);
                let restored = find(&next, id)
                    .cloned()
                    .ok_or_else(|| ServiceError::not_found(kind, id))?;
                Ok((next, restored))
            })
            .await?;

        info!("Restored {kind} record {id} at order {}", restored.order());
        Ok(restored)
    }

    /// Re-tighten the active orders of a collection, e.g. after a hand edit.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn normalize(&self, kind: ContentKind) -> Result<Vec<Record>, ServiceError> {
        let records = self
            .mutate(kind, |records| {
                let next = ordering::normalize(records);
                Ok((next.clone(), next))
            })
            .await?;

        info!("Normalized {} {kind} records", records.len());
        Ok(display_order(records, true))
    }

    /// Remove a record for good and close the gap it leaves.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn delete(&self, kind: ContentKind, id: &str) -> Result<Record, ServiceError> {
        let removed = self
            .mutate(kind, |mut records| {
                let position = records
                    .iter()
                    .position(|record| record.id() == id)
                    .ok_or_else(|| ServiceError::not_found(kind, id))?;
                let removed = records.remove(position);
                Ok((ordering::normalize(records), removed))
            })
            .await?;

        info!("Deleted {kind} record {id}");
        Ok(removed)
    }

    /// Check a requested order the way an editor would before submitting.
    ///
    /// `id` names the record being edited; `None` (or an id that is not
    /// currently active) means the record would enter the active set.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn check_order(
        &self,
        kind: ContentKind,
        requested: u32,
        id: Option<&str>,
    ) -> Result<u32, ServiceError> {
        let snapshot = self.store.load(kind).await?;
        let records = &snapshot.records;
        let entering = !id.is_some_and(|id| {
            records
                .iter()
                .any(|record| record.id() == id && !record.is_archived())
        });
        let range = ordering::order_range(ordering::active_count(records), entering);
        Ok(ordering::validate_order(requested, &range)?)
    }
}

fn find<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|record| record.id() == id)
}

fn ensure_present(records: &[Record], kind: ContentKind, id: &str) -> Result<(), ServiceError> {
    if find(records, id).is_none() {
        return Err(ServiceError::not_found(kind, id));
    }
    Ok(())
}

fn with_assigned_id(mut record: Record) -> Record {
    if record.core.id.trim().is_empty() {
        record.core.id = Uuid::new_v4().to_string();
    }
    record
}

fn display_order(records: Vec<Record>, include_archived: bool) -> Vec<Record> {
    let (mut active, archived): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|record| !record.is_archived());
    active.sort_by_key(|record| (record.order() == 0, record.order()));
    if include_archived {
        active.extend(archived);
    }
    active
}
