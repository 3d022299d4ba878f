use tracing::{debug, warn};

use super::{ContentService, ServiceError};
use crate::content::{ContentKind, Record};
use crate::store::{CollectionStore, StoreError};

impl<S: CollectionStore> ContentService<S> {
    /// Load `kind`, apply `transform`, save against the loaded version.
    ///
    /// `transform` is pure: on a version conflict it runs again on the
    /// freshly loaded collection. Any error it returns aborts immediately.
    pub(super) async fn mutate<F, R>(&self, kind: ContentKind, transform: F) -> Result<R, ServiceError>
    where
        F: Fn(Vec<Record>) -> Result<(Vec<Record>, R), ServiceError>,
    {
        let mut attempt: u32 = 0;
        loop {
            let snapshot = self.store.load(kind).await?;
            let (records, output) = transform(snapshot.records)?;

            match self.store.save(kind, &records, &snapshot.version).await {
                Ok(version) => {
                    debug!("Saved {kind} at version {version} after {attempt} retries");
                    return Ok(output);
                }
                Err(StoreError::Conflict { .. }) if attempt < self.max_retries => {
                    attempt = attempt.saturating_add(1);
                    warn!("Write conflict on {kind}, retrying ({attempt}/{})", self.max_retries);
                }
                Err(StoreError::Conflict { .. }) => {
                    return Err(ServiceError::RetriesExhausted {
                        kind,
                        attempts: attempt.saturating_add(1),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
