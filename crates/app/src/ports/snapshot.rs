//! Snapshot source port — the installation data this core classifies.

use std::future::Future;

use homeboard_domain::error::HomeboardError;
use homeboard_domain::snapshot::Snapshot;

/// Produces the current installation snapshot.
///
/// The snapshot is fully materialized before any strategy runs; the
/// strategies themselves never do IO.
pub trait SnapshotSource {
    /// Capture the current snapshot.
    fn snapshot(&self) -> impl Future<Output = Result<Snapshot, HomeboardError>> + Send;
}

impl<T: SnapshotSource + Send + Sync> SnapshotSource for std::sync::Arc<T> {
    fn snapshot(&self) -> impl Future<Output = Result<Snapshot, HomeboardError>> + Send {
        (**self).snapshot()
    }
}
