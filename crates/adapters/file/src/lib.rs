//! # homeboard-adapter-file
//!
//! Snapshot source that reads a JSON snapshot export from disk.
//!
//! The file is re-read on every call, so replacing it on disk is enough to
//! serve a new installation state; nothing is cached between runs.
//!
//! ## Dependency rule
//!
//! Depends on `homeboard-app` (port trait) and `homeboard-domain` only.

use std::path::{Path, PathBuf};

use homeboard_app::ports::SnapshotSource;
use homeboard_domain::error::{HomeboardError, SourceError};
use homeboard_domain::snapshot::Snapshot;

/// Snapshot source backed by a JSON export file.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSnapshotSource {
    async fn snapshot(&self) -> Result<Snapshot, HomeboardError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            SourceError::new(format!("failed to read {}: {err}", self.path.display()))
        })?;
        let snapshot = serde_json::from_str(&content).map_err(|err| {
            SourceError::new(format!("failed to parse {}: {err}", self.path.display()))
        })?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_adapter_virtual::demo_snapshot;

    fn export_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("homeboard-file-test-{name}-{}.json", std::process::id()))
    }

    #[tokio::test]
    async fn should_read_a_snapshot_export() {
        let path = export_path("roundtrip");
        let exported = demo_snapshot();
        tokio::fs::write(&path, serde_json::to_string(&exported).unwrap())
            .await
            .unwrap();

        let source = FileSnapshotSource::new(&path);
        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot, exported);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_fail_with_source_error_when_file_missing() {
        let source = FileSnapshotSource::new(export_path("missing"));
        let result = source.snapshot().await;
        assert!(matches!(result, Err(HomeboardError::Source(_))));
    }

    #[tokio::test]
    async fn should_fail_with_source_error_when_file_malformed() {
        let path = export_path("malformed");
        tokio::fs::write(&path, "not json").await.unwrap();

        let source = FileSnapshotSource::new(&path);
        let result = source.snapshot().await;
        assert!(matches!(result, Err(HomeboardError::Source(_))));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
