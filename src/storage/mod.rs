//! Filesystem snapshot storage.
//!
//! Input documents live under `<data_dir>/snapshots/` as JSONL, one file per
//! collection. Computed reports are written to `<data_dir>/derived/`.
//! Snapshots are only ever read.

pub mod jsonl;
pub mod snapshot;

use std::path::PathBuf;
use thiserror::Error;

pub use jsonl::{JsonlReader, JsonlWriter, SnapshotKind};
pub use snapshot::SnapshotStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn snapshots_dir(&self) -> PathBuf {
        self.data_dir.join("snapshots")
    }

    pub fn derived_dir(&self) -> PathBuf {
        self.data_dir.join("derived")
    }

    /// Path of a snapshot collection file.
    pub fn snapshot_path(&self, kind: SnapshotKind) -> PathBuf {
        self.snapshots_dir().join(kind.filename())
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.derived_dir().join("ratings.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
