use std::sync::Arc;

use crate::calculate::RatingEngine;
use crate::config::AppConfig;
use crate::storage::{SnapshotStore, StorageConfig};

/// Shared, immutable handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub engine: Arc<RatingEngine>,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(store: SnapshotStore, engine: RatingEngine) -> Self {
        Self {
            store: Arc::new(store),
            engine: Arc::new(engine),
            cors_origin: "*".to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store = SnapshotStore::new(StorageConfig::new(config.data_dir.clone()));
        Self {
            cors_origin: config.server.cors_origin.clone(),
            ..Self::new(store, RatingEngine::new(config.reference))
        }
    }
}
