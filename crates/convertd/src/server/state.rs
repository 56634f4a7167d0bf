//! Application state for the conversion server

use std::sync::Arc;

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::processing::Processor;
use crate::registry::TaskRegistry;
use crate::storage::StoragePaths;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ConvertConfig,
    /// Task registry
    registry: TaskRegistry,
    /// Storage layout for uploads and outputs
    storage: StoragePaths,
    /// Background processor
    processor: Arc<Processor>,
}

impl AppState {
    /// Create new application state, ensuring storage directories exist
    pub fn new(config: ConvertConfig) -> Result<Self> {
        let storage = StoragePaths::new(&config.storage)?;
        tracing::info!(
            "Storage initialized (uploads: {}, processed: {})",
            storage.upload_dir().display(),
            storage.processed_dir().display()
        );

        let registry = TaskRegistry::new();

        let processor = Arc::new(Processor::new(
            registry.clone(),
            storage.clone(),
            config.processing.delay(),
        ));
        tracing::info!(
            "Processor initialized ({}s simulated delay)",
            config.processing.delay_secs
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                registry,
                storage,
                processor,
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ConvertConfig {
        &self.inner.config
    }

    /// Get the task registry
    pub fn registry(&self) -> &TaskRegistry {
        &self.inner.registry
    }

    /// Get the storage layout
    pub fn storage(&self) -> &StoragePaths {
        &self.inner.storage
    }

    /// Get the background processor
    pub fn processor(&self) -> &Arc<Processor> {
        &self.inner.processor
    }
}
