//! Storage paths for uploads and processed outputs

use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::Result;

/// Filesystem layout for the service: one directory for raw uploads,
/// one for processed outputs. Both are created at startup if absent.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    upload_dir: PathBuf,
    processed_dir: PathBuf,
}

impl StoragePaths {
    /// Create the storage layout, ensuring both directories exist
    pub fn new(config: &StorageConfig) -> Result<Self> {
        fs::create_dir_all(&config.upload_dir)?;
        fs::create_dir_all(&config.processed_dir)?;

        Ok(Self {
            upload_dir: config.upload_dir.clone(),
            processed_dir: config.processed_dir.clone(),
        })
    }

    /// Path where a raw upload is stored, keyed by the client-supplied
    /// filename. Existing files of the same name are overwritten.
    pub fn upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Deterministic output path for a task's processed document
    pub fn processed_path(&self, task_id: Uuid) -> PathBuf {
        self.processed_dir.join(format!("{}_processed.json", task_id))
    }

    /// Upload directory
    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    /// Processed output directory
    pub fn processed_dir(&self) -> &PathBuf {
        &self.processed_dir
    }
}
