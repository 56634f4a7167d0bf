//! Configuration for the conversion service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConvertConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage directory configuration
    pub storage: StorageConfig,
    /// Background processing configuration
    pub processing: ProcessingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Maximum upload size in bytes (default: 100MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Storage directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for raw uploads
    pub upload_dir: PathBuf,
    /// Directory for processed output files
    pub processed_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            processed_dir: PathBuf::from("processed"),
        }
    }
}

/// Background processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Simulated processing delay in seconds before conversion starts
    /// (default: 5). Not a safety bound, only a stand-in for real work.
    pub delay_secs: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { delay_secs: 5 }
    }
}

impl ProcessingConfig {
    /// Processing delay as a [`Duration`]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}
