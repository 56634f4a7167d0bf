//! Supported input formats

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported input file formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON document
    Json,
    /// Unrecognized extension
    Unknown,
}

impl FileFormat {
    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "csv" => Self::Csv,
            "json" => Self::Json,
            _ => Self::Unknown,
        }
    }

    /// Detect format from a file path
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Check if this format can be converted
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Unknown => "Unknown",
        }
    }
}
