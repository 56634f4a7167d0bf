//! Task lifecycle types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Lifecycle state of a conversion task.
///
/// The enum representation guarantees that a completed task carries exactly
/// its result path and a failed task exactly its error message; neither is
/// present while processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaskState {
    /// Upload accepted, conversion not finished yet
    Processing,
    /// Conversion succeeded; `result` is the processed file path
    Completed { result: PathBuf },
    /// Conversion failed; `error` is the failure description
    Failed { error: String },
}

impl TaskState {
    /// Check if this state is terminal (no further transitions)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing)
    }

    /// Status label as it appears on the wire
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// A conversion task tracked by the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    /// Task identifier, the external handle for status and download
    pub task_id: Uuid,
    /// Current lifecycle state
    #[serde(flatten)]
    pub state: TaskState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Create a new record in the processing state
    pub fn new(task_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            task_id,
            state: TaskState::Processing,
            created_at: now,
            updated_at: now,
        }
    }
}
