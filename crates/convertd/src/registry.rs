//! In-memory task registry

use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::types::{TaskRecord, TaskState};

/// Process-wide registry of conversion tasks.
///
/// Cheap to clone; all clones share the same map. Entries are never removed,
/// so the registry grows for the life of the process. Terminal states are
/// final: completion or failure reported for a task that already reached a
/// terminal state is ignored.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Arc<DashMap<Uuid, TaskRecord>>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new task in the processing state
    pub fn create(&self, task_id: Uuid) -> TaskRecord {
        let record = TaskRecord::new(task_id);
        self.tasks.insert(task_id, record.clone());
        record
    }

    /// Mark a task completed with the path of its processed output
    pub fn complete(&self, task_id: Uuid, result: PathBuf) {
        self.transition(task_id, TaskState::Completed { result });
    }

    /// Mark a task failed with a human-readable description
    pub fn fail(&self, task_id: Uuid, error: String) {
        self.transition(task_id, TaskState::Failed { error });
    }

    fn transition(&self, task_id: Uuid, state: TaskState) {
        if let Some(mut record) = self.tasks.get_mut(&task_id) {
            if record.state.is_terminal() {
                tracing::warn!(
                    "Ignoring transition to {} for task {} already in terminal state",
                    state.status_label(),
                    task_id
                );
                return;
            }
            record.state = state;
            record.updated_at = chrono::Utc::now();
        }
    }

    /// Look up a task by id
    pub fn get(&self, task_id: Uuid) -> Option<TaskRecord> {
        self.tasks.get(&task_id).map(|r| r.clone())
    }

    /// All tracked tasks
    pub fn list(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(|e| e.value().clone()).collect()
    }

    /// Number of tracked tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
