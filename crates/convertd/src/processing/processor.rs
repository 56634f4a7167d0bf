//! Background processor for conversion jobs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::convert::{to_pretty_json, Converter};
use crate::error::{Error, Result};
use crate::registry::TaskRegistry;
use crate::storage::StoragePaths;

/// One unit of background work: convert a stored upload for a task
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub task_id: Uuid,
    /// Path of the raw upload on disk
    pub input_path: PathBuf,
}

/// Runs conversion jobs and records their outcome in the task registry.
///
/// Each job is a single attempt: no retry, no cancellation, no progress
/// reporting. Failures never propagate out of the processor; they become the
/// task's terminal `failed` state.
pub struct Processor {
    registry: TaskRegistry,
    storage: StoragePaths,
    delay: Duration,
}

impl Processor {
    /// Create a processor over the shared registry and storage layout
    pub fn new(registry: TaskRegistry, storage: StoragePaths, delay: Duration) -> Self {
        Self {
            registry,
            storage,
            delay,
        }
    }

    /// Dispatch a job to run in the background, fire-and-forget.
    ///
    /// The returned handle is the job's completion signal; callers that need
    /// to await the outcome (tests, shutdown hooks) can join it, the HTTP
    /// layer just drops it.
    pub fn dispatch(self: &Arc<Self>, job: ConversionJob) -> JoinHandle<()> {
        let processor = Arc::clone(self);
        tokio::spawn(async move {
            processor.process(job).await;
        })
    }

    /// Run one job to its terminal state
    pub async fn process(&self, job: ConversionJob) {
        // Simulated processing cost, not a safety bound
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let task_id = job.task_id;
        match self.run(&job).await {
            Ok(output_path) => {
                tracing::info!("Task {} completed: {}", task_id, output_path.display());
                self.registry.complete(task_id, output_path);
            }
            Err(e) => {
                tracing::warn!("Task {} failed: {}", task_id, e);
                self.registry.fail(task_id, e.to_string());
            }
        }
    }

    /// Read, convert, and write the normalized document
    async fn run(&self, job: &ConversionJob) -> Result<PathBuf> {
        let filename = job
            .input_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::internal("Upload path has no filename"))?
            .to_string();

        let data = tokio::fs::read(&job.input_path).await?;
        let value = Converter::convert(&filename, &data)?;
        let output = to_pretty_json(&value)?;

        let output_path = self.storage.processed_path(job.task_id);
        tokio::fs::write(&output_path, output).await?;

        Ok(output_path)
    }
}
