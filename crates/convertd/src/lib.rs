//! convertd: HTTP file-conversion service with background processing
//!
//! This crate provides a small HTTP service that accepts CSV or JSON uploads,
//! converts them into normalized JSON documents in the background, and lets
//! clients poll a task registry for completion and download the result.

pub mod config;
pub mod convert;
pub mod error;
pub mod processing;
pub mod registry;
pub mod server;
pub mod storage;
pub mod types;

pub use config::ConvertConfig;
pub use error::{Error, Result};
pub use registry::TaskRegistry;
pub use types::{FileFormat, TaskRecord, TaskState};
