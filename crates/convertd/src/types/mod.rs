//! Core types for the conversion service

pub mod format;
pub mod task;

pub use format::FileFormat;
pub use task::{TaskRecord, TaskState};
