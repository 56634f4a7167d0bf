//! Background conversion of accepted uploads

mod processor;

pub use processor::{ConversionJob, Processor};
