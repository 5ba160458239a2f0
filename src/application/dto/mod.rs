//! Data Transfer Objects

mod batch_options;
mod batch_report;

pub use batch_options::{BatchOptions, ErrorPolicy};
pub use batch_report::{BatchReport, FileFailure, FileOutcome};
