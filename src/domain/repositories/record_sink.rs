//! Record sink trait
//!
//! Defines where classified records and batch diagnostics are written.

use crate::domain::entities::OutputRecord;
use thiserror::Error;

/// Errors that can occur when writing output
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Trait for classification output
///
/// Rows are written as they are produced so a halted batch still leaves
/// every row emitted before the fault.
pub trait RecordSink {
    /// Writes the column header
    fn write_header(&mut self) -> Result<(), SinkError>;

    /// Writes one classified record
    fn write_record(&mut self, record: &OutputRecord) -> Result<(), SinkError>;

    /// Writes the notice shown when a batch stops on a failed file
    fn write_abort_notice(&mut self) -> Result<(), SinkError>;

    /// Returns the number of records written so far
    fn records_written(&self) -> usize;
}
