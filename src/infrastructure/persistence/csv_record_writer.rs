//! CSV record writer
//!
//! Streams classified records as CSV lines to any `Write` target,
//! normally standard output.

use crate::domain::entities::{OutputRecord, csv_header};
use crate::domain::repositories::{RecordSink, SinkError};
use std::io::Write;

/// Lines printed when a batch stops on a file that cannot be read
pub const ABORT_NOTICE: [&str; 2] = [
    "* Error: Unable to open file.",
    "  (maybe it's locked by another process?!)",
];

/// CSV writer over an arbitrary output stream
pub struct CsvRecordWriter<W: Write> {
    out: W,
    binary_column: bool,
    records_written: usize,
}

impl<W: Write> CsvRecordWriter<W> {
    /// Creates a writer without the binary flag column
    pub fn new(out: W) -> Self {
        Self {
            out,
            binary_column: false,
            records_written: 0,
        }
    }

    /// Appends the `IsBinary` column to the header and every row
    pub fn with_binary_column(mut self, enabled: bool) -> Self {
        self.binary_column = enabled;
        self
    }

    /// Returns the underlying stream for free-form messages
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the writer, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RecordSink for CsvRecordWriter<W> {
    fn write_header(&mut self) -> Result<(), SinkError> {
        let header = csv_header(self.binary_column);
        self.line(&header)
    }

    fn write_record(&mut self, record: &OutputRecord) -> Result<(), SinkError> {
        let row = record.to_csv_row(self.binary_column);
        self.line(&row)?;
        self.records_written += 1;
        Ok(())
    }

    fn write_abort_notice(&mut self) -> Result<(), SinkError> {
        for line in ABORT_NOTICE {
            self.line(line)?;
        }
        Ok(())
    }

    fn records_written(&self) -> usize {
        self.records_written
    }
}
