//! Output adapters

mod csv_record_writer;

pub use csv_record_writer::{ABORT_NOTICE, CsvRecordWriter};
