//! Domain entities
//!
//! Core business objects of the classification domain.

mod definition;
mod detection;
mod output_record;
mod target_file;

pub use definition::{Definition, DefinitionSet, Pattern};
pub use detection::DetectionResult;
pub use output_record::{BINARY_COLUMN, CSV_HEADER, OutputRecord, csv_header};
pub use target_file::TargetFile;
