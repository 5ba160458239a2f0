//! Output record entity
//!
//! One classified file, ready to be written as a CSV row.

use crate::domain::entities::{DetectionResult, TargetFile};
use crate::domain::services::MappedExtension;

/// Column names of the CSV output
pub const CSV_HEADER: &str = "FileName,FullFileName,SPO-FILE-NAME,TrIDNumber,FileExt,FileTypeDescription";

/// Extra column appended when the binary flag is requested
pub const BINARY_COLUMN: &str = "IsBinary";

/// A classified target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub file_name: String,
    pub full_path: String,
    pub proposed_name: String,
    pub points: u64,
    pub label: String,
    pub description: String,
    pub is_binary: bool,
}

impl OutputRecord {
    /// Builds the record from a target, its top detection and the mapping
    pub fn new(
        target: &TargetFile,
        detection: &DetectionResult,
        mapped: &MappedExtension,
        is_binary: bool,
    ) -> Self {
        Self {
            file_name: target.file_name().to_string(),
            full_path: target.path().display().to_string(),
            proposed_name: target.renamed(&mapped.extension),
            points: detection.points(),
            label: mapped.label.clone(),
            description: mapped.description.clone(),
            is_binary,
        }
    }

    /// Formats the record as a CSV row
    ///
    /// Fields are joined verbatim: commas inside a description are not
    /// quoted, which downstream consumers of this format already expect.
    pub fn to_csv_row(&self, with_binary_column: bool) -> String {
        let mut row = format!(
            "{},{},{},{},{},{}",
            self.file_name,
            self.full_path,
            self.proposed_name,
            self.points,
            self.label,
            self.description
        );
        if with_binary_column {
            row.push(',');
            row.push_str(if self.is_binary { "true" } else { "false" });
        }
        row
    }
}

/// Returns the header row
pub fn csv_header(with_binary_column: bool) -> String {
    if with_binary_column {
        format!("{},{}", CSV_HEADER, BINARY_COLUMN)
    } else {
        CSV_HEADER.to_string()
    }
}
