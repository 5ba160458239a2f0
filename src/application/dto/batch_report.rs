//! Batch report DTO

use crate::domain::entities::OutputRecord;
use std::path::PathBuf;

/// Result of classifying one target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Classified(OutputRecord),
    Failed { path: PathBuf, reason: String },
}

/// A file that could not be classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Summary of a classification batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Files for which a record was written
    pub classified: usize,
    /// Files that failed
    pub failures: Vec<FileFailure>,
    /// Files never attempted because the batch halted
    pub skipped: usize,
    /// Whether the batch stopped early
    pub halted: bool,
    /// Classified files that did not look binary
    pub non_binary: usize,
}

impl BatchReport {
    /// Records one outcome
    pub fn add_outcome(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Classified(record) => {
                self.classified += 1;
                if !record.is_binary {
                    self.non_binary += 1;
                }
            }
            FileOutcome::Failed { path, reason } => self.failures.push(FileFailure {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// Returns the number of failed files
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns a one-line summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} classified, {} failed",
            self.classified,
            self.failed()
        );
        if self.halted {
            summary.push_str(&format!(", halted with {} file(s) not processed", self.skipped));
        }
        if self.non_binary > 0 {
            summary.push_str(&format!(", {} non-binary", self.non_binary));
        }
        summary
    }
}
