//! Classify batch use case
//!
//! Runs every target file through the detection engine, maps the top
//! result through the extension policy and writes one record per file.

use crate::application::dto::{BatchOptions, BatchReport, ErrorPolicy, FileOutcome};
use crate::domain::entities::{DetectionResult, OutputRecord, TargetFile};
use crate::domain::repositories::{DetectionEngine, EngineError, RecordSink, SinkError};
use crate::domain::services::map_extension;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Progress callback type, called with (files done, total files)
pub type ProgressCallback = Box<dyn Fn(usize, usize)>;

/// Errors that can occur while classifying one file
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Detection failed for {path}: {source}")]
    Engine {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

/// Classify batch use case
pub struct ClassifyBatchUseCase {
    options: BatchOptions,
}

impl ClassifyBatchUseCase {
    /// Creates a new classify batch use case
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// Classifies a single file
    ///
    /// Only the best-ranked candidate is consulted. When nothing matched,
    /// the unidentified result (0 points) is used.
    pub fn classify_file<E: DetectionEngine>(
        engine: &mut E,
        target: &TargetFile,
    ) -> Result<OutputRecord, ClassifyError> {
        let path = target.path();
        let engine_error = |source| ClassifyError::Engine {
            path: path.to_path_buf(),
            source,
        };

        engine.submit_file(path).map_err(engine_error)?;

        let is_binary = engine.is_binary().map_err(engine_error)?;
        if !is_binary {
            warn!("{} does not look like a binary file", path.display());
        }

        engine.analyze().map_err(engine_error)?;

        let top = engine
            .top_results(1)
            .into_iter()
            .next()
            .unwrap_or_else(DetectionResult::unidentified);
        if top.is_identified() {
            debug!(
                "{}: {} points, ext '{}', type '{}', mime '{}' ({:.1}%)",
                target.file_name(),
                top.points(),
                top.extension(),
                top.file_type(),
                top.mime().unwrap_or("-"),
                top.percentage()
            );
        } else {
            debug!("{}: no definition matched", target.file_name());
        }

        let mapped = map_extension(top.points(), top.extension(), top.file_type());
        Ok(OutputRecord::new(target, &top, &mapped, is_binary))
    }

    /// Executes the batch
    ///
    /// Output errors are fatal. Per-file failures are handled according to
    /// the configured error policy.
    pub fn execute<E: DetectionEngine, S: RecordSink>(
        &self,
        engine: &mut E,
        targets: &[TargetFile],
        sink: &mut S,
        progress_callback: Option<ProgressCallback>,
    ) -> Result<BatchReport, SinkError> {
        let total = targets.len();
        let mut report = BatchReport::default();

        info!(
            "Classifying {} file(s) with error policy '{}'",
            total, self.options.error_policy
        );

        for (index, target) in targets.iter().enumerate() {
            let outcome = match Self::classify_file(engine, target) {
                Ok(record) => {
                    sink.write_record(&record)?;
                    FileOutcome::Classified(record)
                }
                Err(e) => {
                    error!("{}", e);
                    FileOutcome::Failed {
                        path: target.path().to_path_buf(),
                        reason: e.to_string(),
                    }
                }
            };
            report.add_outcome(&outcome);

            if let Some(ref callback) = progress_callback {
                callback(index + 1, total);
            }

            if matches!(outcome, FileOutcome::Failed { .. })
                && self.options.error_policy == ErrorPolicy::Halt
            {
                sink.write_abort_notice()?;
                report.halted = true;
                report.skipped = total - index - 1;
                break;
            }
        }

        info!("Batch complete: {}", report.summary());
        Ok(report)
    }
}
