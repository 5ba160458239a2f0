//! Detection engine trait
//!
//! Defines the capability consumed by the classification pipeline: load
//! signature definitions, submit a file, analyze it and read back ranked
//! candidates. The matching algorithm itself lives behind this seam.

use crate::domain::entities::{DefinitionSet, DetectionResult};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur inside a detection engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid definition {path}: {message}")]
    InvalidDefinition { path: PathBuf, message: String },

    #[error("Unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No file submitted for analysis")]
    NothingSubmitted,

    #[error("Pattern matcher error: {0}")]
    Matcher(String),
}

/// Trait for file-type detection engines
///
/// The engine is stateful: definitions accumulate across `load_definition`
/// calls and the submitted file stays current until the next submission.
///
/// # Example
///
/// ```ignore
/// let mut engine = TridEngine::new();
/// engine.load_definition(Path::new("defs/bitmap-jpeg.trid.xml"))?;
/// engine.submit_file(Path::new("archive/A.HST"))?;
/// engine.analyze()?;
/// let top = engine.top_results(1);
/// ```
pub trait DetectionEngine {
    /// Parses a definition file and adds it to the loaded set
    fn load_definition(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Removes every loaded definition
    fn clear_definitions(&mut self);

    /// Exports a snapshot of the loaded definitions
    fn definitions(&self) -> DefinitionSet;

    /// Replaces the loaded definitions with the given set
    fn set_definitions(&mut self, definitions: DefinitionSet);

    /// Returns the number of loaded definitions
    fn definition_count(&self) -> usize;

    /// Opens a file for analysis, replacing any previous submission
    fn submit_file(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Reports whether the submitted file looks binary
    fn is_binary(&self) -> Result<bool, EngineError>;

    /// Matches the submitted file against the loaded definitions
    fn analyze(&mut self) -> Result<(), EngineError>;

    /// Returns at most `count` results of the last analysis, best first
    fn top_results(&self, count: usize) -> Vec<DetectionResult>;
}
