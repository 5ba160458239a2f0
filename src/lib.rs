//! hst-sniff
//!
//! Identifies the real file type of legacy `.HST` archive files using TrID
//! signature definitions and proposes a renamed file for each one.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::entities::{Definition, DefinitionSet, DetectionResult, OutputRecord, TargetFile};
pub use domain::repositories::{DetectionEngine, RecordSink};
pub use domain::services::{MappedExtension, map_extension};
pub use infrastructure::trid::TridEngine;
