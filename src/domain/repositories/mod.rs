//! Repository traits (interfaces)
//!
//! These traits define the contracts for external collaborators: the
//! detection engine and the record output.

mod detection_engine;
mod record_sink;

pub use detection_engine::{DetectionEngine, EngineError};
pub use record_sink::{RecordSink, SinkError};
