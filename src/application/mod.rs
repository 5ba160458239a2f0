//! Application layer
//!
//! Use cases that orchestrate the engine, the mapping policy and output.

mod classify_batch;
pub mod dto;
mod load_definitions;

pub use classify_batch::{ClassifyBatchUseCase, ClassifyError, ProgressCallback};
pub use load_definitions::LoadDefinitionsUseCase;
