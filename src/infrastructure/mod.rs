//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: the TrID engine,
//! filesystem discovery and CSV output.

pub mod discovery;
pub mod persistence;
pub mod trid;
