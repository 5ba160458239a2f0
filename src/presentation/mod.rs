//! Presentation layer
//!
//! Command-line interface.

pub mod cli;
