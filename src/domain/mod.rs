//! Domain layer - Core business logic
//!
//! This module contains the core domain entities, the engine and output
//! traits, and the extension mapping policy. It performs no I/O.

pub mod entities;
pub mod repositories;
pub mod services;
