//! Domain services
//!
//! Pure business rules that operate on domain entities.

mod extension_policy;

pub use extension_policy::{DEFAULT_DESCRIPTION, MappedExtension, map_extension};
