//! TrID definition support
//!
//! Parser for `*.trid.xml` signature files and the pattern engine that
//! scores files against them.

mod engine;
mod parser;
mod submitted_file;

pub use engine::{FRONT_BYTE_POINTS, OFFSET_BYTE_POINTS, STRING_BYTE_POINTS, TridEngine};
pub use parser::{DefinitionError, parse_definition};
pub use submitted_file::SubmittedFile;
