//! CLI module

mod commands;
mod logging;
mod progress;
mod runner;

pub use commands::{Cli, DEFAULT_DEFS_DIR};
pub use logging::init_logging;
pub use progress::ProgressReporter;
pub use runner::{
    NO_DEFINITIONS_MESSAGE, NO_TARGETS_MESSAGE, USAGE_MESSAGE, directory_not_found_message, full_path,
    run,
};
