//! CLI commands using clap

use crate::application::dto::ErrorPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Location of the TrID XML definitions when none is configured
#[cfg(windows)]
pub const DEFAULT_DEFS_DIR: &str = "C:\\TrID\\triddefs_xml\\defs\\";
#[cfg(not(windows))]
pub const DEFAULT_DEFS_DIR: &str = "/usr/share/trid/defs";

/// hst-sniff - legacy archive file type classifier
///
/// Identifies the real type of every *.HST file below a directory using
/// TrID signature definitions and prints a CSV rename plan.
#[derive(Parser, Debug)]
#[command(name = "hst-sniff")]
#[command(version)]
#[command(about = "Classify legacy .HST archive files by file signature", long_about = None)]
pub struct Cli {
    /// Directory to search recursively for *.HST files
    pub target_dir: Option<PathBuf>,

    /// Directory searched recursively for *.trid.xml definitions
    #[arg(long, env = "HST_SNIFF_DEFS_DIR", default_value = DEFAULT_DEFS_DIR)]
    pub defs_dir: PathBuf,

    /// What to do when a file cannot be classified (halt, continue)
    #[arg(long, default_value_t = ErrorPolicy::Halt)]
    pub on_error: ErrorPolicy,

    /// Append an IsBinary column to the output
    #[arg(long)]
    pub binary_column: bool,

    /// Skip the definition export/restore round trip after loading
    #[arg(long)]
    pub skip_reload: bool,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}
