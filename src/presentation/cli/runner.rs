//! CLI driver
//!
//! Validates the arguments, loads the definitions, discovers the targets and
//! runs the batch. Everything meant for the user is written to `out`.

use super::{Cli, ProgressReporter};
use crate::application::dto::BatchOptions;
use crate::application::{ClassifyBatchUseCase, LoadDefinitionsUseCase};
use crate::domain::entities::TargetFile;
use crate::domain::repositories::RecordSink;
use crate::infrastructure::discovery::{DiscoveryError, FileDiscovery};
use crate::infrastructure::persistence::CsvRecordWriter;
use crate::infrastructure::trid::TridEngine;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{self, Component, Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

pub const USAGE_MESSAGE: &str = "Please enter a directory path to search.";

pub const NO_DEFINITIONS_MESSAGE: [&str; 2] = [
    "No definitions available!",
    "Download an up to date defs library from http://mark0.ngi.it",
];

pub const NO_TARGETS_MESSAGE: &str = "No target *.HST files available!";

/// Message printed for a missing target directory
pub fn directory_not_found_message(dir: &Path) -> String {
    format!("Directory Not found: .{}", dir.display())
}

/// Makes `dir` absolute and collapses `.` and `..` lexically
///
/// Symlinks are left unresolved. `..` at the root stays at the root.
pub fn full_path(dir: &Path) -> std::io::Result<PathBuf> {
    let absolute = path::absolute(dir)?;
    let mut full = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if full.parent().is_some() {
                    full.pop();
                }
            }
            other => full.push(other),
        }
    }
    Ok(full)
}

/// Runs the classifier, returning the process exit code
///
/// Validation failures print a message and return exit code 1. A halted
/// batch still returns success.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode> {
    let Some(target_arg) = cli.target_dir.as_deref() else {
        writeln!(out, "{}", USAGE_MESSAGE)?;
        return Ok(ExitCode::from(1));
    };

    let target_dir = full_path(target_arg)
        .with_context(|| format!("Failed to resolve {}", target_arg.display()))?;
    if !target_dir.is_dir() {
        writeln!(out, "{}", directory_not_found_message(&target_dir))?;
        return Ok(ExitCode::from(1));
    }

    let definition_files = match FileDiscovery::definitions(&cli.defs_dir)?.find() {
        Ok(files) => files,
        Err(DiscoveryError::DirectoryNotFound(dir)) => {
            warn!("Definitions directory {} does not exist", dir.display());
            Vec::new()
        }
        Err(e) => return Err(e).context("Failed to search for definitions"),
    };
    if definition_files.is_empty() {
        for line in NO_DEFINITIONS_MESSAGE {
            writeln!(out, "{}", line)?;
        }
        return Ok(ExitCode::from(1));
    }

    let mut sink = CsvRecordWriter::new(&mut *out).with_binary_column(cli.binary_column);
    sink.write_header()?;

    let mut options = BatchOptions::default().with_error_policy(cli.on_error);
    if cli.skip_reload {
        options = options.without_reload();
    }

    let mut engine = TridEngine::new();
    let loaded = LoadDefinitionsUseCase::new(options.clone())
        .execute(&mut engine, &definition_files)
        .context("Failed to load definitions")?;
    info!("{} definitions ready from {}", loaded, cli.defs_dir.display());

    let targets: Vec<TargetFile> = FileDiscovery::targets(&target_dir)?
        .find()
        .context("Failed to search for target files")?
        .into_iter()
        .map(TargetFile::new)
        .collect();
    if targets.is_empty() {
        writeln!(sink.get_mut(), "{}", NO_TARGETS_MESSAGE)?;
        return Ok(ExitCode::from(1));
    }

    let progress = ProgressReporter::for_classification(targets.len() as u64, cli.progress);
    let report = ClassifyBatchUseCase::new(options).execute(
        &mut engine,
        &targets,
        &mut sink,
        Some(progress.batch_callback()),
    )?;
    progress.finish(&report.summary());

    if report.failed() > 0 {
        warn!("{}", report.summary());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_collapses_dots() {
        assert_eq!(full_path(Path::new("/x/a/../data/./y")).unwrap(), Path::new("/x/data/y"));
        assert_eq!(full_path(Path::new("/../x")).unwrap(), Path::new("/x"));
        assert!(full_path(Path::new("rel")).unwrap().is_absolute());
    }
}
