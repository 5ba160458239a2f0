//! Filesystem discovery
//!
//! Recursively enumerates files whose name matches a glob pattern. Used
//! both for signature definitions and for the target archive files.

use glob::{MatchOptions, Pattern};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// File name pattern of TrID XML definitions
pub const DEFINITION_PATTERN: &str = "*.trid.xml";

/// File name pattern of the legacy archive files to classify
pub const TARGET_PATTERN: &str = "*.HST";

/// Errors that can occur while enumerating files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Unable to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Recursive file finder matching base names against a glob pattern
///
/// Matching is case-insensitive. Entries are visited sorted by file name
/// within each directory.
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    root: PathBuf,
    pattern: Pattern,
}

impl FileDiscovery {
    /// Creates a finder for `pattern` under `root`
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self, DiscoveryError> {
        let pattern = Pattern::new(pattern).map_err(|source| DiscoveryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            root: root.into(),
            pattern,
        })
    }

    /// Finder for definition files
    pub fn definitions(root: impl Into<PathBuf>) -> Result<Self, DiscoveryError> {
        Self::new(root, DEFINITION_PATTERN)
    }

    /// Finder for target archive files
    pub fn targets(root: impl Into<PathBuf>) -> Result<Self, DiscoveryError> {
        Self::new(root, TARGET_PATTERN)
    }

    /// Checks a base name against the pattern
    pub fn matches_name(&self, name: &str) -> bool {
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        self.pattern.matches_with(name, options)
    }

    /// Returns every matching non-directory entry below the root
    ///
    /// Any unreadable directory aborts the enumeration.
    pub fn find(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !self.root.is_dir() {
            return Err(DiscoveryError::DirectoryNotFound(self.root.clone()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| DiscoveryError::Walk {
                path: self.root.clone(),
                source,
            })?;

            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.matches_name(&name) {
                found.push(entry.into_path());
            }
        }

        debug!(
            "Found {} file(s) matching {} under {}",
            found.len(),
            self.pattern.as_str(),
            self.root.display()
        );
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_pattern_ignores_case() {
        let finder = FileDiscovery::targets("/").unwrap();
        assert!(finder.matches_name("A.HST"));
        assert!(finder.matches_name("b.hst"));
        assert!(!finder.matches_name("A.HST.bak"));
        assert!(!finder.matches_name("notes.txt"));
    }

    #[test]
    fn definition_pattern_requires_double_extension() {
        let finder = FileDiscovery::definitions("/").unwrap();
        assert!(finder.matches_name("bitmap-jpeg.trid.xml"));
        assert!(!finder.matches_name("bitmap-jpeg.xml"));
    }

    #[test]
    fn missing_root_is_reported() {
        let finder = FileDiscovery::targets("/definitely/not/here").unwrap();
        assert!(matches!(finder.find(), Err(DiscoveryError::DirectoryNotFound(_))));
    }
}
