//! Target file entity

use std::path::{Path, PathBuf};

/// A file queued for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    file_name: String,
    stem: String,
}

impl TargetFile {
    /// Creates a target from its full path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            stem,
        }
    }

    /// Returns the full path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the base name, e.g. `A.HST`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the base name without its extension, e.g. `A`
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Returns `<stem>.<extension>`
    pub fn renamed(&self, extension: &str) -> String {
        format!("{}.{}", self.stem, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_stem() {
        let target = TargetFile::new("/archive/2019/A.HST");
        assert_eq!(target.file_name(), "A.HST");
        assert_eq!(target.stem(), "A");
        assert_eq!(target.renamed("txt"), "A.txt");
    }

    #[test]
    fn only_last_extension_is_dropped() {
        let target = TargetFile::new("/archive/letter.final.HST");
        assert_eq!(target.stem(), "letter.final");
        assert_eq!(target.renamed("doc"), "letter.final.doc");
    }
}
