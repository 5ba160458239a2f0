//! Read-only view of a submitted file
//!
//! Files are memory-mapped so analysis can scan the whole content without
//! copying it. Zero-length files cannot be mapped and are held as an
//! empty buffer instead.

use crate::domain::repositories::EngineError;
use memmap2::Mmap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

const TEXT_SAMPLE_SIZE: usize = 8192;

enum Content {
    Mapped(Mmap),
    Empty,
}

/// A file opened for analysis
pub struct SubmittedFile {
    path: PathBuf,
    content: Content,
}

impl SubmittedFile {
    /// Opens and maps the file
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let open_error = |source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = OpenOptions::new().read(true).open(path).map_err(open_error)?;
        let size = file.metadata().map_err(open_error)?.len();

        let content = if size == 0 {
            Content::Empty
        } else {
            // The mapping is read-only and dropped before the next submission.
            let mmap = unsafe { Mmap::map(&file) }.map_err(open_error)?;
            Content::Mapped(mmap)
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the whole file content
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match &self.content {
            Content::Mapped(mmap) => &mmap[..],
            Content::Empty => &[],
        }
    }

    /// Returns true if the leading bytes do not look like text
    ///
    /// Text has no NUL bytes and under 10% control characters other
    /// than tab, CR and LF.
    pub fn is_binary(&self) -> bool {
        let data = self.as_slice();
        if data.is_empty() {
            return false;
        }

        let sample = &data[..data.len().min(TEXT_SAMPLE_SIZE)];
        let mut control_count = 0;
        for &byte in sample {
            if byte == 0 {
                return true;
            }
            if byte < 32 && !matches!(byte, b'\n' | b'\r' | b'\t') {
                control_count += 1;
            }
        }

        control_count * 10 >= sample.len()
    }
}
