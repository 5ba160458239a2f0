//! Extension mapping policy
//!
//! Rewrites the engine's raw (points, extension) pair into the extension and
//! label expected by the downstream document system.
//!
//! - JPG and HTML do not preview in the target viewer, JPEG and HTM do.
//! - XLS at these score ranges is really a Word template.
//! - Only the singular TIF is accepted downstream.
//! - OLE2 containers scored 8000 (doc), 93000 (msg) and 191500 are emails
//!   with attachments and are all renamed to `.doc`.
//! - MPO does not preview, JPEG does.
//! - Mapped extensions are always lower case.

/// Description used when nothing was detected
pub const DEFAULT_DESCRIPTION: &str = "Default File Type to TXT";

const JPG: &str = "JPG";
const HTML: &str = "HTML";
const XLS: &str = "XLS";
const TIF: &[&str] = &["TIF/TIFF", "TIF"];
const TMDX: &[&str] = &["TMDX/TMVX", "TMDX"];
const MPO: &str = "MPO";

/// The outcome of the mapping policy for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedExtension {
    /// Extension for the proposed file name, without the dot
    pub extension: String,
    /// Value of the `FileExt` column
    pub label: String,
    /// Value of the `FileTypeDescription` column
    pub description: String,
}

impl MappedExtension {
    fn new(extension: &str, label: &str, description: &str) -> Self {
        Self {
            extension: extension.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Maps a top detection to its output extension and label
///
/// Point rules are checked before extension rules.
pub fn map_extension(points: u64, raw_extension: &str, raw_description: &str) -> MappedExtension {
    match points {
        0 => return MappedExtension::new("txt", "TXT", DEFAULT_DESCRIPTION),
        8000 | 191500 => return MappedExtension::new("doc", "DOC", raw_description),
        93000 => return MappedExtension::new("doc", "MSG", raw_description),
        _ => {}
    }

    match raw_extension {
        JPG => MappedExtension::new("jpeg", "JPEG", raw_description),
        HTML => MappedExtension::new("htm", "HTM", raw_description),
        XLS => MappedExtension::new("doc", "DOC", raw_description),
        MPO => MappedExtension::new("jpeg", "MPO", raw_description),
        ext if TIF.contains(&ext) => MappedExtension::new("tif", "TIF", raw_description),
        ext if TMDX.contains(&ext) => MappedExtension::new("tmdx", "TMDX", raw_description),
        ext => MappedExtension {
            extension: ext.to_lowercase(),
            label: ext.to_string(),
            description: raw_description.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_ignores_extension() {
        let mapped = map_extension(0, "JPG", "JPEG Bitmap");
        assert_eq!(mapped, MappedExtension::new("txt", "TXT", DEFAULT_DESCRIPTION));
    }

    #[test]
    fn msg_score_keeps_label_but_renames_to_doc() {
        let mapped = map_extension(93000, "MSG", "Outlook Message");
        assert_eq!(mapped.extension, "doc");
        assert_eq!(mapped.label, "MSG");
        assert_eq!(mapped.description, "Outlook Message");
    }

    #[test]
    fn default_lowercases_extension_only() {
        let mapped = map_extension(2000, "PDF", "Adobe Portable Document Format");
        assert_eq!(mapped.extension, "pdf");
        assert_eq!(mapped.label, "PDF");
    }
}
