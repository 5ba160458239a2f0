//! Detection result entity
//!
//! One ranked candidate returned by a detection engine for a submitted file.

/// A candidate file type for an analyzed file
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Engine-assigned score
    points: u64,
    /// Raw extension as written in the matching definition
    extension: String,
    /// Raw file type description
    file_type: String,
    mime: Option<String>,
    /// Share of the total points of all candidates (0.0 - 100.0)
    percentage: f64,
}

impl DetectionResult {
    /// Creates a new detection result
    pub fn new(points: u64, extension: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            points,
            extension: extension.into(),
            file_type: file_type.into(),
            mime: None,
            percentage: 0.0,
        }
    }

    /// The result used when no definition matched
    pub fn unidentified() -> Self {
        Self::new(0, "", "")
    }

    pub fn with_mime(mut self, mime: Option<String>) -> Self {
        self.mime = mime;
        self
    }

    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage.clamp(0.0, 100.0);
        self
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn is_identified(&self) -> bool {
        self.points > 0
    }
}
