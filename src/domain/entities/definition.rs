//! Signature definition entity
//!
//! A definition is one parsed signature rule: the bytes that must appear at
//! fixed positions of a file, plus strings that must appear anywhere in it,
//! together with the file type they identify.

use std::fmt;

/// A run of bytes expected at a fixed position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    position: usize,
    bytes: Vec<u8>,
}

impl Pattern {
    /// Creates a new pattern
    pub fn new(position: usize, bytes: Vec<u8>) -> Self {
        Self { position, bytes }
    }

    /// Returns the byte offset where the pattern must start
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the expected bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Checks whether the data holds this pattern at its position
    pub fn matches(&self, data: &[u8]) -> bool {
        let Some(end) = self.position.checked_add(self.bytes.len()) else {
            return false;
        };
        data.get(self.position..end) == Some(self.bytes.as_slice())
    }
}

/// A file type signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    file_type: String,
    extension: String,
    mime: Option<String>,
    patterns: Vec<Pattern>,
    strings: Vec<Vec<u8>>,
}

impl Definition {
    /// Creates a definition with no patterns or strings
    pub fn new(file_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            extension: extension.into(),
            mime: None,
            patterns: Vec::new(),
            strings: Vec::new(),
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_string(mut self, string: impl Into<Vec<u8>>) -> Self {
        self.strings.push(string.into());
        self
    }

    /// Returns the human-readable file type description
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Returns the extension as written in the definition (e.g. `TIF/TIFF`)
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the global strings, matched anywhere in the file
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// Returns true if the definition has nothing to match on
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.strings.is_empty()
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.file_type, self.extension)
    }
}

/// An ordered collection of loaded definitions
///
/// This is the unit exported from and restored into a detection engine.
/// Order is load order, which breaks ties between equally scored matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSet {
    definitions: Vec<Definition>,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.definitions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }
}

impl FromIterator<Definition> for DefinitionSet {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DefinitionSet {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
