//! TrID-compatible pattern engine
//!
//! Scores a submitted file against every loaded definition. A definition
//! matches when all its front-block patterns are found at their positions
//! and all its global strings occur somewhere in the file. Global strings
//! are located with a single Aho-Corasick pass over the file content.

use super::parser::parse_definition;
use super::submitted_file::SubmittedFile;
use crate::domain::entities::{Definition, DefinitionSet, DetectionResult};
use crate::domain::repositories::{DetectionEngine, EngineError};
use aho_corasick::AhoCorasick;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Points per matched pattern byte at offset 0
pub const FRONT_BYTE_POINTS: u64 = 1000;
/// Points per matched pattern byte at any other offset
pub const OFFSET_BYTE_POINTS: u64 = 500;
/// Points per matched global string byte
pub const STRING_BYTE_POINTS: u64 = 500;

/// Detection engine backed by TrID XML definitions
#[derive(Default)]
pub struct TridEngine {
    definitions: DefinitionSet,
    /// Automaton over every global string of every definition
    string_matcher: Option<AhoCorasick>,
    /// Maps pattern index to (definition index, string index)
    string_map: Vec<(usize, usize)>,
    submitted: Option<SubmittedFile>,
    results: Vec<DetectionResult>,
}

impl TridEngine {
    /// Creates an engine with no definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from an existing definition set
    pub fn with_definitions(definitions: DefinitionSet) -> Self {
        let mut engine = Self::new();
        engine.set_definitions(definitions);
        engine
    }

    /// Adds an already parsed definition
    pub fn register(&mut self, definition: Definition) {
        self.definitions.push(definition);
        // Invalidate the string matcher - needs rebuild
        self.string_matcher = None;
    }

    fn build_string_matcher(&mut self) -> Result<(), EngineError> {
        let mut patterns: Vec<&[u8]> = Vec::new();
        let mut string_map = Vec::new();

        for (def_idx, def) in self.definitions.iter().enumerate() {
            for (str_idx, string) in def.strings().iter().enumerate() {
                patterns.push(string);
                string_map.push((def_idx, str_idx));
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| EngineError::Matcher(e.to_string()))?;

        self.string_matcher = Some(matcher);
        self.string_map = string_map;
        Ok(())
    }

    /// Returns, per definition, which global strings occur in the data
    fn find_strings(&self, data: &[u8]) -> Vec<Vec<bool>> {
        let mut found: Vec<Vec<bool>> = self
            .definitions
            .iter()
            .map(|def| vec![false; def.strings().len()])
            .collect();

        if let Some(matcher) = &self.string_matcher {
            for mat in matcher.find_overlapping_iter(data) {
                let (def_idx, str_idx) = self.string_map[mat.pattern().as_usize()];
                found[def_idx][str_idx] = true;
            }
        }

        found
    }

    /// Scores one definition, returning 0 when it does not match
    fn score(definition: &Definition, data: &[u8], strings_found: &[bool]) -> u64 {
        if definition.is_empty() {
            return 0;
        }

        let mut points = 0;
        for pattern in definition.patterns() {
            if !pattern.matches(data) {
                return 0;
            }
            let weight = if pattern.position() == 0 {
                FRONT_BYTE_POINTS
            } else {
                OFFSET_BYTE_POINTS
            };
            points += pattern.bytes().len() as u64 * weight;
        }

        for (string, found) in definition.strings().iter().zip(strings_found) {
            if !found {
                return 0;
            }
            points += string.len() as u64 * STRING_BYTE_POINTS;
        }

        points
    }
}

impl DetectionEngine for TridEngine {
    fn load_definition(&mut self, path: &Path) -> Result<(), EngineError> {
        let raw = fs::read(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let xml = String::from_utf8_lossy(&raw);
        let definition =
            parse_definition(&xml).map_err(|e| EngineError::InvalidDefinition {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        trace!("Loaded definition {} from {}", definition, path.display());
        self.register(definition);
        Ok(())
    }

    fn clear_definitions(&mut self) {
        self.definitions.clear();
        self.string_matcher = None;
        self.string_map.clear();
        self.results.clear();
    }

    fn definitions(&self) -> DefinitionSet {
        self.definitions.clone()
    }

    fn set_definitions(&mut self, definitions: DefinitionSet) {
        self.definitions = definitions;
        self.string_matcher = None;
        self.results.clear();
    }

    fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    fn submit_file(&mut self, path: &Path) -> Result<(), EngineError> {
        // Release the previous mapping before opening the next file
        self.submitted = None;
        self.results.clear();
        self.submitted = Some(SubmittedFile::open(path)?);
        Ok(())
    }

    fn is_binary(&self) -> Result<bool, EngineError> {
        self.submitted
            .as_ref()
            .map(SubmittedFile::is_binary)
            .ok_or(EngineError::NothingSubmitted)
    }

    fn analyze(&mut self) -> Result<(), EngineError> {
        if self.submitted.is_none() {
            return Err(EngineError::NothingSubmitted);
        }
        if self.string_matcher.is_none() {
            self.build_string_matcher()?;
        }

        let Some(file) = self.submitted.as_ref() else {
            return Err(EngineError::NothingSubmitted);
        };
        let data = file.as_slice();
        let strings_found = self.find_strings(data);

        let mut results: Vec<DetectionResult> = self
            .definitions
            .iter()
            .zip(&strings_found)
            .filter_map(|(def, found)| {
                let points = Self::score(def, data, found);
                (points > 0).then(|| {
                    DetectionResult::new(points, def.extension(), def.file_type())
                        .with_mime(def.mime().map(str::to_string))
                })
            })
            .collect();

        // Stable sort keeps load order between equal scores
        results.sort_by(|a, b| b.points().cmp(&a.points()));

        let total: u64 = results.iter().map(DetectionResult::points).sum();
        if total > 0 {
            results = results
                .into_iter()
                .map(|r| {
                    let share = r.points() as f64 * 100.0 / total as f64;
                    r.with_percentage(share)
                })
                .collect();
        }

        debug!(
            "Analyzed {}: {} candidate(s)",
            file.path().display(),
            results.len()
        );
        self.results = results;
        Ok(())
    }

    fn top_results(&self, count: usize) -> Vec<DetectionResult> {
        self.results.iter().take(count).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Pattern;

    fn ole2() -> Definition {
        Definition::new("Generic OLE2 / Multistream Compound", "").with_pattern(Pattern::new(
            0,
            vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        ))
    }

    #[test]
    fn front_pattern_scores_per_byte() {
        let data = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert_eq!(TridEngine::score(&ole2(), &data, &[]), 8000);
    }

    #[test]
    fn offset_patterns_and_strings_use_lower_weight() {
        let def = Definition::new("Test", "TST")
            .with_pattern(Pattern::new(4, vec![0x01, 0x02]))
            .with_string(b"ABC".to_vec());
        let data = [0u8, 0, 0, 0, 1, 2];
        assert_eq!(TridEngine::score(&def, &data, &[true]), 2 * 500 + 3 * 500);
        assert_eq!(TridEngine::score(&def, &data, &[false]), 0);
    }

    #[test]
    fn empty_definition_never_matches() {
        assert_eq!(TridEngine::score(&Definition::new("Nothing", "X"), b"abc", &[]), 0);
    }

    #[test]
    fn analyze_without_submission_fails() {
        let mut engine = TridEngine::new();
        assert!(matches!(engine.analyze(), Err(EngineError::NothingSubmitted)));
        assert!(matches!(engine.is_binary(), Err(EngineError::NothingSubmitted)));
    }
}
