//! Entity recognition — optional enrichment for skill extraction.
//!
//! The recognizer is chosen once at startup and carried in `AppState` as
//! `Arc<dyn EntityRecognizer>`. When no gazetteer is configured, or it fails to
//! load, the `NullRecognizer` is used and extraction falls back to vocabulary
//! keywords only.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Product,
    Skill,
    Person,
    Location,
    #[serde(other)]
    Other,
}

impl EntityLabel {
    /// Labels whose spans are treated as skills.
    pub fn is_skill_like(self) -> bool {
        matches!(self, EntityLabel::Org | EntityLabel::Product | EntityLabel::Skill)
    }
}

/// A labelled span of the input text. `start`/`end` are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

pub trait EntityRecognizer: Send + Sync + fmt::Debug {
    fn extract_entities(&self, text: &str) -> Vec<EntitySpan>;

    /// Short name for logs.
    fn backend(&self) -> &'static str;
}

/// Recognizes nothing. Used when the capability is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn extract_entities(&self, _text: &str) -> Vec<EntitySpan> {
        Vec::new()
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("failed to read gazetteer {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gazetteer: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gazetteer contains no entries")]
    Empty,

    #[error("failed to compile gazetteer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One gazetteer line: a surface form and its label.
#[derive(Debug, Clone, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: EntityLabel,
}

/// Dictionary-based recognizer: case-insensitive, word-bounded lookup of known
/// organisation/product/skill names.
#[derive(Debug)]
pub struct GazetteerRecognizer {
    pattern: Regex,
    labels: HashMap<String, EntityLabel>,
}

impl GazetteerRecognizer {
    pub fn new(entries: Vec<GazetteerEntry>) -> Result<Self, RecognizerError> {
        let mut labels = HashMap::new();
        let mut terms = Vec::new();

        for entry in entries {
            let term = entry.text.trim().to_lowercase();
            if term.is_empty() || labels.contains_key(&term) {
                continue;
            }
            labels.insert(term.clone(), entry.label);
            terms.push(term);
        }

        if terms.is_empty() {
            return Err(RecognizerError::Empty);
        }

        // Longest first so "google cloud" wins over "google".
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternatives: Vec<String> = terms.iter().map(|t| bounded(t)).collect();
        let pattern = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?;

        Ok(Self { pattern, labels })
    }

    pub fn from_json(json: &str) -> Result<Self, RecognizerError> {
        let entries: Vec<GazetteerEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, RecognizerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RecognizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn entry_count(&self) -> usize {
        self.labels.len()
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn extract_entities(&self, text: &str) -> Vec<EntitySpan> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| {
                let label = *self.labels.get(&m.as_str().to_lowercase())?;
                Some(EntitySpan {
                    text: m.as_str().to_string(),
                    label,
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect()
    }

    fn backend(&self) -> &'static str {
        "gazetteer"
    }
}

/// Wraps a term in word boundaries where its first/last char is a word char.
/// Terms like "c++" or ".net" would never match a plain `\b...\b` pattern.
fn bounded(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let head = if term.starts_with(is_word) { r"\b" } else { "" };
    let tail = if term.ends_with(is_word) { r"\b" } else { "" };
    format!("{head}{}{tail}", regex::escape(term))
}

/// Selects the recognizer for this process. Never fails: a missing or broken
/// gazetteer degrades to keyword-only extraction with a single warning.
pub fn load_recognizer(path: Option<&Path>) -> Arc<dyn EntityRecognizer> {
    let Some(path) = path else {
        info!("No entity gazetteer configured; using keyword-only skill extraction");
        return Arc::new(NullRecognizer);
    };

    match GazetteerRecognizer::from_path(path) {
        Ok(recognizer) => {
            info!(
                entries = recognizer.entry_count(),
                path = %path.display(),
                "Entity gazetteer loaded"
            );
            Arc::new(recognizer)
        }
        Err(e) => {
            warn!("Entity recognition unavailable ({e}); continuing with keyword-only extraction");
            Arc::new(NullRecognizer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GAZETTEER: &str = r#"[
        {"text": "Snowflake", "label": "PRODUCT"},
        {"text": "Google", "label": "ORG"},
        {"text": "Google Cloud", "label": "PRODUCT"},
        {"text": "C++", "label": "SKILL"},
        {"text": "Berlin", "label": "GPE"}
    ]"#;

    #[test]
    fn test_null_recognizer_finds_nothing() {
        assert!(NullRecognizer.extract_entities("Google and Snowflake").is_empty());
        assert_eq!(NullRecognizer.backend(), "none");
    }

    #[test]
    fn test_gazetteer_matches_case_insensitively() {
        let recognizer = GazetteerRecognizer::from_json(GAZETTEER).unwrap();
        let spans = recognizer.extract_entities("We run SNOWFLAKE pipelines");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "SNOWFLAKE");
        assert_eq!(spans[0].label, EntityLabel::Product);
        assert_eq!(&"We run SNOWFLAKE pipelines"[spans[0].start..spans[0].end], "SNOWFLAKE");
    }

    #[test]
    fn test_gazetteer_prefers_longest_term() {
        let recognizer = GazetteerRecognizer::from_json(GAZETTEER).unwrap();
        let spans = recognizer.extract_entities("Deployed on Google Cloud");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Google Cloud");
        assert_eq!(spans[0].label, EntityLabel::Product);
    }

    #[test]
    fn test_gazetteer_respects_word_boundaries() {
        let recognizer = GazetteerRecognizer::from_json(GAZETTEER).unwrap();
        assert!(recognizer.extract_entities("Googleplex tours").is_empty());
    }

    #[test]
    fn test_gazetteer_matches_symbol_terms() {
        let recognizer = GazetteerRecognizer::from_json(GAZETTEER).unwrap();
        let spans = recognizer.extract_entities("Modern C++ and Rust");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, EntityLabel::Skill);
    }

    #[test]
    fn test_unknown_label_maps_to_other() {
        let recognizer = GazetteerRecognizer::from_json(GAZETTEER).unwrap();
        let spans = recognizer.extract_entities("Office in Berlin");
        assert_eq!(spans[0].label, EntityLabel::Other);
        assert!(!spans[0].label.is_skill_like());
    }

    #[test]
    fn test_empty_gazetteer_is_rejected() {
        let err = GazetteerRecognizer::from_json("[]").unwrap_err();
        assert!(matches!(err, RecognizerError::Empty));
    }

    #[test]
    fn test_malformed_gazetteer_is_rejected() {
        let err = GazetteerRecognizer::from_json("{not json").unwrap_err();
        assert!(matches!(err, RecognizerError::Parse(_)));
    }

    #[test]
    fn test_load_recognizer_without_path_is_null() {
        assert_eq!(load_recognizer(None).backend(), "none");
    }

    #[test]
    fn test_load_recognizer_missing_file_degrades() {
        let recognizer = load_recognizer(Some(Path::new("/nonexistent/gazetteer.json")));
        assert_eq!(recognizer.backend(), "none");
    }

    #[test]
    fn test_load_recognizer_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GAZETTEER.as_bytes()).unwrap();

        let recognizer = load_recognizer(Some(file.path()));
        assert_eq!(recognizer.backend(), "gazetteer");
        assert_eq!(recognizer.extract_entities("Snowflake").len(), 1);
    }
}
