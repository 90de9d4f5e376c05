//! Text normalization ahead of similarity scoring
//!
//! Two modes mirror the two analyzer variants: `Basic` lowercases only, while
//! `Linguistic` also tokenizes, drops stop words and non-alphabetic tokens, and
//! reduces each remaining token to its base form. Normalized text is scorer
//! input only and is never shown to the user.

use crate::error::{Result, SkillGapError};
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Embedded English stop-word list, loaded once at startup.
const STOPWORDS_EN: &str = include_str!("../../assets/stopwords_en.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Lowercase only.
    Basic,
    /// Lowercase, alphabetic tokens only, stop words removed, stemmed.
    Linguistic,
}

impl std::fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeMode::Basic => write!(f, "basic"),
            NormalizeMode::Linguistic => write!(f, "linguistic"),
        }
    }
}

pub struct Normalizer {
    mode: NormalizeMode,
    resources: Option<LinguisticResources>,
}

/// Language resources for linguistic mode. Built once at startup; a missing or
/// empty resource is fatal at boot rather than a per-request error.
struct LinguisticResources {
    stop_words: HashSet<String>,
    stemmer: Stemmer,
}

impl LinguisticResources {
    fn load() -> Result<Self> {
        let stop_words: HashSet<String> = STOPWORDS_EN
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if stop_words.is_empty() {
            return Err(SkillGapError::ModelLoad(
                "embedded stop-word list is empty".to_string(),
            ));
        }

        Ok(Self {
            stop_words,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }
}

impl Normalizer {
    pub fn new(mode: NormalizeMode) -> Result<Self> {
        let resources = match mode {
            NormalizeMode::Basic => None,
            NormalizeMode::Linguistic => Some(LinguisticResources::load()?),
        };
        Ok(Self { mode, resources })
    }

    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    /// Normalize text for scoring. Deterministic and side-effect-free.
    pub fn normalize(&self, text: &str) -> String {
        match (&self.mode, &self.resources) {
            (NormalizeMode::Basic, _) => text.to_lowercase(),
            (NormalizeMode::Linguistic, Some(res)) => {
                let tokens: Vec<String> = text
                    .unicode_words()
                    .map(|word| word.to_lowercase())
                    .filter(|word| word.chars().all(|c| c.is_alphabetic()))
                    .filter(|word| !res.stop_words.contains(word.as_str()))
                    .map(|word| res.stemmer.stem(&word).into_owned())
                    .collect();
                tokens.join(" ")
            }
            // Unreachable: linguistic resources are loaded in the constructor.
            (NormalizeMode::Linguistic, None) => text.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_mode_lowercases_only() {
        let normalizer = Normalizer::new(NormalizeMode::Basic).unwrap();
        assert_eq!(
            normalizer.normalize("Senior Rust Engineer, 5+ years"),
            "senior rust engineer, 5+ years"
        );
    }

    #[test]
    fn test_basic_mode_idempotent_on_lowercase_alphabetic() {
        let normalizer = Normalizer::new(NormalizeMode::Basic).unwrap();
        let text = "already lowercase alphabetic text";
        assert_eq!(normalizer.normalize(text), text);
        assert_eq!(
            normalizer.normalize(&normalizer.normalize(text)),
            normalizer.normalize(text)
        );
    }

    #[test]
    fn test_linguistic_mode_removes_stop_words() {
        let normalizer = Normalizer::new(NormalizeMode::Linguistic).unwrap();
        let result = normalizer.normalize("This is a test of the pipeline");
        assert!(!result.contains("this"));
        assert!(!result.contains("the"));
        assert!(result.contains("test"));
        assert!(result.contains("pipelin"));
    }

    #[test]
    fn test_linguistic_mode_drops_non_alphabetic_tokens() {
        let normalizer = Normalizer::new(NormalizeMode::Linguistic).unwrap();
        let result = normalizer.normalize("Python3 developer with 10 years experience");
        // "python3" and "10" contain non-alphabetic characters
        assert!(!result.contains("python3"));
        assert!(!result.contains("10"));
        assert!(result.contains("develop"));
    }

    #[test]
    fn test_linguistic_mode_stems_tokens() {
        let normalizer = Normalizer::new(NormalizeMode::Linguistic).unwrap();
        let result = normalizer.normalize("running tested databases");
        let tokens: Vec<&str> = result.split(' ').collect();
        assert!(tokens.contains(&"run"));
        assert!(tokens.contains(&"test"));
        assert!(tokens.contains(&"databas"));
    }

    #[test]
    fn test_linguistic_mode_deterministic() {
        let normalizer = Normalizer::new(NormalizeMode::Linguistic).unwrap();
        let text = "Experienced engineers designing scalable services";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new(NormalizeMode::Linguistic).unwrap();
        assert_eq!(normalizer.normalize(""), "");
    }
}
