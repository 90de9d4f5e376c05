//! TF-IDF cosine similarity over a two-document corpus
//!
//! The vocabulary and document frequencies are computed per call over exactly
//! the two texts being compared, so scores are not comparable across different
//! resume/job-description pairs.

use crate::error::{Result, SkillGapError};
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub struct SimilarityScorer {
    token_pattern: Regex,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        // Word tokens of two or more word characters.
        let token_pattern = Regex::new(r"\b\w\w+\b").expect("Invalid token pattern");
        Self { token_pattern }
    }

    /// Score two normalized texts as a percentage in [0, 100], rounded to two
    /// decimal places. Fails with `EmptyVocabulary` if either text yields no
    /// tokens after tokenization.
    pub fn score(&self, a: &str, b: &str) -> Result<f64> {
        let tokens_a = self.tokenize(a);
        let tokens_b = self.tokenize(b);

        if tokens_a.is_empty() || tokens_b.is_empty() {
            let side = if tokens_a.is_empty() {
                "first"
            } else {
                "second"
            };
            return Err(SkillGapError::EmptyVocabulary(format!(
                "{} document contains no terms after normalization",
                side
            )));
        }

        let df = document_frequencies(&tokens_a, &tokens_b);
        let vec_a = tfidf_vector(&tokens_a, &df);
        let vec_b = tfidf_vector(&tokens_b, &df);

        let similarity = cosine_similarity(&vec_a, &vec_b);
        Ok(round2(similarity * 100.0))
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Document frequency of each term across the two-document corpus.
fn document_frequencies(tokens_a: &[String], tokens_b: &[String]) -> HashMap<String, usize> {
    let mut df: HashMap<String, usize> = HashMap::new();
    for tokens in [tokens_a, tokens_b] {
        let unique: HashSet<&String> = tokens.iter().collect();
        for term in unique {
            *df.entry(term.clone()).or_insert(0) += 1;
        }
    }
    df
}

/// Build an L2-normalized TF-IDF vector for one document.
///
/// Uses smoothed IDF, `ln((1 + n) / (1 + df)) + 1` with n = 2 documents, so
/// terms shared by both documents still carry weight.
fn tfidf_vector(tokens: &[String], df: &HashMap<String, usize>) -> HashMap<String, f64> {
    const N_DOCS: f64 = 2.0;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    let mut weights: HashMap<String, f64> = counts
        .into_iter()
        .map(|(term, count)| {
            let term_df = *df.get(&term).unwrap_or(&0) as f64;
            let idf = ((1.0 + N_DOCS) / (1.0 + term_df)).ln() + 1.0;
            (term, count as f64 * idf)
        })
        .collect();

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }

    weights
}

fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    // Vectors are already L2-normalized, so the dot product is the cosine.
    a.iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_100() {
        let scorer = SimilarityScorer::new();
        let text = "rust engineer building distributed systems";
        let score = scorer.score(text, text).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let scorer = SimilarityScorer::new();
        let a = "python developer with sql experience";
        let b = "looking for python and aws engineers";
        assert_eq!(scorer.score(a, b).unwrap(), scorer.score(b, a).unwrap());
    }

    #[test]
    fn test_disjoint_texts_score_low() {
        let scorer = SimilarityScorer::new();
        let score = scorer
            .score("apples oranges bananas", "trucks engines gearboxes")
            .unwrap();
        // No shared vocabulary: cosine over disjoint supports, but smoothed IDF
        // keeps all weights positive, so the score is exactly 0 only because
        // no term appears in both vectors.
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap_between_bounds() {
        let scorer = SimilarityScorer::new();
        let score = scorer
            .score(
                "python sql developer",
                "python developer wanted for analytics",
            )
            .unwrap();
        assert!(score > 0.0);
        assert!(score < 100.0);
    }

    #[test]
    fn test_empty_first_document_rejected() {
        let scorer = SimilarityScorer::new();
        let result = scorer.score("", "python developer");
        assert!(matches!(
            result,
            Err(crate::error::SkillGapError::EmptyVocabulary(_))
        ));
    }

    #[test]
    fn test_empty_second_document_rejected() {
        let scorer = SimilarityScorer::new();
        let result = scorer.score("python developer", "");
        assert!(matches!(
            result,
            Err(crate::error::SkillGapError::EmptyVocabulary(_))
        ));
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let scorer = SimilarityScorer::new();
        // Tokens need at least two word characters, so "a b c" has no terms.
        let result = scorer.score("a b c", "python");
        assert!(matches!(
            result,
            Err(crate::error::SkillGapError::EmptyVocabulary(_))
        ));
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let scorer = SimilarityScorer::new();
        let score = scorer
            .score("python sql aws linux", "python sql gcp windows")
            .unwrap();
        assert_eq!(score, round2(score));
    }

    #[test]
    fn test_case_insensitive_tokenization() {
        let scorer = SimilarityScorer::new();
        let score = scorer.score("PYTHON DEVELOPER", "python developer").unwrap();
        assert_eq!(score, 100.0);
    }
}
