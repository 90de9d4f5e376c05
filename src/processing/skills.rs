//! Skill catalog matching and gap computation
//!
//! Matching is deliberately naive substring containment, case-insensitive, so a
//! catalog entry like "java" also matches inside "javascript". That mirrors the
//! reference behavior and is covered by tests rather than silently fixed.

use crate::error::{Result, SkillGapError};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Ordered list of canonical lowercase skill keywords. Reported skill sets
/// always follow catalog order so output is deterministic.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Build a catalog from keyword strings. Entries are lowercased and
    /// deduplicated while preserving first-occurrence order.
    pub fn new(skills: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Substring matcher over a skill catalog.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    catalog: SkillCatalog,
}

impl SkillMatcher {
    pub fn new(catalog: SkillCatalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(SkillGapError::Configuration(
                "cannot build a skill matcher from an empty catalog".to_string(),
            ));
        }

        // Overlapping search keeps the containment semantics: "java" must still
        // be reported when the text only contains "javascript".
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(catalog.skills())
            .map_err(|e| {
                SkillGapError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { automaton, catalog })
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Return the catalog skills appearing anywhere in `text` as substrings,
    /// case-insensitively, in catalog order. Runs on raw extracted text, not
    /// normalized text.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        let mut found = vec![false; self.catalog.len()];
        for mat in self.automaton.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        self.catalog
            .skills()
            .iter()
            .enumerate()
            .filter(|(i, _)| found[*i])
            .map(|(_, skill)| skill.clone())
            .collect()
    }

    /// Job-description skills absent from the resume, in catalog order.
    pub fn gap(&self, resume_skills: &[String], jd_skills: &[String]) -> Vec<String> {
        let present: HashSet<&String> = resume_skills.iter().collect();
        jd_skills
            .iter()
            .filter(|skill| !present.contains(skill))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(skills: &[&str]) -> SkillMatcher {
        let catalog = SkillCatalog::new(skills.iter().map(|s| s.to_string()).collect());
        SkillMatcher::new(catalog).unwrap()
    }

    #[test]
    fn test_basic_matching_scenario() {
        let matcher = matcher(&["python", "sql", "aws", "java"]);
        let found = matcher.find_skills("Python, SQL, and AWS experience");
        assert_eq!(found, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = matcher(&["python", "mongodb"]);
        let found = matcher.find_skills("PYTHON and MongoDB");
        assert_eq!(found, vec!["python", "mongodb"]);
    }

    #[test]
    fn test_java_matches_inside_javascript() {
        // Known substring false positive, preserved intentionally.
        let matcher = matcher(&["java", "javascript"]);
        let found = matcher.find_skills("Frontend role: JavaScript only");
        assert_eq!(found, vec!["java", "javascript"]);
    }

    #[test]
    fn test_multi_word_skills() {
        let matcher = matcher(&["machine learning", "deep learning", "sql"]);
        let found = matcher.find_skills("background in machine learning and SQL");
        assert_eq!(found, vec!["machine learning", "sql"]);
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let matcher = matcher(&["python", "sql", "aws"]);
        let found = matcher.find_skills("python rust go sql haskell");
        for skill in &found {
            assert!(matcher.catalog().skills().contains(skill));
        }
    }

    #[test]
    fn test_result_follows_catalog_order() {
        let matcher = matcher(&["python", "sql", "aws"]);
        // Mentions reversed relative to catalog order.
        let found = matcher.find_skills("aws then sql then python");
        assert_eq!(found, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_repeated_mentions_reported_once() {
        let matcher = matcher(&["python"]);
        let found = matcher.find_skills("python python python");
        assert_eq!(found, vec!["python"]);
    }

    #[test]
    fn test_no_matches() {
        let matcher = matcher(&["python", "sql"]);
        assert!(matcher.find_skills("carpentry and plumbing").is_empty());
    }

    #[test]
    fn test_special_characters_in_catalog() {
        let matcher = matcher(&["c++", "node"]);
        let found = matcher.find_skills("C++ and Node services");
        assert_eq!(found, vec!["c++", "node"]);
    }

    #[test]
    fn test_gap_identical_sets_is_empty() {
        let matcher = matcher(&["python", "sql"]);
        let skills = vec!["python".to_string(), "sql".to_string()];
        assert!(matcher.gap(&skills, &skills).is_empty());
    }

    #[test]
    fn test_gap_empty_resume_returns_all_jd_skills() {
        let matcher = matcher(&["python", "sql"]);
        let jd = vec!["python".to_string(), "sql".to_string()];
        assert_eq!(matcher.gap(&[], &jd), jd);
    }

    #[test]
    fn test_gap_empty_jd_is_empty() {
        let matcher = matcher(&["python", "sql"]);
        let resume = vec!["python".to_string()];
        assert!(matcher.gap(&resume, &[]).is_empty());
    }

    #[test]
    fn test_gap_scenario() {
        let matcher = matcher(&["python", "sql", "java", "react"]);
        let jd_skills = matcher.find_skills("Looking for Python, Java, and React developer");
        let resume_skills = vec!["python".to_string(), "sql".to_string()];
        let missing = matcher.gap(&resume_skills, &jd_skills);
        assert_eq!(missing, vec!["java", "react"]);
    }

    #[test]
    fn test_catalog_dedupes_and_lowercases() {
        let catalog = SkillCatalog::new(vec![
            "Python".to_string(),
            "python".to_string(),
            "  SQL ".to_string(),
            "".to_string(),
        ]);
        assert_eq!(catalog.skills(), &["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_listing_order_matches_matching_order() {
        // Raw config entries with case and whitespace variants collapse to one
        // effective entry each; the listed catalog is what matching uses.
        let catalog = SkillCatalog::new(vec![
            "Python".to_string(),
            "python ".to_string(),
            "SQL".to_string(),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skills(), &["python".to_string(), "sql".to_string()]);

        let matcher = SkillMatcher::new(catalog).unwrap();
        assert_eq!(matcher.find_skills("python and sql"), vec!["python", "sql"]);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = SkillCatalog::new(vec![]);
        assert!(SkillMatcher::new(catalog).is_err());
    }
}
