//! Analysis report structures

use crate::processing::normalizer::NormalizeMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one resume / job-description analysis. Built once per run and
/// rendered; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// TF-IDF cosine similarity, 0-100, two decimal places.
    pub match_percentage: f64,

    /// Catalog skills found in the resume, in catalog order.
    pub found_skills: Vec<String>,

    /// Catalog skills found in the job description, in catalog order.
    pub jd_skills: Vec<String>,

    /// Job-description skills missing from the resume, in catalog order.
    pub missing_skills: Vec<String>,

    /// One static learning suggestion per missing skill.
    pub suggestions: Vec<SkillSuggestion>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub skill: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub mode: NormalizeMode,
    pub catalog_size: usize,
    pub resume_chars: usize,
    pub jd_chars: usize,
    pub processing_time_ms: u64,
}

/// Constant suggestion template; not data-driven.
pub fn suggestion_for(skill: &str) -> SkillSuggestion {
    SkillSuggestion {
        skill: skill.to_string(),
        suggestion: format!(
            "Learn {} from platforms like Coursera, Udemy, YouTube",
            skill
        ),
    }
}
