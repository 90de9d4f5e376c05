//! Analysis engine wiring the pipeline together
//!
//! One engine instance holds the immutable pieces (normalizer resources, skill
//! automaton). `analyze` is a single pass: normalize both texts, score them,
//! match skills against the raw texts, compute the gap.

use crate::config::Config;
use crate::error::Result;
use crate::output::report::{suggestion_for, MatchReport, ReportMetadata};
use crate::processing::normalizer::{NormalizeMode, Normalizer};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::skills::{SkillCatalog, SkillMatcher};
use log::{debug, info};
use std::time::Instant;

pub struct AnalysisEngine {
    normalizer: Normalizer,
    scorer: SimilarityScorer,
    matcher: SkillMatcher,
}

impl AnalysisEngine {
    pub fn new(catalog: SkillCatalog, mode: NormalizeMode) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(mode)?,
            scorer: SimilarityScorer::new(),
            matcher: SkillMatcher::new(catalog)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            SkillCatalog::new(config.catalog.skills.clone()),
            config.processing.mode,
        )
    }

    pub fn catalog_size(&self) -> usize {
        self.matcher.catalog().len()
    }

    /// Run one full analysis. Skill matching uses the raw texts; only the
    /// similarity score sees normalized text.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<MatchReport> {
        let started = Instant::now();

        let resume_normalized = self.normalizer.normalize(resume_text);
        let jd_normalized = self.normalizer.normalize(jd_text);
        debug!(
            "Normalized lengths: resume {} chars, job description {} chars",
            resume_normalized.len(),
            jd_normalized.len()
        );

        let match_percentage = self.scorer.score(&resume_normalized, &jd_normalized)?;

        let found_skills = self.matcher.find_skills(resume_text);
        let jd_skills = self.matcher.find_skills(jd_text);
        let missing_skills = self.matcher.gap(&found_skills, &jd_skills);

        let suggestions = missing_skills
            .iter()
            .map(|skill| suggestion_for(skill))
            .collect();

        info!(
            "Analysis complete: {:.2}% match, {} skills found, {} missing",
            match_percentage,
            found_skills.len(),
            missing_skills.len()
        );

        Ok(MatchReport {
            match_percentage,
            found_skills,
            jd_skills,
            missing_skills,
            suggestions,
            metadata: ReportMetadata {
                generated_at: chrono::Utc::now(),
                mode: self.normalizer.mode(),
                catalog_size: self.matcher.catalog().len(),
                resume_chars: resume_text.chars().count(),
                jd_chars: jd_text.chars().count(),
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }
}
