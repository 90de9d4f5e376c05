//! Report rendering: console, JSON and markdown

use crate::config::OutputFormat;
use crate::error::{Result, SkillGapError};
use crate::output::report::MatchReport;
use colored::Colorize;
use std::path::Path;

pub struct OutputFormatter {
    color: bool,
}

impl OutputFormatter {
    pub fn new(color: bool) -> Self {
        // colored also honors NO_COLOR; this is the config-level switch.
        if !color {
            colored::control::set_override(false);
        }
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Render the report in the requested format. Console output goes through
    /// `print_console` instead, so colors reach the terminal directly.
    pub fn format(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(self.format_markdown(report)),
            OutputFormat::Console => Err(SkillGapError::OutputFormatting(
                "console output is rendered directly, not formatted to a string".to_string(),
            )),
        }
    }

    pub fn print_console(&self, report: &MatchReport, detailed: bool, suggestions: bool) {
        println!();
        println!("{}", "📊 Match Score".bold());
        let score_line = format!(
            "Resume matches {:.2}% with the job description",
            report.match_percentage
        );
        if report.match_percentage >= 50.0 {
            println!("  {}", score_line.green());
        } else {
            println!("  {}", score_line.yellow());
        }

        println!();
        println!("{}", "✅ Skills Found in Resume".bold());
        if report.found_skills.is_empty() {
            println!("  (none)");
        }
        for skill in &report.found_skills {
            println!("  • {}", skill);
        }

        println!();
        println!("{}", "❌ Missing Skills (Skill Gap)".bold());
        if report.missing_skills.is_empty() {
            println!("  (none)");
        }
        for skill in &report.missing_skills {
            println!("  • {}", skill.red());
        }

        if suggestions && !report.suggestions.is_empty() {
            println!();
            println!("{}", "📚 Recommended Skills to Learn".bold());
            for suggestion in &report.suggestions {
                println!("  - {}", suggestion.suggestion);
            }
        }

        if detailed {
            println!();
            println!("{}", "🔍 Analysis Details".bold());
            println!("  • Normalization mode: {}", report.metadata.mode);
            println!("  • Catalog size: {} skills", report.metadata.catalog_size);
            println!(
                "  • Job description skills: {}",
                if report.jd_skills.is_empty() {
                    "(none)".to_string()
                } else {
                    report.jd_skills.join(", ")
                }
            );
            println!(
                "  • Resume length: {} characters",
                report.metadata.resume_chars
            );
            println!(
                "  • Job description length: {} characters",
                report.metadata.jd_chars
            );
            println!(
                "  • Processing time: {}ms",
                report.metadata.processing_time_ms
            );
        }
    }

    fn format_markdown(&self, report: &MatchReport) -> String {
        let mut out = String::new();

        out.push_str("# Resume Skill Gap Report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.metadata.generated_at.to_rfc3339()
        ));

        out.push_str("## Match Score\n\n");
        out.push_str(&format!(
            "Resume matches **{:.2}%** with the job description.\n\n",
            report.match_percentage
        ));

        out.push_str("## Skills Found in Resume\n\n");
        if report.found_skills.is_empty() {
            out.push_str("_None of the catalog skills were found._\n");
        }
        for skill in &report.found_skills {
            out.push_str(&format!("- {}\n", skill));
        }
        out.push('\n');

        out.push_str("## Missing Skills\n\n");
        if report.missing_skills.is_empty() {
            out.push_str("_No gap: the resume covers every job-description skill._\n");
        }
        for skill in &report.missing_skills {
            out.push_str(&format!("- {}\n", skill));
        }
        out.push('\n');

        if !report.suggestions.is_empty() {
            out.push_str("## Recommended Skills to Learn\n\n");
            for suggestion in &report.suggestions {
                out.push_str(&format!("- {}\n", suggestion.suggestion));
            }
            out.push('\n');
        }

        out.push_str("---\n");
        out.push_str(&format!(
            "Mode: {} | Catalog: {} skills | Processing: {}ms\n",
            report.metadata.mode, report.metadata.catalog_size, report.metadata.processing_time_ms
        ));

        out
    }

    pub fn save(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
