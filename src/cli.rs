//! CLI interface for the skill gap analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Resume skill gap analyzer")]
#[command(
    long_about = "Compare a resume against a job description: TF-IDF match score, skills found, and the skill gap with learning suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a plain-text job description file
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description passed inline instead of a file
        #[arg(long, conflicts_with = "job")]
        job_text: Option<String>,

        /// Normalization mode: basic (lowercase only) or linguistic
        #[arg(short, long)]
        mode: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file (json and markdown formats)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show analysis details
        #[arg(short, long)]
        detailed: bool,

        /// Skip learning suggestions for missing skills
        #[arg(long)]
        no_suggestions: bool,
    },

    /// Skill catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List the configured skill keywords in matching order
    List,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate normalization mode
pub fn parse_mode(mode: &str) -> Result<crate::processing::normalizer::NormalizeMode, String> {
    match mode.to_lowercase().as_str() {
        "basic" => Ok(crate::processing::normalizer::NormalizeMode::Basic),
        "linguistic" => Ok(crate::processing::normalizer::NormalizeMode::Linguistic),
        _ => Err(format!(
            "Invalid normalization mode: {}. Supported: basic, linguistic",
            mode
        )),
    }
}

/// Reject `--save` for formats that render straight to the terminal
pub fn validate_save_target(
    save: &Option<PathBuf>,
    format: &crate::config::OutputFormat,
) -> Result<(), String> {
    if save.is_some() && *format == crate::config::OutputFormat::Console {
        return Err("--save requires --output json or --output markdown".to_string());
    }
    Ok(())
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::processing::normalizer::NormalizeMode;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("basic").unwrap(), NormalizeMode::Basic);
        assert_eq!(parse_mode("Linguistic").unwrap(), NormalizeMode::Linguistic);
        assert!(parse_mode("fancy").is_err());
    }

    #[test]
    fn test_save_rejected_for_console_output() {
        let save = Some(PathBuf::from("report.json"));
        assert!(validate_save_target(&save, &OutputFormat::Console).is_err());
        assert!(validate_save_target(&save, &OutputFormat::Json).is_ok());
        assert!(validate_save_target(&save, &OutputFormat::Markdown).is_ok());
        assert!(validate_save_target(&None, &OutputFormat::Console).is_ok());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.pdf");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_ok());

        let path = PathBuf::from("resume.txt");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_err());
    }
}
