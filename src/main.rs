//! skillgap: resume skill gap analyzer
//!
//! Compares a resume (PDF/DOCX) against a job description and reports a
//! TF-IDF match percentage, the catalog skills found, and the skill gap.

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillGapError};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::OutputFormatter;
use processing::analyzer::AnalysisEngine;
use processing::skills::SkillCatalog;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = Config::effective_path(cli.config.as_deref());
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            mode,
            output,
            save,
            detailed,
            no_suggestions,
        } => {
            // Validation gate: both inputs must be present before anything runs.
            if job.is_none() && job_text.is_none() {
                warn!("Please provide a resume and a job description");
                return Err(SkillGapError::InvalidInput(
                    "A job description is required: pass --job <file> or --job-text <text>"
                        .to_string(),
                ));
            }

            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(|e| SkillGapError::UnsupportedFormat(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(SkillGapError::InvalidInput)?;

            cli::validate_save_target(&save, &output_format)
                .map_err(SkillGapError::InvalidInput)?;

            let mode = match mode {
                Some(raw) => cli::parse_mode(&raw).map_err(SkillGapError::InvalidInput)?,
                None => config.processing.mode,
            };

            info!("Starting skill gap analysis");
            info!("Resume: {}", resume.display());

            let mut input_manager = InputManager::new()
                .with_timeout(Duration::from_secs(config.processing.extraction_timeout_secs));
            let resume_text = input_manager.extract_text(&resume).await?;

            let jd_text = match (job, job_text) {
                (Some(path), _) => {
                    info!("Job description: {}", path.display());
                    tokio::fs::read_to_string(&path).await.map_err(|e| {
                        SkillGapError::InvalidInput(format!(
                            "Could not read job description '{}': {}",
                            path.display(),
                            e
                        ))
                    })?
                }
                (None, Some(text)) => text,
                (None, None) => unreachable!("checked by the validation gate"),
            };

            let engine = AnalysisEngine::new(SkillCatalog::new(config.catalog.skills), mode)?;
            let report = engine.analyze(&resume_text, &jd_text)?;

            let formatter = OutputFormatter::new(config.output.color_output);
            let detailed = detailed || config.output.detailed;
            let suggestions = !no_suggestions && config.output.include_suggestions;

            match output_format {
                config::OutputFormat::Console => {
                    formatter.print_console(&report, detailed, suggestions);
                }
                format => {
                    let rendered = formatter.format(&report, &format)?;
                    match &save {
                        Some(path) => {
                            formatter.save(&rendered, path)?;
                            info!("Report saved to {}", path.display());
                        }
                        None => println!("{}", rendered),
                    }
                }
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::List => {
                // List the effective catalog (trimmed, lowercased, deduped),
                // not the raw config entries.
                let catalog = SkillCatalog::new(config.catalog.skills);
                println!("Skill catalog ({} entries, matching order):", catalog.len());
                for skill in catalog.skills() {
                    println!("  • {}", skill);
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", config_path.display());
                println!("Normalization mode: {}", config.processing.mode);
                println!(
                    "Extraction timeout: {}s",
                    config.processing.extraction_timeout_secs
                );
                println!("Catalog size: {} skills", config.catalog.skills.len());
                println!("Include suggestions: {}", config.output.include_suggestions);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
