//! Configuration management for the skill gap analyzer

use crate::error::{Result, SkillGapError};
use crate::processing::normalizer::NormalizeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Skill catalog used for both resume and job description matching.
/// The list is ordered; reported skills follow this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Normalization applied before similarity scoring.
    pub mode: NormalizeMode,
    /// Upper bound on document parsing time per file.
    pub extraction_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_suggestions: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                skills: default_skills(),
            },
            processing: ProcessingConfig {
                mode: NormalizeMode::Linguistic,
                extraction_timeout_secs: 30,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                include_suggestions: true,
                color_output: true,
            },
        }
    }
}

/// Default skill keywords, matched case-insensitively as substrings.
fn default_skills() -> Vec<String> {
    [
        "python",
        "java",
        "c++",
        "sql",
        "machine learning",
        "deep learning",
        "data analysis",
        "pandas",
        "numpy",
        "excel",
        "power bi",
        "tableau",
        "html",
        "css",
        "javascript",
        "react",
        "node",
        "mongodb",
        "linux",
        "aws",
        "cyber security",
        "dbms",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                SkillGapError::Configuration(format!(
                    "Failed to parse config '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillGapError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.skills.is_empty() {
            return Err(SkillGapError::Configuration(
                "Skill catalog must contain at least one entry".to_string(),
            ));
        }
        if self.processing.extraction_timeout_secs == 0 {
            return Err(SkillGapError::Configuration(
                "extraction_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillgap")
            .join("config.toml")
    }

    /// The config file actually in effect: the CLI override when given,
    /// otherwise the default location.
    pub fn effective_path(override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}
