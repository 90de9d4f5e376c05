//! Input manager routing resume files to the right extractor

use crate::error::{Result, SkillGapError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    timeout: Duration,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Cap extraction time per file. Parsing cost is unbounded in document
    /// size, so every extraction runs under this deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(SkillGapError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let extraction = async {
            match file_type {
                FileType::Pdf => {
                    info!("Extracting text from PDF: {}", path.display());
                    PdfExtractor.extract(path).await
                }
                FileType::Docx => {
                    info!("Extracting text from DOCX: {}", path.display());
                    DocxExtractor.extract(path).await
                }
                FileType::Unknown => Err(SkillGapError::UnsupportedFormat(format!(
                    "Unsupported file type for: {} (expected .pdf or .docx)",
                    path.display()
                ))),
            }
        };

        let text = tokio::time::timeout(self.timeout, extraction)
            .await
            .map_err(|_| {
                SkillGapError::Timeout(format!(
                    "Text extraction exceeded {}s for: {}",
                    self.timeout.as_secs(),
                    path.display()
                ))
            })??;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SkillGapError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
