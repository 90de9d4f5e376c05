//! Text extraction from resume file formats
//!
//! Extractors are pure byte-to-string transforms. Segments (PDF pages, DOCX
//! paragraphs) are joined with newlines so word boundaries survive breaks.

use crate::error::{Result, SkillGapError};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(SkillGapError::Io)?;
        let display = path.display().to_string();

        // Page texts are concatenated in page order; pages without extractable
        // text (scanned images) contribute an empty segment. No OCR fallback.
        // The parse is CPU-bound, so it runs on the blocking pool; awaiting the
        // join handle keeps the caller's deadline enforceable.
        parse_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                SkillGapError::CorruptDocument(format!(
                    "Failed to extract text from PDF '{}': {}",
                    display, e
                ))
            })
        })
        .await
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(SkillGapError::Io)?;
        let display = path.display().to_string();

        parse_blocking(move || {
            let docx = docx_rs::read_docx(&bytes).map_err(|e| {
                SkillGapError::CorruptDocument(format!("Failed to read DOCX '{}': {}", display, e))
            })?;

            // Body paragraphs only, in document order. Table cells, headers and
            // footers are excluded.
            let mut paragraphs: Vec<String> = Vec::new();
            for child in docx.document.children {
                if let docx_rs::DocumentChild::Paragraph(para) = child {
                    let para_text: String = para
                        .children
                        .iter()
                        .filter_map(|pc| {
                            if let docx_rs::ParagraphChild::Run(run) = pc {
                                Some(
                                    run.children
                                        .iter()
                                        .filter_map(|rc| {
                                            if let docx_rs::RunChild::Text(t) = rc {
                                                Some(t.text.clone())
                                            } else {
                                                None
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .join(""),
                                )
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join("");

                    paragraphs.push(para_text);
                }
            }

            Ok(paragraphs.join("\n"))
        })
        .await
    }
}

/// Run a CPU-bound parse on the blocking pool. The await point lets callers
/// wrapping the extraction in a deadline observe it while the parse runs.
async fn parse_blocking<F>(parse: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| SkillGapError::CorruptDocument(format!("Document parser failed: {}", e)))?
}
