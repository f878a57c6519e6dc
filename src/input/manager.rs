//! Input manager for handling different file types

use crate::error::{Result, SkillGapError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Shortest resume text accepted for analysis.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 50;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
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
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
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

        let text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(SkillGapError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        if path.extension().is_none() {
            return Err(SkillGapError::InvalidInput(format!(
                "File has no extension: {}",
                path.display()
            )));
        }
        Ok(FileType::from_path(path))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Reject resume text too short to analyze meaningfully.
pub fn validate_resume_text(text: &str, min_chars: usize) -> Result<()> {
    let length = text.trim().chars().count();
    if length < min_chars {
        return Err(SkillGapError::InvalidInput(format!(
            "Resume text is too short ({} characters, at least {} required)",
            length, min_chars
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_extract_and_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "first version").unwrap();

        let mut manager = InputManager::new();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "first version");
        assert_eq!(manager.cache_size(), 1);

        std::fs::write(&path, "second version").unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "first version");

        manager.clear_cache();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "second version");
    }

    #[tokio::test]
    async fn test_cache_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Resume").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        assert_eq!(manager.extract_text(&path).await.unwrap(), "Resume");
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_rejects_missing_and_unsupported_files() {
        let dir = TempDir::new().unwrap();
        let mut manager = InputManager::new();

        let missing = manager.extract_text(&dir.path().join("nope.txt")).await;
        assert!(matches!(missing, Err(SkillGapError::InvalidInput(_))));

        let docx = dir.path().join("resume.docx");
        std::fs::write(&docx, "binary").unwrap();
        let unsupported = manager.extract_text(&docx).await;
        assert!(matches!(unsupported, Err(SkillGapError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_empty_pdf_maps_to_extraction_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"").unwrap();

        let err = InputManager::new().extract_text(&path).await.unwrap_err();
        assert!(matches!(err, SkillGapError::Extraction(crate::error::ExtractionError::Empty)));
    }

    #[test]
    fn test_validate_resume_text() {
        assert!(validate_resume_text(&"x".repeat(50), DEFAULT_MIN_TEXT_CHARS).is_ok());
        assert!(validate_resume_text(&format!("  {}  ", "x".repeat(49)), DEFAULT_MIN_TEXT_CHARS).is_err());
        assert!(validate_resume_text("", DEFAULT_MIN_TEXT_CHARS).is_err());
    }
}
