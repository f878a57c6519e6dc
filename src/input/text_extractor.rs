//! Text extraction from various file formats

use crate::error::{ExtractionError, Result, SkillGapError};
use log::debug;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tokio::fs;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

const ENCRYPT_MARKER: &[u8] = b"/Encrypt";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Turn raw PDF bytes into trimmed plain text.
    pub fn extract_bytes(bytes: &[u8]) -> std::result::Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }
        if bytes.windows(ENCRYPT_MARKER.len()).any(|w| w == ENCRYPT_MARKER) {
            return Err(ExtractionError::Encrypted);
        }

        // the PDF parser can panic on malformed input
        let parsed = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
            .map_err(|_| ExtractionError::Corrupted("parser aborted on malformed document".to_string()))?;

        let text = parsed.map_err(|e| {
            let message = e.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                ExtractionError::Encrypted
            } else {
                ExtractionError::Corrupted(message)
            }
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::NoText);
        }
        debug!("Extracted {} characters from PDF", text.len());
        Ok(text.to_string())
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(SkillGapError::Io)?;
        Ok(Self::extract_bytes(&bytes)?)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(SkillGapError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(SkillGapError::Io)?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Self::html_to_text(&html_output)
    }

    fn html_to_text(html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let clean_text = HTML_TAG.replace_all(&text, "");

        clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
