//! Error handling for the skill-gap analyzer

use crate::llm::client::LlmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("AI analysis error: {0}")]
    Llm(#[from] LlmError),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

/// Failures of the "bytes → plain text" step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("PDF file is empty or invalid")]
    Empty,

    #[error("PDF is password-protected. Please upload an unencrypted PDF")]
    Encrypted,

    #[error("PDF file is corrupted or in an unsupported format: {0}")]
    Corrupted(String),

    #[error("Could not extract any text from the document")]
    NoText,
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillGapError {
    fn from(err: anyhow::Error) -> Self {
        SkillGapError::InvalidInput(err.to_string())
    }
}
