//! Skill-gap analyzer library

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;

pub use analyzer::{build_analyzer, AnalysisRequest, TextAnalyzer};
pub use config::Config;
pub use error::{ExtractionError, Result, SkillGapError};
pub use processing::analyzer::{analyze, AnalysisResult, RuleBasedAnalyzer};
