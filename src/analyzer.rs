//! Analyzer capability shared by the rule-based engine and the AI-backed analyzer

use crate::config::{AnalyzerMode, Config};
use crate::llm::analyzer::ExternalAiAnalyzer;
use crate::llm::client::LlmClient;
use crate::processing::analyzer::{AnalysisResult, RuleBasedAnalyzer};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Resume text plus the optional role or posting to measure it against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub target_role: Option<String>,
    pub job_description: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_target_role(mut self, role: Option<String>) -> Self {
        self.target_role = non_blank(role);
        self
    }

    pub fn with_job_description(mut self, job_description: Option<String>) -> Self {
        self.job_description = non_blank(job_description);
        self
    }

    pub fn target_role(&self) -> Option<&str> {
        self.target_role.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn job_description(&self) -> Option<&str> {
        self.job_description.as_deref().filter(|s| !s.trim().is_empty())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Anything that turns an [`AnalysisRequest`] into an [`AnalysisResult`].
///
/// Implementations must always produce a result; failures are handled
/// internally (the AI analyzer falls back to the rule-based engine).
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

#[async_trait]
impl TextAnalyzer for RuleBasedAnalyzer {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze_text(&request.text, request.target_role(), request.job_description())
    }
}

/// Pick the analyzer once, from configuration and the API key in the environment.
pub fn build_analyzer(config: &Config) -> Box<dyn TextAnalyzer> {
    build_analyzer_with_key(config, config.api_key())
}

pub fn build_analyzer_with_key(config: &Config, api_key: Option<String>) -> Box<dyn TextAnalyzer> {
    let fallback = RuleBasedAnalyzer::new();

    match (config.analyzer.mode, api_key) {
        (AnalyzerMode::RuleBased, _) => {
            info!("Using rule-based analyzer");
            Box::new(fallback)
        }
        (mode, None) => {
            if mode == AnalyzerMode::Ai {
                warn!(
                    "AI analyzer requested but {} is not set; using rule-based analyzer",
                    config.analyzer.api_key_env
                );
            } else {
                info!("No API key configured; using rule-based analyzer");
            }
            Box::new(fallback)
        }
        (_, Some(key)) => {
            match LlmClient::new(key, &config.analyzer.base_url, &config.analyzer.model, config.timeout()) {
                Ok(client) => {
                    info!("Using AI analyzer with model {}", config.analyzer.model);
                    Box::new(ExternalAiAnalyzer::new(client, fallback))
                }
                Err(e) => {
                    warn!("Failed to initialize AI client: {}; using rule-based analyzer", e);
                    Box::new(fallback)
                }
            }
        }
    }
}
