//! AI-backed analyzer with rule-based fallback

use crate::analyzer::{AnalysisRequest, TextAnalyzer};
use crate::llm::client::{LlmClient, LlmError};
use crate::llm::prompts::{build_analysis_prompt, SYSTEM_PROMPT};
use crate::processing::analyzer::{AnalysisResult, RuleBasedAnalyzer};
use crate::processing::ats_feedback::MAX_ATS_FEEDBACK;
use crate::processing::experience::DEFAULT_EXPERIENCE_YEARS;
use crate::processing::matching::{MAX_MATCH_PERCENTAGE, MAX_SKILL_GAPS};
use crate::processing::recommendations::{learning_tip, Priority, Recommendation, MAX_RECOMMENDATIONS};
use crate::processing::scoring::build_radar_data;
use crate::processing::skills::contains_skill;
use crate::processing::tables::{AnalyzerTables, MAX_RESUME_SKILLS, MAX_TRENDING_INDUSTRIES};
use async_trait::async_trait;
use indexmap::IndexMap;
use log::{info, warn};
use serde::Deserialize;

/// Field name used when the model omits one.
const UNKNOWN_FIELD: &str = "General";

/// Analysis as returned by the model. Radar data is never trusted from the
/// model and is recomputed locally.
#[derive(Debug, Deserialize)]
struct AiAnalysis {
    skills: Vec<String>,
    #[serde(default = "default_experience")]
    experience_years: f64,
    #[serde(default = "default_field")]
    current_field: String,
    role_matches: IndexMap<String, f64>,
    #[serde(default)]
    skill_gaps: IndexMap<String, Vec<String>>,
    #[serde(default)]
    recommendations: Vec<AiRecommendation>,
    #[serde(default)]
    trending_industries: Vec<String>,
    summary: String,
    #[serde(default)]
    ats_feedback: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AiRecommendation {
    skill: String,
    priority: Priority,
    #[serde(default)]
    resource: String,
    #[serde(default)]
    timeframe: String,
    #[serde(default)]
    learning_tip: String,
}

fn default_experience() -> f64 {
    DEFAULT_EXPERIENCE_YEARS
}

fn default_field() -> String {
    UNKNOWN_FIELD.to_string()
}

impl AiAnalysis {
    fn into_result(self, tables: &AnalyzerTables) -> AnalysisResult {
        let radar_data = build_radar_data(tables, &self.skills, &self.current_field);

        let recommendations = self
            .recommendations
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|rec| {
                let tip = if rec.learning_tip.trim().is_empty() {
                    learning_tip(tables, &rec.skill)
                } else {
                    rec.learning_tip
                };
                Recommendation {
                    skill: rec.skill,
                    priority: rec.priority,
                    resource: rec.resource,
                    timeframe: rec.timeframe,
                    learning_tip: tip,
                }
            })
            .collect();

        let role_matches: IndexMap<String, f64> = self
            .role_matches
            .into_iter()
            .map(|(role, pct)| (role, pct.clamp(0.0, MAX_MATCH_PERCENTAGE)))
            .collect();

        let mut skills = self.skills;
        skills.truncate(MAX_RESUME_SKILLS);

        // gaps only for evaluated roles, never naming a detected skill
        let skill_gaps = self
            .skill_gaps
            .into_iter()
            .filter(|(role, _)| role_matches.contains_key(role))
            .map(|(role, gaps)| {
                let gaps = gaps
                    .into_iter()
                    .filter(|gap| !contains_skill(&skills, gap))
                    .take(MAX_SKILL_GAPS)
                    .collect();
                (role, gaps)
            })
            .collect();

        let mut trending_industries = self.trending_industries;
        trending_industries.truncate(MAX_TRENDING_INDUSTRIES);
        let mut ats_feedback = self.ats_feedback;
        ats_feedback.truncate(MAX_ATS_FEEDBACK);

        AnalysisResult {
            skills,
            experience_years: self.experience_years,
            current_field: self.current_field,
            role_matches,
            skill_gaps,
            radar_data,
            recommendations,
            trending_industries,
            summary: self.summary,
            ats_feedback,
        }
    }
}

/// Analyzer that asks a chat model for the analysis and falls back to the
/// rule-based engine on any failure.
pub struct ExternalAiAnalyzer {
    client: LlmClient,
    fallback: RuleBasedAnalyzer,
}

impl ExternalAiAnalyzer {
    pub fn new(client: LlmClient, fallback: RuleBasedAnalyzer) -> Self {
        Self { client, fallback }
    }

    /// The model call alone, without fallback.
    pub async fn try_analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, LlmError> {
        let prompt = build_analysis_prompt(
            &request.text,
            request.target_role(),
            request.job_description(),
        );

        let analysis: AiAnalysis = self.client.call_json(&prompt, SYSTEM_PROMPT).await?;
        Ok(analysis.into_result(self.fallback.tables()))
    }
}

#[async_trait]
impl TextAnalyzer for ExternalAiAnalyzer {
    fn name(&self) -> &'static str {
        "ai"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        match self.try_analyze(request).await {
            Ok(result) => {
                info!("AI analysis completed with model {}", self.client.model());
                result
            }
            Err(e) => {
                warn!("AI analysis failed: {}; falling back to rule-based analysis", e);
                self.fallback
                    .analyze_text(&request.text, request.target_role(), request.job_description())
            }
        }
    }
}
