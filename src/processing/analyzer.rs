//! Rule-based analysis engine sequencing every processing step into one result

use crate::processing::ats_feedback::generate_ats_feedback;
use crate::processing::experience::estimate_experience;
use crate::processing::field::classify_field;
use crate::processing::industries::trending_industries;
use crate::processing::matching::{best_role, compute_role_matches, AnalysisMode};
use crate::processing::recommendations::{build_recommendations, Recommendation};
use crate::processing::scoring::{build_radar_data, RadarData};
use crate::processing::skills::extract_skills;
use crate::processing::tables::AnalyzerTables;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Complete career-fit analysis of one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub current_field: String,
    /// Role -> match percentage in [0, 95], primary role first
    pub role_matches: IndexMap<String, f64>,
    /// Role -> up to five missing skills
    pub skill_gaps: IndexMap<String, Vec<String>>,
    pub radar_data: RadarData,
    pub recommendations: Vec<Recommendation>,
    pub trending_industries: Vec<String>,
    pub summary: String,
    pub ats_feedback: Vec<String>,
}

impl AnalysisResult {
    /// Best-matching role; the earliest one wins a tie.
    pub fn top_role(&self) -> Option<(&str, f64)> {
        best_role(&self.role_matches)
    }
}

/// The deterministic analyzer. Holds nothing but references to read-only
/// tables, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer {
    tables: AnalyzerTables,
}

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self::with_tables(AnalyzerTables::standard())
    }

    pub fn with_tables(tables: AnalyzerTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &AnalyzerTables {
        &self.tables
    }

    /// Run the full pipeline. Never fails: degenerate input (even an empty
    /// string) produces a low-confidence result.
    pub fn analyze_text(
        &self,
        text: &str,
        target_role: Option<&str>,
        job_description: Option<&str>,
    ) -> AnalysisResult {
        let tables = &self.tables;

        let skills = extract_skills(tables, text);
        let experience_years = estimate_experience(text);
        let current_field = classify_field(tables, text);

        let mode = AnalysisMode::from_inputs(tables, target_role, job_description);
        debug!(
            "Detected {} skills, field '{}', mode {}",
            skills.len(),
            current_field,
            mode.name()
        );

        let plans = mode.plan_roles(tables, &current_field);
        let matches = compute_role_matches(&skills, &plans);

        let radar_data = build_radar_data(tables, &skills, &current_field);
        let trending_industries = trending_industries(tables, &skills);

        let (top_role, top_score) = matches
            .top_role()
            .map(|(role, pct)| (role.to_string(), pct))
            .unwrap_or_else(|| (current_field.clone(), 0.0));

        // an explicit target role wins even when it was not evaluated
        let recommendation_target = target_role
            .filter(|role| !role.trim().is_empty())
            .unwrap_or(&top_role);
        let gaps = matches
            .skill_gaps
            .get(recommendation_target)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let recommendations = build_recommendations(tables, gaps, &skills, &current_field);

        let summary = generate_summary(skills.len(), experience_years, &top_role, top_score);
        let ats_feedback = generate_ats_feedback(tables, text, job_description);

        AnalysisResult {
            skills,
            experience_years,
            current_field,
            role_matches: matches.role_matches,
            skill_gaps: matches.skill_gaps,
            radar_data,
            recommendations,
            trending_industries,
            summary,
            ats_feedback,
        }
    }
}

/// Analyze resume text with the standard tables.
pub fn analyze(text: &str, target_role: Option<&str>, job_description: Option<&str>) -> AnalysisResult {
    RuleBasedAnalyzer::new().analyze_text(text, target_role, job_description)
}

/// Strength tier and outlook for a top match score.
pub fn summary_tier(match_score: f64) -> (&'static str, &'static str) {
    if match_score >= 75.0 {
        ("excellent", "well-positioned for senior roles")
    } else if match_score >= 60.0 {
        ("strong", "ready for mid-level positions with some upskilling")
    } else if match_score >= 40.0 {
        ("solid", "has a clear growth path with focused learning")
    } else {
        ("developing", "should focus on building core competencies")
    }
}

pub fn generate_summary(skill_count: usize, experience_years: f64, top_role: &str, match_score: f64) -> String {
    let (strength, outlook) = summary_tier(match_score);
    // {:?} keeps the decimal point on whole numbers ("5.0")
    format!(
        "This candidate demonstrates a {} technical foundation with {} identified skills and {:?} years of experience, showing the best fit for {} roles. They are {} in their target domain.",
        strength, skill_count, experience_years, top_role, outlook
    )
}
