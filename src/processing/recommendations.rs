//! Prioritized learning recommendations built from skill gaps

use crate::processing::skills::contains_skill;
use crate::processing::tables::{fill_skill, AnalyzerTables};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub priority: Priority,
    pub resource: String,
    pub timeframe: String,
    pub learning_tip: String,
}

impl Recommendation {
    /// Resource, timeframe and tip come from the lookup tables, with generic
    /// text for skills they do not list.
    pub fn for_skill(tables: &AnalyzerTables, skill: &str, priority: Priority) -> Self {
        Self {
            skill: skill.to_string(),
            priority,
            resource: fill_skill(tables.resources.lookup(skill), skill),
            timeframe: fill_skill(tables.timeframes.lookup(skill), skill),
            learning_tip: learning_tip(tables, skill),
        }
    }
}

pub fn learning_tip(tables: &AnalyzerTables, skill: &str) -> String {
    fill_skill(tables.tips.lookup(skill), skill)
}

/// Up to three recommendations: the first gap is High, further gaps Medium,
/// then field defaults the candidate lacks as Low.
pub fn build_recommendations(
    tables: &AnalyzerTables,
    gaps: &[String],
    detected: &[String],
    field: &str,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = gaps
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(i, skill)| {
            let priority = if i == 0 { Priority::High } else { Priority::Medium };
            Recommendation::for_skill(tables, skill, priority)
        })
        .collect();

    for skill in tables.field_default_skills.lookup(field) {
        if recommendations.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        let already_recommended = recommendations
            .iter()
            .any(|r| r.skill.eq_ignore_ascii_case(skill));
        if !already_recommended && !contains_skill(detected, skill) {
            recommendations.push(Recommendation::for_skill(tables, skill, Priority::Low));
        }
    }

    recommendations
}
