//! Radar-chart category scores

use crate::processing::matching::round_to_tenth;
use crate::processing::tables::{AnalyzerTables, INDUSTRY_STANDARD_SCORES};
use serde::{Deserialize, Serialize};

pub const CANDIDATE_DATASET_LABEL: &str = "Your Competencies";
pub const BASELINE_DATASET_LABEL: &str = "Industry Standard";

const BASE_SCORE: usize = 40;
const POINTS_PER_SKILL: usize = 15;
const MAX_SCORE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Category labels plus the candidate and baseline datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
}

/// `min(100, matched * 15 + 40)` for each category, where a skill counts
/// toward a category when it contains any word of the category name.
pub fn category_scores(skills: &[String], categories: &[&str]) -> Vec<f64> {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    categories
        .iter()
        .map(|category| {
            let category = category.to_lowercase();
            let words: Vec<&str> = category.split_whitespace().collect();
            let matched = lowered
                .iter()
                .filter(|skill| words.iter().any(|w| skill.contains(w)))
                .count();
            let score = (matched * POINTS_PER_SKILL + BASE_SCORE).min(MAX_SCORE);
            round_to_tenth(score as f64)
        })
        .collect()
}

/// Radar chart for a field: its categories, the candidate's scores and the
/// fixed industry baseline.
pub fn build_radar_data(tables: &AnalyzerTables, skills: &[String], field: &str) -> RadarData {
    let categories = tables.field_categories.lookup(field);

    RadarData {
        labels: categories.iter().map(|c| c.to_string()).collect(),
        datasets: vec![
            RadarDataset {
                label: CANDIDATE_DATASET_LABEL.to_string(),
                data: category_scores(skills, categories),
            },
            RadarDataset {
                label: BASELINE_DATASET_LABEL.to_string(),
                data: INDUSTRY_STANDARD_SCORES.to_vec(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skills_score_base() {
        let scores = category_scores(&[], &["Tools", "Leadership"]);
        assert_eq!(scores, vec![40.0, 40.0]);
    }

    #[test]
    fn test_skill_counts_when_containing_category_word() {
        let detected = skills(&["Team Management", "Project Management", "Leadership", "Python"]);
        let scores = category_scores(&detected, &["Stakeholder Management", "Leadership"]);
        // "management" hits two skills; "leadership" one
        assert_eq!(scores, vec![70.0, 55.0]);
    }

    #[test]
    fn test_score_capped_at_100() {
        let detected = skills(&["Sales Strategy", "Sales A", "Sales B", "Sales C", "Sales D"]);
        assert_eq!(category_scores(&detected, &["Sales Skills"]), vec![100.0]);
    }

    #[test]
    fn test_radar_uses_generic_labels_for_unknown_field() {
        let radar = build_radar_data(&AnalyzerTables::standard(), &[], "Astronomy");
        assert_eq!(
            radar.labels,
            vec!["Core Skills", "Tools", "Communication", "Leadership", "Strategy"]
        );
        assert_eq!(radar.datasets.len(), 2);
        assert_eq!(radar.datasets[0].label, "Your Competencies");
        assert_eq!(radar.datasets[1].data, vec![80.0, 75.0, 70.0, 75.0, 65.0]);
    }
}
