//! Trending-industry identification from detected skills

use crate::processing::tables::{AnalyzerTables, MAX_TRENDING_INDUSTRIES};

/// Industries ranked by how many of their keywords occur inside any detected
/// skill. Equal scores keep table order; industries scoring zero are dropped.
pub fn trending_industries(tables: &AnalyzerTables, skills: &[String]) -> Vec<String> {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<(&str, usize)> = tables
        .industry_keywords
        .entries()
        .map(|(industry, keywords)| {
            let score = keywords
                .iter()
                .filter(|kw| lowered.iter().any(|skill| skill.contains(*kw)))
                .count();
            (industry, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    // stable sort keeps table order among equals
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(MAX_TRENDING_INDUSTRIES)
        .map(|(industry, _)| industry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending(names: &[&str]) -> Vec<String> {
        let skills: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        trending_industries(&AnalyzerTables::standard(), &skills)
    }

    #[test]
    fn test_no_skills_no_industries() {
        assert!(trending(&[]).is_empty());
    }

    #[test]
    fn test_ranked_by_score() {
        // Cloud Computing: aws, azure, gcp. SaaS: api.
        let result = trending(&["AWS", "Azure", "GCP", "REST API"]);
        assert_eq!(result, vec!["Cloud Computing", "SaaS"]);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let result = trending(&["Patient Care", "Digital Marketing"]);
        assert_eq!(result, vec!["HealthTech", "E-commerce", "Digital Marketing"]);
    }

    #[test]
    fn test_at_most_five() {
        let result = trending(&[
            "Patient Care", "Investment Analysis", "Sales Strategy", "Machine Learning",
            "Risk Management", "AWS", "Content Marketing",
        ]);
        assert_eq!(result.len(), 5);
    }
}
