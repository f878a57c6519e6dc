//! Role suggestion, requirement resolution and job-title extraction

use crate::processing::tables::{AnalyzerTables, MAX_ROLE_REQUIREMENTS};

pub const MAX_SUGGESTED_ROLES: usize = 3;

/// Title used when a job description offers nothing usable.
pub const FALLBACK_ROLE_TITLE: &str = "Target Role";

const ROLE_TITLE_MAX_CHARS: usize = 50;
const ROLE_TITLE_SCAN_LINES: usize = 5;
const ROLE_TITLE_KEYWORDS: &[&str] = &[
    "engineer", "manager", "director", "analyst", "developer",
    "designer", "specialist", "consultant", "coordinator", "lead",
];

/// Next-step roles for a field, minus `exclude` (case-insensitive), at most 3.
pub fn suggest_roles(tables: &AnalyzerTables, field: &str, exclude: Option<&str>) -> Vec<String> {
    let excluded = exclude.map(str::to_lowercase);

    tables
        .role_suggestions
        .lookup(field)
        .iter()
        .filter(|role| excluded.as_deref() != Some(role.to_lowercase().as_str()))
        .take(MAX_SUGGESTED_ROLES)
        .map(|role| role.to_string())
        .collect()
}

/// Required skills for a role within a field.
///
/// The role-type base set comes first, then the field set; duplicates keep
/// their first position and the list is capped at 10.
pub fn role_requirements(tables: &AnalyzerTables, role: &str, field: &str) -> Vec<String> {
    let base = tables
        .role_type_skills
        .entries()
        .find(|(markers, _)| markers.split('|').any(|marker| role.contains(marker)))
        .map(|(_, skills)| skills)
        .unwrap_or_else(|| tables.role_type_skills.default_value());

    let mut requirements: Vec<String> = Vec::with_capacity(MAX_ROLE_REQUIREMENTS);
    for skill in base.iter().chain(tables.field_skills.lookup(field).iter()) {
        if !requirements.iter().any(|s| s == skill) {
            requirements.push(skill.to_string());
        }
    }
    requirements.truncate(MAX_ROLE_REQUIREMENTS);
    requirements
}

/// Role title of a job posting.
///
/// The first of the opening five lines that names a role keyword wins;
/// otherwise the first line is used as-is.
pub fn extract_role_title(job_description: &str) -> String {
    let lines: Vec<&str> = job_description.split('\n').collect();

    for line in lines.iter().take(ROLE_TITLE_SCAN_LINES) {
        let lowered = line.to_lowercase();
        if ROLE_TITLE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return truncate_chars(line.trim(), ROLE_TITLE_MAX_CHARS);
        }
    }

    let first_line = lines.first().map(|l| l.trim()).unwrap_or_default();
    if first_line.is_empty() {
        FALLBACK_ROLE_TITLE.to_string()
    } else {
        truncate_chars(first_line, ROLE_TITLE_MAX_CHARS)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> AnalyzerTables {
        AnalyzerTables::standard()
    }

    #[test]
    fn test_suggest_roles_truncates_to_three() {
        assert_eq!(
            suggest_roles(&tables(), "Software Development", None),
            vec!["Senior Software Engineer", "Tech Lead", "Engineering Manager"]
        );
    }

    #[test]
    fn test_suggest_roles_excludes_case_insensitively() {
        assert_eq!(
            suggest_roles(&tables(), "Software Development", Some("tech lead")),
            vec!["Senior Software Engineer", "Engineering Manager", "Solutions Architect"]
        );
    }

    #[test]
    fn test_unknown_field_uses_general_business() {
        assert_eq!(
            suggest_roles(&tables(), "Astronomy", None),
            vec!["Business Analyst", "Operations Manager", "Project Manager"]
        );
    }

    #[test]
    fn test_manager_requirements_union_field_skills() {
        let reqs = role_requirements(&tables(), "Engineering Manager", "Software Development");
        assert_eq!(
            reqs,
            vec![
                "Leadership", "Team Management", "Strategic Planning", "Communication",
                "Budget Management", "Python", "JavaScript", "Git", "Docker", "AWS",
            ]
        );
    }

    #[test]
    fn test_requirements_dedupe_in_first_seen_order() {
        let reqs = role_requirements(&tables(), "DevOps Engineer", "Software Development");
        assert_eq!(
            reqs,
            vec!["Python", "Git", "Problem Solving", "Agile", "CI/CD", "JavaScript", "Docker", "AWS"]
        );
    }

    #[test]
    fn test_senior_rule_precedes_engineer_rule() {
        let reqs = role_requirements(&tables(), "Senior Software Engineer", "Astronomy");
        assert_eq!(
            reqs,
            vec![
                "Problem Solving", "Mentorship", "Technical Expertise", "Project Management",
                "Communication", "Leadership",
            ]
        );
    }

    #[test]
    fn test_generic_role_requirements() {
        let reqs = role_requirements(&tables(), "Controller", "Finance");
        assert_eq!(reqs[..4], ["Communication", "Problem Solving", "Collaboration", "Time Management"]);
        assert!(reqs.len() <= 10);
    }

    #[test]
    fn test_role_title_from_keyword_line() {
        assert_eq!(
            extract_role_title("Senior Data Analyst\nRequires SQL, Excel, Python."),
            "Senior Data Analyst"
        );
        assert_eq!(
            extract_role_title("Acme Corp\n  Backend Developer  \nRust"),
            "Backend Developer"
        );
    }

    #[test]
    fn test_role_title_falls_back_to_first_line() {
        assert_eq!(extract_role_title("Acme Corp is hiring\nRust, SQL"), "Acme Corp is hiring");
        assert_eq!(extract_role_title("\n\nnothing here"), FALLBACK_ROLE_TITLE);
        assert_eq!(extract_role_title(""), FALLBACK_ROLE_TITLE);
    }

    #[test]
    fn test_role_title_truncated_to_fifty_chars() {
        let long = format!("Principal Engineer {}", "x".repeat(80));
        assert_eq!(extract_role_title(&long).chars().count(), 50);
    }
}
