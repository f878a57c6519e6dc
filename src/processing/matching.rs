//! Role selection per analysis mode and match/gap computation

use crate::processing::roles::{extract_role_title, role_requirements, suggest_roles};
use crate::processing::skills::{contains_skill, extract_job_skills};
use crate::processing::tables::AnalyzerTables;
use indexmap::IndexMap;

/// Match percentages never exceed this ceiling.
pub const MAX_MATCH_PERCENTAGE: f64 = 95.0;

/// Missing skills reported per role.
pub const MAX_SKILL_GAPS: usize = 5;

/// How the candidate roles of an analysis are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisMode {
    /// Three roles suggested from the detected field.
    Suggested,
    /// The named role first, then two suggestions.
    TargetRole(String),
    /// The posting's role, judged against the skills the posting asks for.
    JobDescription {
        role_title: String,
        required_skills: Vec<String>,
    },
}

/// A role under evaluation and the skills it requires.
#[derive(Debug, Clone, PartialEq)]
pub struct RolePlan {
    pub role: String,
    pub requirements: Vec<String>,
}

impl AnalysisMode {
    /// Select the mode for a request. A job description takes precedence
    /// over a target role; blank inputs count as absent.
    pub fn from_inputs(
        tables: &AnalyzerTables,
        target_role: Option<&str>,
        job_description: Option<&str>,
    ) -> Self {
        let present = |s: &&str| !s.trim().is_empty();

        if let Some(jd) = job_description.filter(present) {
            return AnalysisMode::JobDescription {
                role_title: extract_role_title(jd),
                required_skills: extract_job_skills(tables, jd),
            };
        }

        match target_role.filter(present) {
            Some(role) => AnalysisMode::TargetRole(role.to_string()),
            None => AnalysisMode::Suggested,
        }
    }

    /// Roles to evaluate, primary first.
    pub fn plan_roles(&self, tables: &AnalyzerTables, field: &str) -> Vec<RolePlan> {
        let resolve = |role: String| RolePlan {
            requirements: role_requirements(tables, &role, field),
            role,
        };

        match self {
            AnalysisMode::Suggested => suggest_roles(tables, field, None)
                .into_iter()
                .map(resolve)
                .collect(),
            AnalysisMode::TargetRole(target) => {
                let mut plans = vec![resolve(target.clone())];
                plans.extend(secondary_roles(tables, field, target).into_iter().map(resolve));
                plans
            }
            AnalysisMode::JobDescription {
                role_title,
                required_skills,
            } => {
                let mut plans = vec![RolePlan {
                    role: role_title.clone(),
                    requirements: required_skills.clone(),
                }];
                plans.extend(secondary_roles(tables, field, role_title).into_iter().map(resolve));
                plans
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisMode::Suggested => "suggested",
            AnalysisMode::TargetRole(_) => "target-role",
            AnalysisMode::JobDescription { .. } => "job-description",
        }
    }
}

fn secondary_roles(tables: &AnalyzerTables, field: &str, primary: &str) -> Vec<String> {
    suggest_roles(tables, field, Some(primary))
        .into_iter()
        .take(2)
        .collect()
}

/// Match outcome for a single role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMatch {
    pub percentage: f64,
    pub missing: Vec<String>,
}

/// Percentage of `required` present in `detected` (capped at 95) and the
/// first five required skills the candidate lacks.
pub fn match_role(detected: &[String], required: &[String]) -> RoleMatch {
    let matched = required
        .iter()
        .filter(|skill| contains_skill(detected, skill))
        .count();
    let percentage = 100.0 * matched as f64 / required.len().max(1) as f64;

    let missing = required
        .iter()
        .filter(|skill| !contains_skill(detected, skill))
        .take(MAX_SKILL_GAPS)
        .cloned()
        .collect();

    RoleMatch {
        percentage: round_to_tenth(percentage.min(MAX_MATCH_PERCENTAGE)),
        missing,
    }
}

/// Per-role percentages and gaps, both in evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleMatches {
    pub role_matches: IndexMap<String, f64>,
    pub skill_gaps: IndexMap<String, Vec<String>>,
}

impl RoleMatches {
    pub fn top_role(&self) -> Option<(&str, f64)> {
        best_role(&self.role_matches)
    }
}

/// Best-matching role; the earliest one wins a tie.
pub fn best_role(role_matches: &IndexMap<String, f64>) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (role, pct) in role_matches {
        if best.map_or(true, |(_, best_pct)| *pct > best_pct) {
            best = Some((role.as_str(), *pct));
        }
    }
    best
}

pub fn compute_role_matches(detected: &[String], plans: &[RolePlan]) -> RoleMatches {
    let mut result = RoleMatches::default();
    for plan in plans {
        let RoleMatch { percentage, missing } = match_role(detected, &plan.requirements);
        result.role_matches.insert(plan.role.clone(), percentage);
        result.skill_gaps.insert(plan.role.clone(), missing);
    }
    result
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
