//! Vocabulary-based skill extraction

use crate::error::{Result, SkillGapError};
use crate::processing::tables::{AnalyzerTables, Keywords};
use aho_corasick::{AhoCorasick, MatchKind};

/// Case-insensitive substring matcher over a fixed skill vocabulary.
///
/// Matching is deliberately naive: there is no word-boundary check, so "Java"
/// is found inside "JavaScript" and the single-letter "R" matches almost any text.
#[derive(Debug)]
pub struct SkillMatcher {
    vocabulary: Keywords,
    automaton: AhoCorasick,
    limit: usize,
}

impl SkillMatcher {
    pub fn new(vocabulary: Keywords, limit: usize) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard) // overlapping search needs standard semantics
            .build(vocabulary)
            .map_err(|e| SkillGapError::InvalidInput(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            vocabulary,
            automaton,
            limit,
        })
    }

    /// Skills found in `text`, in vocabulary order, truncated to the limit.
    ///
    /// The automaton only folds ASCII case, so the text is lowercased with
    /// full Unicode rules first.
    pub fn find(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut seen = vec![false; self.vocabulary.len()];
        for mat in self.automaton.find_overlapping_iter(&lowered) {
            seen[mat.pattern().as_usize()] = true;
        }

        self.vocabulary
            .iter()
            .zip(seen)
            .filter(|(_, hit)| *hit)
            .map(|(skill, _)| skill.to_string())
            .take(self.limit)
            .collect()
    }

    pub fn vocabulary(&self) -> Keywords {
        self.vocabulary
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Skills mentioned anywhere in a resume (at most 20).
pub fn extract_skills(tables: &AnalyzerTables, text: &str) -> Vec<String> {
    tables.resume_skills.find(text)
}

/// Skills a job posting asks for (at most 15, narrower vocabulary).
pub fn extract_job_skills(tables: &AnalyzerTables, job_description: &str) -> Vec<String> {
    tables.job_skills.find(job_description)
}

/// Case-insensitive membership test used throughout match/gap computation.
pub fn contains_skill(skills: &[String], skill: &str) -> bool {
    let needle = skill.to_lowercase();
    skills.iter().any(|s| s.to_lowercase() == needle)
}
