//! ATS (Applicant Tracking System) formatting feedback

use crate::processing::skills::extract_job_skills;
use crate::processing::tables::AnalyzerTables;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_ATS_FEEDBACK: usize = 5;

const PHONE_SCAN_CHARS: usize = 200;
const STANDARD_SECTIONS: &[&str] = &["experience", "education", "skills", "work history"];
const MISSING_SECTIONS_THRESHOLD: usize = 2;
const MISSING_KEYWORDS_THRESHOLD: usize = 3;
const MISSING_KEYWORDS_SHOWN: usize = 3;

pub const MISSING_EMAIL: &str =
    "⚠️ Missing email address - Add a professional email in the contact section";
pub const MISSING_PHONE: &str =
    "⚠️ Missing phone number - Include your contact number for recruiters";
pub const MISSING_SECTIONS: &str =
    "📋 Use standard section headings like 'Experience', 'Education', 'Skills' for better ATS parsing";
pub const MISSING_ACHIEVEMENTS: &str =
    "📊 Add quantifiable achievements (e.g., 'Increased sales by 25%', 'Managed team of 10')";
pub const TIP_FORMATTING: &str =
    "✅ Use simple, clean formatting - Avoid tables, text boxes, headers/footers";
pub const TIP_FILE_FORMAT: &str =
    "✅ Save as .docx or PDF format - Ensure text is selectable, not images";
pub const TIP_KEYWORDS: &str =
    "💡 Include relevant keywords from the job description naturally throughout your resume";

static QUANTIFIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+%|\d+\+|increased|decreased|improved|reduced")
        .expect("Invalid achievement regex")
});

/// Between three and five feedback items for any resume text, warnings
/// first and generic tips after.
pub fn generate_ats_feedback(
    tables: &AnalyzerTables,
    resume_text: &str,
    job_description: Option<&str>,
) -> Vec<String> {
    let lowered = resume_text.to_lowercase();
    let mut feedback: Vec<String> = Vec::with_capacity(MAX_ATS_FEEDBACK + 2);

    if !resume_text.contains('@') {
        feedback.push(MISSING_EMAIL.to_string());
    }

    // any digit near the top is taken as a phone number
    let has_phone = resume_text
        .chars()
        .take(PHONE_SCAN_CHARS)
        .any(|c| c.is_numeric());
    if !has_phone {
        feedback.push(MISSING_PHONE.to_string());
    }

    let missing_sections = STANDARD_SECTIONS
        .iter()
        .filter(|section| !lowered.contains(*section))
        .count();
    if missing_sections >= MISSING_SECTIONS_THRESHOLD {
        feedback.push(MISSING_SECTIONS.to_string());
    }

    if !QUANTIFIABLE_PATTERN.is_match(&lowered) {
        feedback.push(MISSING_ACHIEVEMENTS.to_string());
    }

    if let Some(jd) = job_description.filter(|jd| !jd.trim().is_empty()) {
        let missing: Vec<String> = extract_job_skills(tables, jd)
            .into_iter()
            .filter(|skill| !lowered.contains(&skill.to_lowercase()))
            .collect();

        if missing.len() > MISSING_KEYWORDS_THRESHOLD {
            let shown: Vec<&str> = missing
                .iter()
                .take(MISSING_KEYWORDS_SHOWN)
                .map(String::as_str)
                .collect();
            feedback.push(format!(
                "🎯 Missing key job requirements: {} - Consider adding these if you have experience",
                shown.join(", ")
            ));
        }
    }

    if feedback.len() < 3 {
        feedback.push(TIP_FORMATTING.to_string());
        feedback.push(TIP_FILE_FORMAT.to_string());
    }
    if feedback.len() < MAX_ATS_FEEDBACK {
        feedback.push(TIP_KEYWORDS.to_string());
    }

    feedback.truncate(MAX_ATS_FEEDBACK);
    feedback
}
