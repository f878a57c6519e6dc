//! Years-of-experience estimation

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when the text states no experience explicitly.
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 2.0;

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"([0-9]+)\+?\s*years?\s*(?:of)?\s*experience").expect("Invalid experience regex"),
        Regex::new(r"experience[:\s]+([0-9]+)\+?\s*years?").expect("Invalid experience regex"),
    ]
});

/// First "N years of experience" / "experience: N years" figure in the text.
pub fn estimate_experience(text: &str) -> f64 {
    let lowered = text.to_lowercase();

    for pattern in EXPERIENCE_PATTERNS.iter() {
        if let Some(years) = pattern
            .captures(&lowered)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
        {
            return years;
        }
    }

    DEFAULT_EXPERIENCE_YEARS
}
