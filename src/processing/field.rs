//! Professional field classification by keyword scoring

use crate::processing::tables::{AnalyzerTables, DEFAULT_FIELD};

/// Pick the field whose keywords appear most often in the text.
///
/// Each keyword counts once no matter how many times it occurs. Ties go to the
/// field listed first in the table; no hits at all yields "General Business".
pub fn classify_field(tables: &AnalyzerTables, text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for (field, keywords) in tables.field_keywords.entries() {
        let score = keywords.iter().filter(|kw| lowered.contains(*kw)).count();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((field, score)),
        }
    }

    best.map(|(field, _)| field.to_string())
        .unwrap_or_else(|| DEFAULT_FIELD.to_string())
}
