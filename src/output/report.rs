//! Report envelope: an analysis result plus where and how it was produced

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Name of the analyzer that produced the result
    pub analyzer: String,
    pub source_file: Option<String>,
    pub tool_version: String,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, analyzer: &str, source_file: Option<String>) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer: analyzer.to_string(),
                source_file,
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// File name of the analyzed resume, or "inline text".
    pub fn source_display(&self) -> String {
        self.metadata
            .source_file
            .as_deref()
            .map(|path| {
                std::path::Path::new(path)
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.to_string())
            })
            .unwrap_or_else(|| "inline text".to_string())
    }
}

/// Qualitative band of a role match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    Strong,
    Good,
    Partial,
    Weak,
}

impl MatchBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            MatchBand::Strong
        } else if percentage >= 50.0 {
            MatchBand::Good
        } else if percentage >= 25.0 {
            MatchBand::Partial
        } else {
            MatchBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::Strong => "STRONG",
            MatchBand::Good => "GOOD",
            MatchBand::Partial => "PARTIAL",
            MatchBand::Weak => "WEAK",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MatchBand::Strong => "match-strong",
            MatchBand::Good => "match-good",
            MatchBand::Partial => "match-partial",
            MatchBand::Weak => "match-weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::analyze;

    #[test]
    fn test_match_bands() {
        assert_eq!(MatchBand::from_percentage(95.0), MatchBand::Strong);
        assert_eq!(MatchBand::from_percentage(75.0), MatchBand::Strong);
        assert_eq!(MatchBand::from_percentage(50.0), MatchBand::Good);
        assert_eq!(MatchBand::from_percentage(33.3), MatchBand::Partial);
        assert_eq!(MatchBand::from_percentage(0.0), MatchBand::Weak);
        assert_eq!(MatchBand::Weak.css_class(), "match-weak");
    }

    #[test]
    fn test_source_display() {
        let result = analyze("Python developer", None, None);
        let report = AnalysisReport::new(result.clone(), "rule-based", Some("cv/jane_resume.pdf".to_string()));
        assert_eq!(report.source_display(), "jane_resume.pdf");
        assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));

        let inline = AnalysisReport::new(result, "rule-based", None);
        assert_eq!(inline.source_display(), "inline text");
    }
}
