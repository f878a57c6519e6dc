//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, SkillGapError};
use crate::output::report::{AnalysisReport, MatchBand};
use crate::processing::analyzer::AnalysisResult;
use crate::processing::recommendations::Priority;
use crate::processing::scoring::{BASELINE_DATASET_LABEL, CANDIDATE_DATASET_LABEL};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// One row of the competency table: category, candidate score, baseline score.
struct RadarRow {
    label: String,
    candidate: f64,
    baseline: Option<f64>,
}

fn radar_rows(result: &AnalysisResult) -> Vec<RadarRow> {
    let radar = &result.radar_data;
    let dataset = |name: &str| radar.datasets.iter().find(|d| d.label == name);
    let candidate = dataset(CANDIDATE_DATASET_LABEL);
    let baseline = dataset(BASELINE_DATASET_LABEL);

    radar
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| RadarRow {
            label: label.clone(),
            candidate: candidate.and_then(|d| d.data.get(i).copied()).unwrap_or(0.0),
            baseline: baseline.and_then(|d| d.data.get(i).copied()),
        })
        .collect()
}

/// Gaps for one role, joined for display.
fn missing_skills(result: &AnalysisResult, role: &str) -> String {
    match result.skill_gaps.get(role) {
        Some(gaps) if !gaps.is_empty() => gaps.join(", "),
        _ => "none".to_string(),
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-high",
        Priority::Medium => "priority-medium",
        Priority::Low => "priority-low",
    }
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Career Fit Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }
        .section { margin: 30px 0; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        .score-badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
        }
        .match-strong { background-color: #28a745; }
        .match-good { background-color: #17a2b8; }
        .match-partial { background-color: #ffc107; color: #333; }
        .match-weak { background-color: #dc3545; }
        .skill {
            display: inline-block;
            background: #e9ecef;
            padding: 2px 10px;
            margin: 3px;
            border-radius: 12px;
        }
        .recommendation {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .priority-high { border-left-color: #dc3545; }
        .priority-medium { border-left-color: #ffc107; }
        .priority-low { border-left-color: #28a745; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 Career Fit Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Source: {{ source }}</p>
        </div>

        <div class="section">
            <h2>Summary</h2>
            <p>{{ summary }}</p>
            <p><strong>Field:</strong> {{ current_field }} | <strong>Experience:</strong> {{ experience_years }} years</p>
        </div>

        <div class="section">
            <h2>🧰 Detected Skills</h2>
            {% if skills.is_empty() %}
            <p>No known skills detected.</p>
            {% else %}
            <p>{% for skill in skills %}<span class="skill">{{ skill }}</span>{% endfor %}</p>
            {% endif %}
        </div>

        <div class="section">
            <h2>🎯 Role Matches</h2>
            <table>
                <tr><th>Role</th><th>Match</th><th>Missing Skills</th></tr>
                {% for role in roles %}
                <tr>
                    <td>{{ role.name }}</td>
                    <td><span class="score-badge {{ role.css_class }}">{{ role.percentage }}%</span></td>
                    <td>{{ role.missing }}</td>
                </tr>
                {% endfor %}
            </table>
        </div>

        <div class="section">
            <h2>📈 Competency Radar</h2>
            <table>
                <tr><th>Category</th><th>Your Competencies</th><th>Industry Standard</th></tr>
                {% for row in radar %}
                <tr><td>{{ row.label }}</td><td>{{ row.candidate }}</td><td>{{ row.baseline }}</td></tr>
                {% endfor %}
            </table>
        </div>

        {% if !recommendations.is_empty() %}
        <div class="section">
            <h2>💡 Recommendations</h2>
            {% for rec in recommendations %}
            <div class="recommendation {{ rec.priority_class }}">
                <h4>{{ rec.skill }} <small>({{ rec.priority }} priority)</small></h4>
                <p><strong>Resource:</strong> {{ rec.resource }}</p>
                <p><strong>Timeframe:</strong> {{ rec.timeframe }}</p>
                <p><strong>Tip:</strong> {{ rec.learning_tip }}</p>
            </div>
            {% endfor %}
        </div>
        {% endif %}

        {% if !industries.is_empty() %}
        <div class="section">
            <h2>🚀 Trending Industries</h2>
            <ul>
                {% for industry in industries %}<li>{{ industry }}</li>{% endfor %}
            </ul>
        </div>
        {% endif %}

        {% if !ats_feedback.is_empty() %}
        <div class="section">
            <h2>📋 ATS Feedback</h2>
            <ul>
                {% for item in ats_feedback %}<li>{{ item }}</li>{% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Analyzer:</strong> {{ analyzer }} | <strong>Version:</strong> {{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    source: String,
    summary: String,
    current_field: String,
    experience_years: String,
    skills: Vec<String>,
    roles: Vec<HtmlRole>,
    radar: Vec<HtmlRadarRow>,
    recommendations: Vec<HtmlRecommendation>,
    industries: Vec<String>,
    ats_feedback: Vec<String>,
    analyzer: String,
    version: String,
}

struct HtmlRole {
    name: String,
    percentage: String,
    css_class: &'static str,
    missing: String,
}

struct HtmlRadarRow {
    label: String,
    candidate: String,
    baseline: String,
}

struct HtmlRecommendation {
    skill: String,
    priority: String,
    priority_class: &'static str,
    resource: String,
    timeframe: String,
    learning_tip: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_match_badge(&self, percentage: f64) -> String {
        let band = MatchBand::from_percentage(percentage);
        let color = match band {
            MatchBand::Strong => Color::Green,
            MatchBand::Good => Color::BrightGreen,
            MatchBand::Partial => Color::Yellow,
            MatchBand::Weak => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match (self.use_colors, priority) {
            (true, Priority::High) => "🔥",
            (true, Priority::Medium) => "📋",
            (true, Priority::Low) => "💡",
            (false, Priority::High) => "[!]",
            (false, Priority::Medium) => "[*]",
            (false, Priority::Low) => "[+]",
        }
    }

    fn format_gaps(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();
        let roles: Vec<&str> = if self.detailed {
            result.role_matches.keys().map(String::as_str).collect()
        } else {
            result.top_role().map(|(role, _)| role).into_iter().collect()
        };

        for role in roles {
            output.push_str(&format!(
                "  {} {}\n",
                self.colorize(&format!("{}:", role), Color::Cyan),
                missing_skills(result, role)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CAREER FIT ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Analyzer: {} | Source: {}\n",
            report.generated_at_display(),
            report.metadata.analyzer,
            report.source_display()
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("{}\n", self.colorize(&result.summary, Color::Cyan)));

        output.push_str(&self.format_header("Profile", 2));
        output.push_str(&format!("  Field: {}\n", result.current_field));
        output.push_str(&format!("  Experience: {:.1} years\n", result.experience_years));
        if result.skills.is_empty() {
            output.push_str("  Skills: none detected\n");
        } else {
            output.push_str(&format!(
                "  Skills ({}): {}\n",
                result.skills.len(),
                self.colorize(&result.skills.join(", "), Color::Green)
            ));
        }

        output.push_str(&self.format_header("🎯 Role Matches", 2));
        for (role, percentage) in &result.role_matches {
            output.push_str(&format!(
                "  {:<30} {:>5.1}% {}\n",
                role,
                percentage,
                self.format_match_badge(*percentage)
            ));
        }

        if !result.skill_gaps.is_empty() {
            output.push_str(&self.format_header("⚠️  Skill Gaps", 3));
            output.push_str(&self.format_gaps(result));
        }

        if self.detailed {
            output.push_str(&self.format_header("📈 Competency Radar", 3));
            for row in radar_rows(result) {
                let baseline = row
                    .baseline
                    .map(|b| format!("{:.1}", b))
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!(
                    "  {:<20} you {:>5.1} | industry {:>5}\n",
                    row.label, row.candidate, baseline
                ));
            }
        }

        if !result.recommendations.is_empty() {
            output.push_str(&self.format_header("💡 Recommendations", 2));
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "{} {}. {} ({} priority)\n",
                    self.format_priority_icon(rec.priority),
                    i + 1,
                    self.colorize(&rec.skill, Color::White),
                    rec.priority
                ));
                output.push_str(&format!("   Resource: {}\n", rec.resource));
                output.push_str(&format!("   Timeframe: {}\n", rec.timeframe));
                output.push_str(&format!("   Tip: {}\n\n", rec.learning_tip));
            }
        }

        if !result.trending_industries.is_empty() {
            output.push_str(&self.format_header("🚀 Trending Industries", 3));
            for industry in &result.trending_industries {
                output.push_str(&format!("  • {}\n", industry));
            }
        }

        if !result.ats_feedback.is_empty() {
            output.push_str(&self.format_header("📋 ATS Feedback", 3));
            for item in &result.ats_feedback {
                output.push_str(&format!("  • {}\n", self.colorize(item, Color::Yellow)));
            }
        }

        output.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!("skillgap-analyzer v{}", report.metadata.tool_version),
                Color::BrightBlack
            )
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let result = &report.result;

        let roles = result
            .role_matches
            .iter()
            .map(|(role, percentage)| HtmlRole {
                name: role.clone(),
                percentage: format!("{:.1}", percentage),
                css_class: MatchBand::from_percentage(*percentage).css_class(),
                missing: missing_skills(result, role),
            })
            .collect();

        let radar = radar_rows(result)
            .into_iter()
            .map(|row| HtmlRadarRow {
                label: row.label,
                candidate: format!("{:.1}", row.candidate),
                baseline: row.baseline.map(|b| format!("{:.1}", b)).unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        let recommendations = result
            .recommendations
            .iter()
            .map(|rec| HtmlRecommendation {
                skill: rec.skill.clone(),
                priority: rec.priority.to_string(),
                priority_class: priority_class(rec.priority),
                resource: rec.resource.clone(),
                timeframe: rec.timeframe.clone(),
                learning_tip: rec.learning_tip.clone(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.generated_at_display(),
            source: report.source_display(),
            summary: result.summary.clone(),
            current_field: result.current_field.clone(),
            experience_years: format!("{:.1}", result.experience_years),
            skills: result.skills.clone(),
            roles,
            radar,
            recommendations,
            industries: result.trending_industries.clone(),
            ats_feedback: result.ats_feedback.clone(),
            analyzer: report.metadata.analyzer.clone(),
            version: report.metadata.tool_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        template_data
            .render()
            .map_err(|e| SkillGapError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    /// Pipes would split a table cell.
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn markdown_badge(percentage: f64) -> &'static str {
        match MatchBand::from_percentage(percentage) {
            MatchBand::Strong => "🟢",
            MatchBand::Good => "🔵",
            MatchBand::Partial => "🟡",
            MatchBand::Weak => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# 📊 Career Fit Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Analyzer:** {}\n",
                report.generated_at_display(),
                report.metadata.analyzer
            ));
            output.push_str(&format!("**Source:** `{}`\n\n", report.source_display()));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!("{}\n\n", result.summary));

        output.push_str("## Profile\n\n");
        output.push_str(&format!("- **Field:** {}\n", result.current_field));
        output.push_str(&format!("- **Experience:** {:.1} years\n", result.experience_years));
        if result.skills.is_empty() {
            output.push_str("- **Skills:** none detected\n\n");
        } else {
            output.push_str(&format!("- **Skills:** {}\n\n", result.skills.join(", ")));
        }

        output.push_str("## 🎯 Role Matches\n\n");
        output.push_str("| Role | Match | Missing Skills |\n");
        output.push_str("|------|-------|----------------|\n");
        for (role, percentage) in &result.role_matches {
            output.push_str(&format!(
                "| {} | {} {:.1}% | {} |\n",
                Self::cell(role),
                Self::markdown_badge(*percentage),
                percentage,
                Self::cell(&missing_skills(result, role))
            ));
        }
        output.push('\n');

        output.push_str("## 📈 Competency Radar\n\n");
        output.push_str(&format!(
            "| Category | {} | {} |\n",
            CANDIDATE_DATASET_LABEL, BASELINE_DATASET_LABEL
        ));
        output.push_str("|----------|------|------|\n");
        for row in radar_rows(result) {
            let baseline = row
                .baseline
                .map(|b| format!("{:.1}", b))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!("| {} | {:.1} | {} |\n", row.label, row.candidate, baseline));
        }
        output.push('\n');

        if !result.recommendations.is_empty() {
            output.push_str("## 💡 Recommendations\n\n");
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!("### {}. {} ({} priority)\n\n", i + 1, rec.skill, rec.priority));
                output.push_str(&format!("- **Resource:** {}\n", rec.resource));
                output.push_str(&format!("- **Timeframe:** {}\n", rec.timeframe));
                output.push_str(&format!("- **Tip:** {}\n\n", rec.learning_tip));
            }
        }

        if !result.trending_industries.is_empty() {
            output.push_str("## 🚀 Trending Industries\n\n");
            for industry in &result.trending_industries {
                output.push_str(&format!("- {}\n", industry));
            }
            output.push('\n');
        }

        if !result.ats_feedback.is_empty() {
            output.push_str("## 📋 ATS Feedback\n\n");
            for item in &result.ats_feedback {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        output.push_str("---\n");
        output.push_str(&format!(
            "*Generated by skillgap-analyzer v{}*\n",
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::analyze;
    use crate::processing::recommendations::Recommendation;
    use crate::processing::scoring::{RadarData, RadarDataset};
    use indexmap::IndexMap;
    use tempfile::TempDir;

    const RESUME: &str = "Senior Python Developer with 5 years of experience in Docker and AWS. \
        Skills: Python, Docker, AWS, Leadership.";

    fn sample_report() -> AnalysisReport {
        AnalysisReport::new(analyze(RESUME, None, None), "rule-based", Some("cv/jane.pdf".to_string()))
    }

    fn hostile_report() -> AnalysisReport {
        let mut role_matches = IndexMap::new();
        role_matches.insert("R&D <Lead>".to_string(), 42.0);
        let mut skill_gaps = IndexMap::new();
        skill_gaps.insert("R&D <Lead>".to_string(), vec!["C|C++".to_string()]);

        let result = AnalysisResult {
            skills: vec!["<script>".to_string()],
            experience_years: 2.0,
            current_field: "Research".to_string(),
            role_matches,
            skill_gaps,
            radar_data: RadarData {
                labels: vec!["Technical Skills".to_string()],
                datasets: vec![RadarDataset {
                    label: CANDIDATE_DATASET_LABEL.to_string(),
                    data: vec![20.0],
                }],
            },
            recommendations: vec![Recommendation {
                skill: "C|C++".to_string(),
                priority: Priority::High,
                resource: "Books".to_string(),
                timeframe: "2 months".to_string(),
                learning_tip: "Practice daily".to_string(),
            }],
            trending_industries: vec![],
            summary: "Tom & Jerry".to_string(),
            ats_feedback: vec![],
        };
        AnalysisReport::new(result, "ai", None)
    }

    #[test]
    fn test_console_plain_output() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();

        assert!(output.contains("█ 📊 CAREER FIT ANALYSIS"));
        assert!(output.contains("Source: jane.pdf"));
        assert!(output.contains(&report.result.summary));
        for role in report.result.role_matches.keys() {
            assert!(output.contains(role.as_str()));
        }
        let first = &report.result.recommendations[0];
        assert!(output.contains(&format!("1. {} ({} priority)", first.skill, first.priority)));
        assert!(!output.contains("Competency Radar"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_detailed_shows_every_role_gap() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("Competency Radar"));
        for role in report.result.skill_gaps.keys() {
            assert!(output.contains(&format!("{}:", role)));
        }
    }

    #[test]
    fn test_json_output_contains_result_and_metadata() {
        let report = sample_report();
        let pretty = JsonFormatter::new(true).format_report(&report).unwrap();
        let compact = JsonFormatter::new(false).format_report(&report).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["metadata"]["analyzer"], "rule-based");
        assert_eq!(value["result"]["summary"], report.result.summary.as_str());
        assert!(value["result"]["radar_data"]["datasets"].is_array());
    }

    #[test]
    fn test_markdown_output() {
        let output = MarkdownFormatter::new(true).format_report(&hostile_report()).unwrap();
        assert!(output.starts_with("# 📊 Career Fit Analysis Report"));
        assert!(output.contains("**Analyzer:** ai"));
        assert!(output.contains("| R&D <Lead> | 🟡 42.0% | C\\|C++ |"));
        assert!(output.contains("| Technical Skills | 20.0 | - |"));
        assert!(output.contains("### 1. C|C++ (High priority)"));

        let bare = MarkdownFormatter::new(false).format_report(&hostile_report()).unwrap();
        assert!(!bare.contains("**Generated:**"));
    }

    #[test]
    fn test_html_escapes_content() {
        let output = HtmlFormatter::new(true).format_report(&hostile_report()).unwrap();
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("R&amp;D &lt;Lead&gt;"));
        assert!(output.contains("Tom &amp; Jerry"));
        assert!(!output.contains("<script>"));
        assert!(output.contains("match-partial"));
        assert!(output.contains("priority-high"));
        assert!(output.contains("<style>"));

        let unstyled = HtmlFormatter::new(false).format_report(&hostile_report()).unwrap();
        assert!(!unstyled.contains("<style>"));
    }

    #[test]
    fn test_report_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, true, false);
        let report = sample_report();

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
        assert!(html.contains("<html"));
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with('#'));

        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "cv/jane.pdf", false), "jane_analysis.json");
        assert_eq!(suggest_filename(&OutputFormat::Console, "jane.md", false), "jane_analysis.txt");

        let stamped = suggest_filename(&OutputFormat::Html, "jane.pdf", true);
        assert!(stamped.starts_with("jane_analysis_"));
        assert!(stamped.ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/nested/out.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
