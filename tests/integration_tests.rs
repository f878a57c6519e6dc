//! Integration tests for the skill-gap analyzer

use serde_json::json;
use skillgap_analyzer::analyzer::build_analyzer_with_key;
use skillgap_analyzer::config::{AnalyzerMode, Config, OutputFormat};
use skillgap_analyzer::input::{validate_resume_text, InputManager, DEFAULT_MIN_TEXT_CHARS};
use skillgap_analyzer::output::{AnalysisReport, ReportGenerator};
use skillgap_analyzer::processing::ats_feedback::{MISSING_EMAIL, MISSING_PHONE};
use skillgap_analyzer::processing::recommendations::Priority;
use skillgap_analyzer::processing::roles::extract_role_title;
use skillgap_analyzer::processing::skills::extract_job_skills;
use skillgap_analyzer::processing::tables::AnalyzerTables;
use skillgap_analyzer::{analyze, AnalysisRequest, SkillGapError};
use std::path::Path;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEVELOPER_RESUME: &str = "Senior Python Developer with 5 years of experience in Docker and AWS. \
    Skills: Python, Docker, AWS, Leadership.";

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(SkillGapError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_resume_file_to_analysis() {
    let mut manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    validate_resume_text(&resume, DEFAULT_MIN_TEXT_CHARS).unwrap();
    let result = analyze(&resume, None, Some(&job));

    assert_eq!(result.current_field, "Software Development");
    assert_eq!(result.experience_years, 6.0);
    for skill in ["React", "Python", "Docker", "AWS", "SQL"] {
        assert!(result.skills.iter().any(|s| s == skill), "missing {}", skill);
    }
    assert_eq!(result.role_matches.keys().next().map(String::as_str), Some("Backend Engineer"));
    assert!(!result.ats_feedback.iter().any(|f| f == MISSING_EMAIL));
    assert!(!result.ats_feedback.iter().any(|f| f == MISSING_PHONE));
}

#[tokio::test]
async fn test_markdown_and_text_resumes_agree() {
    let mut manager = InputManager::new();
    let txt = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let md = manager.extract_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();

    let from_txt = analyze(&txt, None, None);
    let from_md = analyze(&md, None, None);
    assert_eq!(from_txt.current_field, from_md.current_field);
    assert_eq!(from_txt.experience_years, from_md.experience_years);
    assert_eq!(from_txt.skills, from_md.skills);
}

#[test]
fn test_developer_scenario() {
    let result = analyze(DEVELOPER_RESUME, None, None);
    assert_eq!(result.current_field, "Software Development");
    assert_eq!(result.experience_years, 5.0);
    for skill in ["Python", "Docker", "AWS"] {
        assert!(result.skills.iter().any(|s| s == skill));
    }
}

#[test]
fn test_short_text_is_rejected_at_boundary_but_core_survives() {
    let text = "hello bob";
    assert!(validate_resume_text(text, DEFAULT_MIN_TEXT_CHARS).is_err());

    let result = analyze(text, None, None);
    assert_eq!(result.experience_years, 2.0);
    assert!(result.ats_feedback.iter().any(|f| f == MISSING_EMAIL));
    assert!(result.ats_feedback.iter().any(|f| f == MISSING_PHONE));
}

#[test]
fn test_job_description_scenario() {
    let jd = "Senior Data Analyst\nRequires SQL, Excel, Python.";
    let tables = AnalyzerTables::standard();

    assert_eq!(extract_role_title(jd), "Senior Data Analyst");
    let jd_skills = extract_job_skills(&tables, jd);
    for skill in ["SQL", "Excel", "Python"] {
        assert!(jd_skills.iter().any(|s| s == skill));
    }

    let result = analyze(DEVELOPER_RESUME, None, Some(jd));
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(
        result.recommendations.iter().filter(|r| r.priority == Priority::High).count(),
        1
    );
    assert_eq!(result.recommendations[0].priority, Priority::High);
}

#[test]
fn test_general_business_scenario() {
    let result = analyze("zzz qqq xxx yyy", None, None);
    assert_eq!(result.current_field, "General Business");
    assert_eq!(
        result.radar_data.labels,
        vec!["Core Skills", "Tools", "Communication", "Leadership", "Strategy"]
    );
    let roles: Vec<&str> = result.role_matches.keys().map(String::as_str).collect();
    assert_eq!(roles, vec!["Business Analyst", "Operations Manager", "Project Manager"]);
}

#[test]
fn test_every_vocabulary_skill_is_detected() {
    let tables = AnalyzerTables::standard();
    for skill in tables.resume_skills.vocabulary() {
        let result = analyze(&format!("I know {}", skill), None, None);
        assert!(
            result.skills.iter().any(|s| s == skill),
            "{} not detected",
            skill
        );
        assert!(result.skills.len() <= 20);
    }
}

#[test]
fn test_analysis_output_is_byte_identical() {
    let first = serde_json::to_string(&analyze(DEVELOPER_RESUME, Some("Tech Lead"), None)).unwrap();
    let second = serde_json::to_string(&analyze(DEVELOPER_RESUME, Some("Tech Lead"), None)).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rule_based_selection_without_key() {
    let config = Config::default();
    assert_eq!(config.analyzer.mode, AnalyzerMode::Auto);

    let analyzer = build_analyzer_with_key(&config, None);
    assert_eq!(analyzer.name(), "rule-based");

    let request = AnalysisRequest::new(DEVELOPER_RESUME);
    assert_eq!(analyzer.analyze(&request).await, analyze(DEVELOPER_RESUME, None, None));
}

#[tokio::test]
async fn test_ai_analyzer_end_to_end() {
    let server = MockServer::start().await;
    let content = json!({
        "skills": ["Python", "Docker", "AWS"],
        "experience_years": 5.0,
        "current_field": "Software Development",
        "role_matches": { "Platform Engineer": 72.5 },
        "skill_gaps": { "Platform Engineer": ["Kubernetes", "Terraform"] },
        "recommendations": [
            { "skill": "Kubernetes", "priority": "High", "resource": "CKA course", "timeframe": "2 months", "learning_tip": "Run a home cluster" }
        ],
        "trending_industries": ["Cloud Computing"],
        "summary": "Cloud-ready backend engineer.",
        "ats_feedback": ["Quantify impact", "Add a skills section", "Use standard headings"]
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": format!("```json\n{}\n```", content) } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.analyzer.mode = AnalyzerMode::Ai;
    config.analyzer.base_url = server.uri();

    let analyzer = build_analyzer_with_key(&config, Some("test-key".to_string()));
    assert_eq!(analyzer.name(), "ai");

    let result = analyzer.analyze(&AnalysisRequest::new(DEVELOPER_RESUME)).await;
    assert_eq!(result.summary, "Cloud-ready backend engineer.");
    assert_eq!(result.role_matches["Platform Engineer"], 72.5);
    assert_eq!(result.radar_data.datasets.len(), 2);

    let report = AnalysisReport::new(result, analyzer.name(), None);
    let markdown = ReportGenerator::new()
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("| Platform Engineer |"));
    assert!(markdown.contains("**Analyzer:** ai"));
}

#[test]
fn test_report_formats_from_analysis() {
    let result = analyze(DEVELOPER_RESUME, None, Some("Backend Engineer\nPython, Kubernetes"));
    let report = AnalysisReport::new(result, "rule-based", Some("resume.txt".to_string()));
    let generator = ReportGenerator::with_options(false, true, false, true, true);

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["current_field"], "Software Development");
    assert_eq!(value["metadata"]["source_file"], "resume.txt");

    let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
    assert!(console.contains("Backend Engineer"));
    assert!(console.contains("Competency Radar"));

    let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
    assert!(html.contains("Backend Engineer"));
}
