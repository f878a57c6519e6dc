//! CLI interface for the skill-gap analyzer

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Resume formats the analyze command accepts.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

/// Job description formats; no PDF support for these.
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Resume career-fit and skill-gap analyzer")]
#[command(long_about = "Detect skills, estimate experience, match candidate roles, and produce prioritized learning recommendations and ATS feedback from a resume")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        options: AnalysisOptions,
    },

    /// Analyze resume text passed on the command line
    AnalyzeText {
        /// Resume text
        #[arg(long)]
        text: String,

        #[command(flatten)]
        options: AnalysisOptions,
    },

    /// Show which analyzer would run and why
    Status,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Role to evaluate the resume against
    #[arg(short, long)]
    pub target_role: Option<String>,

    /// Path to job description file (TXT, MD)
    #[arg(short, long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(long)]
    pub job_text: Option<String>,

    /// Output format: console, json, markdown, html (defaults to config)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file or directory
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Show gaps for every role and the competency radar
    #[arg(short, long)]
    pub detailed: bool,

    /// Use the rule-based analyzer even if an API key is configured
    #[arg(long)]
    pub no_ai: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), JOB_EXTENSIONS).is_err());
        assert_eq!(
            validate_file_extension(Path::new("resume"), RESUME_EXTENSIONS),
            Err("File has no extension".to_string())
        );
    }

    #[test]
    fn test_analyze_command_parses() {
        let cli = Cli::try_parse_from([
            "skillgap", "analyze", "--resume", "cv.pdf", "--target-role", "Tech Lead", "-o", "json", "--no-ai",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { resume, options } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(options.target_role.as_deref(), Some("Tech Lead"));
                assert_eq!(options.output.as_deref(), Some("json"));
                assert!(options.no_ai);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_job_file_and_text_conflict() {
        let result = Cli::try_parse_from([
            "skillgap", "analyze-text", "--text", "resume", "--job", "jd.txt", "--job-text", "SQL",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["skillgap", "-v", "config", "path"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config { action: Some(ConfigAction::Path) }));
    }
}
