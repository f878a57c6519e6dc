//! skillgap: resume career-fit and skill-gap analyzer

use clap::Parser;
use log::{error, info};
use skillgap_analyzer::cli::{
    self, AnalysisOptions, Cli, Commands, ConfigAction, JOB_EXTENSIONS, RESUME_EXTENSIONS,
};
use skillgap_analyzer::config::{AnalyzerMode, Config};
use skillgap_analyzer::input::{validate_resume_text, InputManager};
use skillgap_analyzer::output::{save_report_to_file, suggest_filename, AnalysisReport, ReportGenerator};
use skillgap_analyzer::{build_analyzer, AnalysisRequest, Result, SkillGapError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze { resume, options } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);

            println!("📄 Processing resume: {}", resume.display());
            let text = input_manager.extract_text(&resume).await?;
            let job_description = load_job_description(&mut input_manager, &options).await?;

            let source = resume.to_string_lossy().to_string();
            run_analysis(text, Some(source), job_description, &options, config).await
        }

        Commands::AnalyzeText { text, options } => {
            let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);
            let job_description = load_job_description(&mut input_manager, &options).await?;
            run_analysis(text, None, job_description, &options, config).await
        }

        Commands::Status => {
            let key_present = config.api_key().is_some();
            let active = match (config.analyzer.mode, key_present) {
                (AnalyzerMode::RuleBased, _) | (_, false) => "rule-based",
                (_, true) => "ai",
            };

            println!("🔎 skillgap v{}", env!("CARGO_PKG_VERSION"));
            println!("Analyzer mode: {}", config.analyzer.mode);
            println!(
                "API key ({}): {}",
                config.analyzer.api_key_env,
                if key_present { "✅ configured" } else { "❌ not set" }
            );
            println!("Model: {} @ {}", config.analyzer.model, config.analyzer.base_url);
            println!("Active analyzer: {}", active);
            println!("Config file: {}", config_path.display());
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| SkillGapError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

async fn load_job_description(
    input_manager: &mut InputManager,
    options: &AnalysisOptions,
) -> Result<Option<String>> {
    match (&options.job, &options.job_text) {
        (Some(path), _) => {
            cli::validate_file_extension(path, JOB_EXTENSIONS)
                .map_err(|e| SkillGapError::InvalidInput(format!("Job description file: {}", e)))?;
            println!("💼 Processing job description: {}", path.display());
            Ok(Some(input_manager.extract_text(path).await?))
        }
        (None, Some(text)) => Ok(Some(text.clone())),
        (None, None) => Ok(None),
    }
}

async fn run_analysis(
    text: String,
    source: Option<String>,
    job_description: Option<String>,
    options: &AnalysisOptions,
    mut config: Config,
) -> Result<()> {
    validate_resume_text(&text, config.input.min_text_chars)?;

    let format = match &options.output {
        Some(format) => cli::parse_output_format(format).map_err(SkillGapError::InvalidInput)?,
        None => config.output.format,
    };

    if options.no_ai {
        config.analyzer.mode = AnalyzerMode::RuleBased;
    }

    let analyzer = build_analyzer(&config);
    info!("Analyzing resume with the {} analyzer", analyzer.name());

    let request = AnalysisRequest::new(text)
        .with_target_role(options.target_role.clone())
        .with_job_description(job_description);
    let result = analyzer.analyze(&request).await;
    let report = AnalysisReport::new(result, analyzer.name(), source);

    let generator = ReportGenerator::with_options(
        config.output.color_output && options.save.is_none(),
        options.detailed || config.output.detailed,
        config.output.pretty_json,
        true,
        true,
    );
    let content = generator.generate_report(&report, &format)?;

    match &options.save {
        Some(path) => {
            let target = resolve_save_path(path, &format, report.metadata.source_file.as_deref());
            save_report_to_file(&content, &target)?;
            println!("💾 Report saved to {}", target.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// A directory gets a generated, timestamped file name inside it.
fn resolve_save_path(
    path: &Path,
    format: &skillgap_analyzer::config::OutputFormat,
    source: Option<&str>,
) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, source.unwrap_or("resume"), true))
    } else {
        path.to_path_buf()
    }
}
