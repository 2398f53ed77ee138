//! skillforge-matcher: score candidates against job postings from the CLI

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use skillforge_matcher::cli::{parse_output_format, Cli, Commands, ConfigAction};
use skillforge_matcher::config::{Config, OutputFormat};
use skillforge_matcher::embedding::Model2VecEmbedder;
use skillforge_matcher::error::{MatcherError, Result};
use skillforge_matcher::matching::{JobMatchingService, MatchParams, MatchingStrategy};
use skillforge_matcher::model::{CandidateProfile, JobPosting};
use skillforge_matcher::output::{MatchRunReport, ReportGenerator};
use skillforge_matcher::recommend::{
    analyze_market_trends, RecommendationEngine, RecommendationType,
};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            candidate,
            postings,
            strategy,
            max_results,
            min_score,
            output,
            save,
            detailed,
        } => {
            let output_format = parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let strategy = MatchingStrategy::parse(&strategy);

            let candidate = load_candidate(&candidate)?;
            let postings = load_postings(&postings)?;
            info!(
                "Matching candidate '{}' against {} postings ({} strategy)",
                candidate.id,
                postings.len(),
                strategy.name()
            );

            let service = build_service(config).await;

            let mut params = MatchParams::from_config(service.config());
            params.strategy = strategy;
            if let Some(max_results) = max_results {
                params.max_results = max_results;
            }
            if let Some(min_score) = min_score {
                params.min_score_threshold = min_score;
            }

            let spinner = scoring_spinner(postings.len());
            let batch = service.match_jobs_for_user(&candidate, &postings, &params)?;
            spinner.finish_and_clear();

            let report = MatchRunReport::new(&candidate, strategy.name(), batch);
            emit_report(
                &report,
                output_format,
                save,
                detailed,
                service.config().output.color_output,
            )
        }

        Commands::Recommend {
            candidate,
            postings,
            recommendation_type,
            output,
            detailed,
        } => {
            let output_format = parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let recommendation_type = RecommendationType::parse(&recommendation_type);

            let candidate = load_candidate(&candidate)?;
            let postings = load_postings(&postings)?;
            info!(
                "Recommending for candidate '{}' over {} postings ({})",
                candidate.id,
                postings.len(),
                recommendation_type.name()
            );

            let color_output = config.output.color_output;
            let engine = RecommendationEngine::new(build_service(config).await);

            let spinner = scoring_spinner(postings.len());
            let batch =
                engine.get_job_recommendations(&candidate, &postings, recommendation_type)?;
            spinner.finish_and_clear();

            let report = MatchRunReport::new(&candidate, recommendation_type.name(), batch);
            emit_report(&report, output_format, None, detailed, color_output)
        }

        Commands::Trends { postings, output } => {
            let output_format = parse_output_format(&output).map_err(MatcherError::InvalidInput)?;
            let postings = load_postings(&postings)?;
            let trends = analyze_market_trends(&postings);

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trends)?),
                _ => {
                    println!("Market trends across {} postings", trends.postings_analyzed);
                    println!("\nTop skills in demand:");
                    for demand in &trends.top_skills_in_demand {
                        println!("  {:>4}  {}", demand.postings, demand.skill);
                    }
                    println!("\nTop locations:");
                    for demand in &trends.top_locations {
                        println!("  {:>4}  {}", demand.postings, demand.location);
                    }
                    match trends.average_salary {
                        Some(avg) => println!("\nAverage posted salary: {:.0}", avg),
                        None => println!("\nAverage posted salary: not disclosed"),
                    }
                    println!(
                        "Remote-friendly postings: {:.0}%",
                        trends.remote_work_percentage
                    );
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let serialized = toml::to_string_pretty(&config).map_err(|e| {
                    MatcherError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", serialized);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
        },
    }
}

async fn build_service(config: Config) -> JobMatchingService {
    let embedder = Model2VecEmbedder::from_config_or_null(&config).await;
    info!("Embedding provider: {}", embedder.name());
    JobMatchingService::new(config, embedder)
}

fn load_candidate(path: &Path) -> Result<CandidateProfile> {
    let content = std::fs::read_to_string(path)?;
    let candidate: CandidateProfile = serde_json::from_str(&content)
        .map_err(|e| MatcherError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    Ok(candidate)
}

fn load_postings(path: &Path) -> Result<Vec<JobPosting>> {
    let content = std::fs::read_to_string(path)?;
    let postings: Vec<JobPosting> = serde_json::from_str(&content)
        .map_err(|e| MatcherError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    Ok(postings)
}

fn scoring_spinner(posting_count: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Scoring {} postings...", posting_count));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn emit_report(
    report: &MatchRunReport,
    format: OutputFormat,
    save: Option<PathBuf>,
    detailed: bool,
    color_output: bool,
) -> Result<()> {
    let generator = ReportGenerator::new(color_output, detailed);
    println!("{}", generator.format(report, format)?);
    if let Some(path) = save {
        generator.save(report, &path, format)?;
        info!("Report saved to {}", path.display());
    }
    Ok(())
}
