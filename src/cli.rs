//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillforge-matcher")]
#[command(about = "Job matching and recommendation engine")]
#[command(
    long_about = "Score a candidate profile against job postings using weighted skill, \
experience, location, salary, and semantic signals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a candidate against a set of job postings
    Match {
        /// Path to the candidate profile (JSON)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Path to the job postings file (JSON array)
        #[arg(short, long)]
        postings: PathBuf,

        /// Matching strategy: skill_based, semantic, experience_weighted, hybrid
        #[arg(short, long, default_value = "hybrid")]
        strategy: String,

        /// Maximum number of results
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Minimum overall score to include a result
        #[arg(long)]
        min_score: Option<f32>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the report to a file (format inferred from extension)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Show sub-scores, gaps, and recommendations per result
        #[arg(short, long)]
        detailed: bool,
    },

    /// Recommend postings for a candidate by goal
    Recommend {
        /// Path to the candidate profile (JSON)
        #[arg(short, long)]
        candidate: PathBuf,

        /// Path to the job postings file (JSON array)
        #[arg(short, long)]
        postings: PathBuf,

        /// Goal: best_matches, skill_growth, salary_boost, career_progression
        #[arg(short = 't', long = "type", default_value = "best_matches")]
        recommendation_type: String,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show sub-scores, gaps, and recommendations per result
        #[arg(short, long)]
        detailed: bool,
    },

    /// Aggregate market trends over a set of postings
    Trends {
        /// Path to the job postings file (JSON array)
        #[arg(short, long)]
        postings: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
