//! CLI interface for the talent matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "talent-matcher")]
#[command(about = "Candidate-to-job matching and workforce analytics")]
#[command(
    long_about = "Score candidates, match them against job openings, analyze workforce distribution and cohort skill gaps, and look up salary benchmarks"
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
    /// Assess candidate skill and overall scores
    Assess {
        /// Path to candidate records (JSON); defaults to the configured file
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Assess a single candidate by id instead of the whole pool
        #[arg(short, long)]
        id: Option<i64>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Match candidates against a job opening
    Match {
        /// Path to candidate records (JSON); defaults to the configured file
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Path to job records (JSON); defaults to the configured file
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Job to match against
        #[arg(long)]
        job_id: i64,

        /// Match only this candidate instead of ranking the pool
        #[arg(long)]
        candidate_id: Option<i64>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Analyze workforce distribution for a role query
    Distribution {
        /// Path to candidate records (JSON); defaults to the configured file
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Required skills, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Experience level: Junior, Mid, Senior, Lead
        #[arg(short, long)]
        level: String,

        /// Department label for the report
        #[arg(short, long)]
        department: Option<String>,

        /// Budget floor (requires --budget-max)
        #[arg(long)]
        budget_min: Option<f64>,

        /// Budget ceiling (requires --budget-min)
        #[arg(long)]
        budget_max: Option<f64>,

        /// Required location
        #[arg(long)]
        location: Option<String>,

        /// Work type: Full-time, Part-time, Contract, Remote
        #[arg(long)]
        work_type: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Analyze skill gaps across a candidate cohort
    Gaps {
        /// Path to candidate records (JSON); defaults to the configured file
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Candidate ids forming the cohort, comma separated; defaults to all
        #[arg(short, long, value_delimiter = ',')]
        ids: Option<Vec<i64>>,

        /// Restrict the analysis to these skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        focus_skills: Option<Vec<String>>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Look up a salary benchmark
    Benchmark {
        /// Job title
        #[arg(short, long)]
        title: String,

        /// Experience level: Junior, Mid, Senior, Lead
        #[arg(short, long)]
        level: Option<String>,

        /// Market location
        #[arg(long)]
        location: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import an HR attrition CSV into candidate and job records
    Import {
        /// Path to the CSV file
        #[arg(long)]
        csv: PathBuf,

        /// Directory to write candidates.json and jobs.json into;
        /// defaults to the configured data directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
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

/// Validate that a file has one of the allowed extensions.
pub fn validate_file_extension(path: &Path, allowed: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if allowed.contains(&ext.to_lowercase().as_str()) => Ok(()),
        Some(ext) => Err(format!(
            "unsupported extension '{}', expected one of: {}",
            ext,
            allowed.join(", ")
        )),
        None => Err(format!(
            "file has no extension, expected one of: {}",
            allowed.join(", ")
        )),
    }
}

/// Parse an output format name.
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "unknown output format '{}', expected console or json",
            other
        )),
    }
}
