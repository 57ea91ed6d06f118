//! Talent matcher: candidate-to-job matching and workforce analytics CLI

mod cli;
mod config;
mod engine;
mod error;
mod input;
mod model;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use engine::SkillAssessment;
use error::{Result, TalentMatcherError};
use log::{error, info};
use model::{BudgetRange, DistributionQuery, SkillsGapQuery};
use output::{ConsoleFormatter, JsonFormatter};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

fn main() {
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

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

#[derive(Serialize)]
struct AssessedCandidate {
    candidate_id: i64,
    candidate_name: String,
    #[serde(flatten)]
    assessment: SkillAssessment,
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    let console = ConsoleFormatter::new(config.output.color_output, config.output.detailed);

    match command {
        Commands::Assess {
            candidates,
            id,
            output,
        } => {
            let path = resolve_records(candidates, &config.data.candidates_file)?;
            let pool = input::load_candidates(&path)?;

            let selected: Vec<_> = match id {
                Some(id) => vec![input::find_candidate(&pool, id)?.clone()],
                None => pool,
            };

            let assessed: Vec<AssessedCandidate> = selected
                .iter()
                .map(|candidate| AssessedCandidate {
                    candidate_id: candidate.id,
                    candidate_name: candidate.display_name(),
                    assessment: engine::assess_candidate(candidate),
                })
                .collect();

            match output_format(output, &config)? {
                OutputFormat::Json => println!("{}", JsonFormatter.format(&assessed)?),
                OutputFormat::Console => {
                    for (candidate, entry) in selected.iter().zip(&assessed) {
                        print!(
                            "{}",
                            console.format_assessment(&entry.candidate_name, &entry.assessment)
                        );
                        if config.output.detailed {
                            for recommendation in engine::skill_recommendations(candidate, None) {
                                println!("    - {}", recommendation);
                            }
                        }
                    }
                }
            }
        }

        Commands::Match {
            candidates,
            jobs,
            job_id,
            candidate_id,
            output,
        } => {
            let candidates_path = resolve_records(candidates, &config.data.candidates_file)?;
            let jobs_path = resolve_records(jobs, &config.data.jobs_file)?;
            let pool = input::load_candidates(&candidates_path)?;
            let openings = input::load_jobs(&jobs_path)?;
            let job = input::find_job(&openings, job_id)?;

            let pool = match candidate_id {
                Some(id) => vec![input::find_candidate(&pool, id)?.clone()],
                None => pool,
            };
            let ranked = engine::rank_candidates(&pool, job);
            info!("ranked {} candidates against job {}", ranked.len(), job.id);

            match output_format(output, &config)? {
                OutputFormat::Json => println!("{}", JsonFormatter.format(&ranked)?),
                OutputFormat::Console => print!("{}", console.format_matches(&job.title, &ranked)),
            }
        }

        Commands::Distribution {
            candidates,
            skills,
            level,
            department,
            budget_min,
            budget_max,
            location,
            work_type,
            output,
        } => {
            let path = resolve_records(candidates, &config.data.candidates_file)?;
            let pool = input::load_candidates(&path)?;

            let budget_range = match (budget_min, budget_max) {
                (Some(min), Some(max)) if min < max => Some(BudgetRange { min, max }),
                (Some(_), Some(_)) => {
                    return Err(TalentMatcherError::InvalidInput(
                        "budget-min must be below budget-max".to_string(),
                    ))
                }
                (None, None) => None,
                _ => {
                    return Err(TalentMatcherError::InvalidInput(
                        "budget-min and budget-max must be given together".to_string(),
                    ))
                }
            };

            let query = DistributionQuery {
                department,
                required_skills: skills,
                experience_level: level,
                budget_range,
                location,
                work_type,
            };
            let report = engine::analyze_distribution(&pool, &query);

            match output_format(output, &config)? {
                OutputFormat::Json => println!("{}", JsonFormatter.format(&report)?),
                OutputFormat::Console => print!("{}", console.format_distribution(&report)),
            }
        }

        Commands::Gaps {
            candidates,
            ids,
            focus_skills,
            output,
        } => {
            let path = resolve_records(candidates, &config.data.candidates_file)?;
            let pool = input::load_candidates(&path)?;

            let query = SkillsGapQuery {
                candidate_ids: ids.unwrap_or_default(),
                focus_skills,
            };
            let cohort = if query.candidate_ids.is_empty() {
                pool
            } else {
                input::select_cohort(&pool, &query.candidate_ids)
            };
            let report = engine::analyze_skills_gaps(&cohort, query.focus_skills.as_deref());

            match output_format(output, &config)? {
                OutputFormat::Json => println!("{}", JsonFormatter.format(&report)?),
                OutputFormat::Console => print!("{}", console.format_gaps(&report)),
            }
        }

        Commands::Benchmark {
            title,
            level,
            location,
            output,
        } => {
            let benchmark =
                engine::salary_benchmark(&title, location.as_deref(), level.as_deref());

            match output_format(output, &config)? {
                OutputFormat::Json => println!("{}", JsonFormatter.format(&benchmark)?),
                OutputFormat::Console => print!("{}", console.format_benchmark(&benchmark)),
            }
        }

        Commands::Import { csv, out_dir } => {
            cli::validate_file_extension(&csv, &["csv"])
                .map_err(TalentMatcherError::UnsupportedFormat)?;

            let result = input::import_hr_csv(&csv)?;
            let out_dir = out_dir.unwrap_or_else(|| config.data.data_dir.clone());
            std::fs::create_dir_all(&out_dir)?;

            let candidates_path = out_dir.join("candidates.json");
            let jobs_path = out_dir.join("jobs.json");
            std::fs::write(
                &candidates_path,
                serde_json::to_string_pretty(&result.candidates)?,
            )?;
            std::fs::write(&jobs_path, serde_json::to_string_pretty(&result.jobs)?)?;

            println!("Imported {} records:", result.summary.total_records);
            println!(
                "  {} candidates -> {}",
                result.summary.candidates_created,
                candidates_path.display()
            );
            println!(
                "  {} jobs       -> {}",
                result.summary.jobs_created,
                jobs_path.display()
            );
            println!("  {} distinct skills", result.summary.skills_created);
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    TalentMatcherError::Configuration(format!("Failed to render config: {}", e))
                })?;
                print!("{}", rendered);
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// Use the explicit path when given, otherwise fall back to the configured
/// default. Record files are JSON.
fn resolve_records(explicit: Option<PathBuf>, configured: &PathBuf) -> Result<PathBuf> {
    let path = explicit.unwrap_or_else(|| configured.clone());
    cli::validate_file_extension(&path, &["json"])
        .map_err(TalentMatcherError::UnsupportedFormat)?;
    Ok(path)
}

fn output_format(requested: Option<String>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(name) => cli::parse_output_format(&name).map_err(TalentMatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}
