//! Candidate-to-job matching
//!
//! Blends required-skill coverage, experience proximity and a salary
//! alignment term into one match score. The numeric salary term here is a
//! scoring signal only; the boolean salary/location/experience fit flags
//! reported alongside matches are computed independently by the
//! distribution analyzer.

use crate::engine::{assess_skills, round3};
use crate::model::{Candidate, Job};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Match score blend: skills 60%, experience 30%, salary 10%.
const SKILL_MATCH_WEIGHT: f64 = 0.6;
const EXPERIENCE_MATCH_WEIGHT: f64 = 0.3;
const SALARY_FIT_WEIGHT: f64 = 0.1;

const UNDER_ASKING_PENALTY: f64 = 0.8;
const OVER_ASKING_PENALTY: f64 = 0.6;
const OVER_ASKING_STRETCH: f64 = 1.2;

/// Result of matching one candidate against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    /// Combined match score in [0, 1], rounded to 3 decimals.
    pub match_score: f64,
    /// One entry per required skill of the job; 0.0 when the candidate
    /// lacks the skill.
    pub skill_matches: BTreeMap<String, f64>,
}

/// Match a candidate against a job.
pub fn match_candidate_to_job(candidate: &Candidate, job: &Job) -> JobMatch {
    let skill_scores = assess_skills(
        &candidate.skills,
        candidate.years_experience,
        &candidate.education_level,
    );

    let skill_matches: BTreeMap<String, f64> = job
        .required_skills
        .iter()
        .map(|skill| {
            let score = skill_scores.get(skill).copied().unwrap_or(0.0);
            (skill.clone(), score)
        })
        .collect();

    let skill_match_score = if skill_matches.is_empty() {
        0.0
    } else {
        skill_matches.values().sum::<f64>() / skill_matches.len() as f64
    };

    let experience_match = experience_match(candidate.years_experience, job.experience_years);
    let salary_fit = salary_fit(candidate.expected_salary, job.min_salary, job.max_salary);

    let match_score = round3(
        skill_match_score * SKILL_MATCH_WEIGHT
            + experience_match * EXPERIENCE_MATCH_WEIGHT
            + salary_fit * SALARY_FIT_WEIGHT,
    );

    JobMatch {
        match_score,
        skill_matches,
    }
}

/// A pool candidate ranked against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: i64,
    pub candidate_name: String,
    #[serde(flatten)]
    pub result: JobMatch,
}

/// Match every candidate in a pool against a job, ranked descending by
/// match score. Equal scores keep pool order.
pub fn rank_candidates(candidates: &[Candidate], job: &Job) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            candidate_id: candidate.id,
            candidate_name: candidate.display_name(),
            result: match_candidate_to_job(candidate, job),
        })
        .collect();
    ranked.sort_by(|a, b| b.result.match_score.total_cmp(&a.result.match_score));
    ranked
}

/// Proximity of candidate experience to the job's target years, clamped to
/// [0, 1]. A zero-year job target still divides by 1.
fn experience_match(candidate_years: f64, job_years: u32) -> f64 {
    let divisor = f64::from(job_years.max(1));
    let raw = 1.0 - (candidate_years - f64::from(job_years)).abs() / divisor;
    raw.clamp(0.0, 1.0)
}

/// Numeric salary alignment term. Neutral (1.0) when the candidate has no
/// stated expectation; under-asking is penalized mildly, asking more than
/// 20% over the band ceiling more strongly.
fn salary_fit(expected_salary: Option<f64>, min_salary: f64, max_salary: f64) -> f64 {
    match expected_salary {
        Some(expected) if expected < min_salary => UNDER_ASKING_PENALTY,
        Some(expected) if expected > max_salary * OVER_ASKING_STRETCH => OVER_ASKING_PENALTY,
        _ => 1.0,
    }
}
