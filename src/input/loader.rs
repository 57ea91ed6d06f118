//! JSON record loading for candidates and jobs

use crate::error::{Result, TalentMatcherError};
use crate::model::{Candidate, Job};
use log::info;
use std::fs;
use std::path::Path;

/// Load a candidate list from a JSON file.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let content = read_existing(path)?;
    let candidates: Vec<Candidate> = serde_json::from_str(&content).map_err(|e| {
        TalentMatcherError::InvalidInput(format!(
            "malformed candidate records in {}: {}",
            path.display(),
            e
        ))
    })?;
    info!("loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

/// Load a job list from a JSON file.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    let content = read_existing(path)?;
    let jobs: Vec<Job> = serde_json::from_str(&content).map_err(|e| {
        TalentMatcherError::InvalidInput(format!(
            "malformed job records in {}: {}",
            path.display(),
            e
        ))
    })?;
    info!("loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// Find one candidate by id.
pub fn find_candidate(candidates: &[Candidate], id: i64) -> Result<&Candidate> {
    candidates
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| TalentMatcherError::InvalidInput(format!("unknown candidate id {}", id)))
}

/// Find one job by id.
pub fn find_job(jobs: &[Job], id: i64) -> Result<&Job> {
    jobs.iter()
        .find(|j| j.id == id)
        .ok_or_else(|| TalentMatcherError::InvalidInput(format!("unknown job id {}", id)))
}

/// Select the cohort named by an id list, keeping input order. Ids that
/// match no candidate are skipped, as for any other cohort filter.
pub fn select_cohort(candidates: &[Candidate], ids: &[i64]) -> Vec<Candidate> {
    ids.iter()
        .filter_map(|id| candidates.iter().find(|c| c.id == *id))
        .cloned()
        .collect()
}

fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TalentMatcherError::InvalidInput(format!(
            "file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}
