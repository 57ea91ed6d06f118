//! Workforce distribution analysis over a candidate pool
//!
//! Matches every available candidate against a synthetic job built from the
//! query, keeps those at or above the match threshold, ranks them and
//! derives a pool quality score plus textual recommendations.

use crate::engine::{
    experience_years_for_level, match_candidate_to_job, MATCH_THRESHOLD,
};
use crate::model::{BudgetRange, Candidate, DistributionQuery, Job};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_MIN_SALARY: f64 = 50000.0;
const DEFAULT_MAX_SALARY: f64 = 100000.0;

// Diversity bonus: 0.1 per matched candidate, capped at 0.2.
const DIVERSITY_BONUS_CAP: f64 = 0.2;

/// One matched candidate in a distribution report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub candidate_id: i64,
    pub candidate_name: String,
    pub match_score: f64,
    pub skill_matches: BTreeMap<String, f64>,
    pub salary_fit: bool,
    pub location_fit: bool,
    pub experience_fit: bool,
}

/// Result of a workforce distribution analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport {
    pub department: String,
    pub total_candidates: usize,
    pub matched_candidates: Vec<CandidateMatch>,
    pub distribution_score: f64,
    pub recommendations: Vec<String>,
    pub analysis_date: DateTime<Utc>,
}

/// Analyze a candidate pool against a distribution query.
pub fn analyze_distribution(candidates: &[Candidate], query: &DistributionQuery) -> DistributionReport {
    let department = query
        .department
        .clone()
        .unwrap_or_else(|| "General".to_string());

    let available: Vec<&Candidate> = candidates.iter().filter(|c| c.is_available).collect();

    if available.is_empty() {
        return DistributionReport {
            department,
            total_candidates: 0,
            matched_candidates: Vec::new(),
            distribution_score: 0.0,
            recommendations: vec!["No available candidates found".to_string()],
            analysis_date: Utc::now(),
        };
    }

    let target_job = build_job_from_query(query);
    debug!(
        "matching {} candidates against synthetic job ({} required skills)",
        available.len(),
        target_job.required_skills.len()
    );

    let mut matched_candidates = Vec::new();
    for candidate in &available {
        let result = match_candidate_to_job(candidate, &target_job);
        if result.match_score < MATCH_THRESHOLD {
            continue;
        }

        matched_candidates.push(CandidateMatch {
            candidate_id: candidate.id,
            candidate_name: candidate.display_name(),
            match_score: result.match_score,
            skill_matches: result.skill_matches,
            salary_fit: check_salary_fit(candidate, query.budget_range),
            location_fit: check_location_fit(candidate, query.location.as_deref()),
            experience_fit: check_experience_fit(candidate, &query.experience_level),
        });
    }

    // Stable: equal scores keep their pool order.
    matched_candidates.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    let distribution_score = calculate_distribution_score(&matched_candidates);
    let recommendations = generate_recommendations(&matched_candidates);

    DistributionReport {
        department,
        total_candidates: available.len(),
        matched_candidates,
        distribution_score,
        recommendations,
        analysis_date: Utc::now(),
    }
}

/// Materialize the query as a job record so the matcher applies unchanged.
fn build_job_from_query(query: &DistributionQuery) -> Job {
    let (min_salary, max_salary) = match query.budget_range {
        Some(range) => (range.min, range.max),
        None => (DEFAULT_MIN_SALARY, DEFAULT_MAX_SALARY),
    };

    Job {
        id: 0,
        title: format!("{} opening", query.experience_level),
        department: query.department.clone().unwrap_or_else(|| "General".to_string()),
        level: query.experience_level.clone(),
        min_salary,
        max_salary,
        currency: "USD".to_string(),
        required_skills: query.required_skills.clone(),
        preferred_skills: Vec::new(),
        experience_years: experience_years_for_level(&query.experience_level),
        education_level: "Bachelor".to_string(),
        description: String::new(),
        location: query
            .location
            .clone()
            .unwrap_or_else(|| "Remote".to_string()),
        work_type: query
            .work_type
            .clone()
            .unwrap_or_else(|| "Full-time".to_string()),
        is_active: true,
    }
}

/// Budget check. Permissive when either side is silent.
fn check_salary_fit(candidate: &Candidate, budget_range: Option<BudgetRange>) -> bool {
    match (budget_range, candidate.expected_salary) {
        (Some(range), Some(expected)) => range.min <= expected && expected <= range.max,
        _ => true,
    }
}

/// Location preference check. Permissive when the query names no location
/// or the candidate states no preference.
fn check_location_fit(candidate: &Candidate, required_location: Option<&str>) -> bool {
    let Some(required) = required_location else {
        return true;
    };
    match &candidate.preferred_locations {
        Some(preferred) if !preferred.is_empty() => preferred.iter().any(|l| l == required),
        _ => true,
    }
}

/// Banded experience check per seniority level. Juniors may not be far
/// above the target, mid-levels sit in a window, seniors and leads only
/// need a floor.
fn check_experience_fit(candidate: &Candidate, required_level: &str) -> bool {
    let required_years = f64::from(experience_years_for_level(required_level));
    let years = candidate.years_experience;

    match required_level {
        "Junior" => years <= required_years + 2.0,
        "Mid" => required_years - 2.0 <= years && years <= required_years + 3.0,
        "Senior" => years >= required_years - 2.0,
        _ => years >= required_years - 3.0,
    }
}

/// Pool quality: average match score plus a small bonus for candidate
/// count, capped at 1.0. Zero when nothing matched.
fn calculate_distribution_score(matched: &[CandidateMatch]) -> f64 {
    if matched.is_empty() {
        return 0.0;
    }

    let avg_match_score =
        matched.iter().map(|c| c.match_score).sum::<f64>() / matched.len() as f64;
    let diversity_bonus = (matched.len() as f64 / 10.0).min(DIVERSITY_BONUS_CAP);

    (avg_match_score + diversity_bonus).min(1.0)
}

/// Deterministic, ordered advice derived from the matched list.
fn generate_recommendations(matched: &[CandidateMatch]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if matched.is_empty() {
        recommendations
            .push("No suitable candidates found. Consider expanding search criteria.".to_string());
        return recommendations;
    }

    let top = &matched[0];
    recommendations.push(format!(
        "Top candidate: {} (Match: {:.1}%)",
        top.candidate_name,
        top.match_score * 100.0
    ));

    if matched.len() >= 3 {
        recommendations.push(format!(
            "Found {} qualified candidates for good team diversity",
            matched.len()
        ));
    } else if matched.len() == 1 {
        recommendations.push(
            "Only one candidate found. Consider expanding search or adjusting requirements."
                .to_string(),
        );
    }

    // First candidate in the top 3 with an uncovered required skill wins;
    // further candidates are not scanned.
    for candidate in matched.iter().take(3) {
        let missing: Vec<&str> = candidate
            .skill_matches
            .iter()
            .filter(|(_, score)| **score == 0.0)
            .map(|(skill, _)| skill.as_str())
            .collect();
        if !missing.is_empty() {
            let listed: Vec<&str> = missing.into_iter().take(3).collect();
            recommendations.push(format!(
                "Consider training programs for: {}",
                listed.join(", ")
            ));
            break;
        }
    }

    recommendations
}
