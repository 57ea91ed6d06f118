//! Scoring and matching engine
//!
//! Pure, synchronous computation over caller-supplied records: per-skill
//! scoring, candidate-to-job matching, pool distribution analysis, cohort
//! skills gap detection and salary benchmark lookup. Nothing here holds
//! state between calls.

pub mod assessment;
pub mod benchmarks;
pub mod distribution;
pub mod gaps;
pub mod matcher;

pub use assessment::{
    assess_candidate, assess_skills, overall_score, skill_recommendations, SkillAssessment,
};
pub use benchmarks::{salary_benchmark, SalaryBenchmark};
pub use distribution::{analyze_distribution, CandidateMatch, DistributionReport};
pub use gaps::{analyze_skills_gaps, SkillsGapReport, GAP_THRESHOLD};
pub use matcher::{match_candidate_to_job, rank_candidates, JobMatch, RankedCandidate};

/// Minimum match score for a candidate to count as matched in a
/// distribution analysis.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Round to three decimal places, the precision of all published scores.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to two decimal places, used for salary figures.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Years of experience implied by a named seniority level. Unknown levels
/// fall back to the Mid band.
pub(crate) fn experience_years_for_level(level: &str) -> u32 {
    match level {
        "Junior" => 2,
        "Mid" => 5,
        "Senior" => 8,
        "Lead" => 12,
        _ => 5,
    }
}
