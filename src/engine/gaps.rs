//! Cohort-wide skills gap analysis
//!
//! Scores every candidate in a cohort, builds a candidate × skill matrix
//! and flags the skills whose cohort average falls below the gap threshold.

use crate::engine::assess_skills;
use chrono::{DateTime, Utc};
use crate::model::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Cohort-average score below which a skill counts as a gap.
pub const GAP_THRESHOLD: f64 = 0.6;

const TOP_SKILLS_LIMIT: usize = 10;
const RECOMMENDATIONS_PER_CANDIDATE: usize = 3;

/// Result of a skills gap analysis over a cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsGapReport {
    /// Candidate display name -> skill -> score.
    pub candidate_skills_matrix: BTreeMap<String, BTreeMap<String, f64>>,
    /// Gapped skill -> candidates scoring below the threshold on it.
    pub skill_gaps: BTreeMap<String, Vec<String>>,
    /// Up to 10 skills by descending cohort average.
    pub top_skills: Vec<String>,
    /// Candidate display name -> up to 3 improvement suggestions.
    pub skill_recommendations: BTreeMap<String, Vec<String>>,
    pub analysis_date: DateTime<Utc>,
}

/// Analyze skill gaps across a cohort, optionally restricted to a focus
/// skill set. An empty cohort produces an all-empty report.
pub fn analyze_skills_gaps(
    cohort: &[Candidate],
    focus_skills: Option<&[String]>,
) -> SkillsGapReport {
    if cohort.is_empty() {
        return SkillsGapReport {
            candidate_skills_matrix: BTreeMap::new(),
            skill_gaps: BTreeMap::new(),
            top_skills: Vec::new(),
            skill_recommendations: BTreeMap::new(),
            analysis_date: Utc::now(),
        };
    }

    let mut matrix: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    let mut all_skills: BTreeSet<String> = BTreeSet::new();

    for candidate in cohort {
        let scores = assess_skills(
            &candidate.skills,
            candidate.years_experience,
            &candidate.education_level,
        );
        all_skills.extend(scores.keys().cloned());
        matrix.insert(candidate.display_name(), scores);
    }

    if let Some(focus) = focus_skills {
        let focus: BTreeSet<&str> = focus.iter().map(String::as_str).collect();
        all_skills.retain(|skill| focus.contains(skill.as_str()));
    }

    let cohort_averages: BTreeMap<&str, f64> = all_skills
        .iter()
        .map(|skill| {
            let sum: f64 = matrix
                .values()
                .map(|scores| scores.get(skill).copied().unwrap_or(0.0))
                .sum();
            (skill.as_str(), sum / matrix.len() as f64)
        })
        .collect();

    let mut skill_gaps = BTreeMap::new();
    for (skill, &average) in &cohort_averages {
        if average < GAP_THRESHOLD {
            let lagging: Vec<String> = matrix
                .iter()
                .filter(|(_, scores)| scores.get(*skill).copied().unwrap_or(0.0) < GAP_THRESHOLD)
                .map(|(name, _)| name.clone())
                .collect();
            skill_gaps.insert((*skill).to_string(), lagging);
        }
    }

    let mut ranked: Vec<(&str, f64)> = cohort_averages
        .iter()
        .map(|(skill, avg)| (*skill, *avg))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let top_skills: Vec<String> = ranked
        .into_iter()
        .take(TOP_SKILLS_LIMIT)
        .map(|(skill, _)| skill.to_string())
        .collect();

    let mut skill_recommendations = BTreeMap::new();
    for (name, scores) in &matrix {
        let recommendations: Vec<String> = all_skills
            .iter()
            .filter(|skill| scores.get(*skill).copied().unwrap_or(0.0) < GAP_THRESHOLD)
            .take(RECOMMENDATIONS_PER_CANDIDATE)
            .map(|skill| format!("Improve {} skills", skill))
            .collect();
        skill_recommendations.insert(name.clone(), recommendations);
    }

    SkillsGapReport {
        candidate_skills_matrix: matrix,
        skill_gaps,
        top_skills,
        skill_recommendations,
        analysis_date: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, skills: &[(&str, u8)], years: f64, education: &str) -> Candidate {
        let (first, last) = name.split_once(' ').unwrap();
        Candidate {
            id: 0,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: None,
            current_position: None,
            current_company: None,
            years_experience: years,
            education_level: education.to_string(),
            skills: skills
                .iter()
                .map(|(name, p)| (name.to_string(), *p))
                .collect(),
            skill_scores: None,
            overall_score: None,
            expected_salary: None,
            salary_currency: "USD".to_string(),
            preferred_locations: None,
            preferred_work_type: None,
            is_available: true,
        }
    }

    #[test]
    fn empty_cohort_produces_empty_report() {
        let report = analyze_skills_gaps(&[], None);
        assert!(report.candidate_skills_matrix.is_empty());
        assert!(report.skill_gaps.is_empty());
        assert!(report.top_skills.is_empty());
        assert!(report.skill_recommendations.is_empty());
    }

    #[test]
    fn strong_skills_never_appear_as_gaps() {
        let cohort = vec![
            candidate("Ada Lovelace", &[("Rust", 10), ("Excel", 2)], 10.0, "PhD"),
            candidate("Grace Hopper", &[("Rust", 9), ("Excel", 3)], 10.0, "PhD"),
        ];
        let report = analyze_skills_gaps(&cohort, None);

        // Rust cohort mean is 1.0 and 1.0 -> no gap; Excel lags.
        assert!(!report.skill_gaps.contains_key("Rust"));
        assert!(report.skill_gaps.contains_key("Excel"));
        assert_eq!(
            report.skill_gaps["Excel"],
            vec!["Ada Lovelace".to_string(), "Grace Hopper".to_string()]
        );
    }

    #[test]
    fn gap_lists_only_candidates_below_threshold() {
        let cohort = vec![
            candidate("Ada Lovelace", &[("SQL", 9)], 10.0, "PhD"),
            candidate("New Grad", &[("SQL", 2)], 0.0, "High School"),
        ];
        let report = analyze_skills_gaps(&cohort, None);

        // Cohort mean (1.0 + 0.0) / 2 = 0.5 < 0.6, only the grad lags.
        assert_eq!(report.skill_gaps["SQL"], vec!["New Grad".to_string()]);
    }

    #[test]
    fn focus_skills_restrict_the_universe() {
        let cohort = vec![candidate(
            "Ada Lovelace",
            &[("Rust", 2), ("SQL", 2), ("Go", 2)],
            1.0,
            "High School",
        )];
        let focus = vec!["Rust".to_string(), "SQL".to_string()];
        let report = analyze_skills_gaps(&cohort, Some(&focus));

        assert!(report.skill_gaps.contains_key("Rust"));
        assert!(report.skill_gaps.contains_key("SQL"));
        assert!(!report.skill_gaps.contains_key("Go"));
        assert_eq!(report.top_skills.len(), 2);
    }

    #[test]
    fn top_skills_are_descending_and_capped() {
        let skills: Vec<(String, u8)> = (1u8..=12)
            .map(|i| (format!("Skill{:02}", i), i.min(10)))
            .collect();
        let named: Vec<(&str, u8)> = skills.iter().map(|(n, p)| (n.as_str(), *p)).collect();
        let cohort = vec![candidate("Ada Lovelace", &named, 10.0, "Bachelor")];
        let report = analyze_skills_gaps(&cohort, None);

        assert_eq!(report.top_skills.len(), 10);
        // Highest-proficiency skills lead the ranking.
        assert_eq!(report.top_skills[0], "Skill10");
    }

    #[test]
    fn recommendations_truncate_to_three() {
        let cohort = vec![candidate(
            "New Grad",
            &[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1)],
            0.0,
            "High School",
        )];
        let report = analyze_skills_gaps(&cohort, None);

        let recs = &report.skill_recommendations["New Grad"];
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], "Improve A skills");
    }
}
