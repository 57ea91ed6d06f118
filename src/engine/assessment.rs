//! Skill and overall candidate scoring
//!
//! Converts self-reported proficiency ratings into normalized per-skill
//! scores adjusted for experience and education, and folds them into a
//! single candidate quality score. All functions are pure; callers decide
//! whether to persist the results via [`SkillAssessment::apply_to`].

use crate::engine::round3;
use crate::model::{Candidate, Job};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Overall score blend: skills 50%, experience 30%, education 20%.
const SKILL_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.3;
const EDUCATION_WEIGHT: f64 = 0.2;

/// Derived scores for one candidate, ready to be written back onto the
/// record by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub skill_scores: BTreeMap<String, f64>,
    pub overall_score: f64,
}

impl SkillAssessment {
    /// Write the derived scores onto a candidate record. This is the only
    /// mutation the engine ever asks for, and it is the caller's choice.
    pub fn apply_to(&self, candidate: &mut Candidate) {
        candidate.skill_scores = Some(self.skill_scores.clone());
        candidate.overall_score = Some(self.overall_score);
    }
}

/// Score every skill of a candidate.
///
/// For proficiency `p` (1-10): `min(p/10 * min(years/10, 1.5) + education
/// bonus, 1.0)`. The output has the same key set as the input; an unknown
/// education label simply contributes no bonus.
pub fn assess_skills(
    skills: &BTreeMap<String, u8>,
    years_experience: f64,
    education_level: &str,
) -> BTreeMap<String, f64> {
    let experience_multiplier = (years_experience / 10.0).min(1.5);
    let education_bonus = education_bonus(education_level);

    skills
        .iter()
        .map(|(name, &proficiency)| {
            let base = f64::from(proficiency) / 10.0;
            let score = (base * experience_multiplier + education_bonus).min(1.0);
            (name.clone(), score)
        })
        .collect()
}

/// Overall candidate quality score in [0, 1], rounded to 3 decimals.
///
/// A candidate with no scored skills is exactly 0.0.
pub fn overall_score(
    skill_scores: &BTreeMap<String, f64>,
    years_experience: f64,
    education_level: &str,
) -> f64 {
    if skill_scores.is_empty() {
        return 0.0;
    }

    let avg_skill = skill_scores.values().sum::<f64>() / skill_scores.len() as f64;
    let experience_score = (years_experience / 15.0).min(1.0);
    let education_score = education_score(education_level);

    round3(
        avg_skill * SKILL_WEIGHT
            + experience_score * EXPERIENCE_WEIGHT
            + education_score * EDUCATION_WEIGHT,
    )
}

/// Run both scorers over a candidate record.
pub fn assess_candidate(candidate: &Candidate) -> SkillAssessment {
    let skill_scores = assess_skills(
        &candidate.skills,
        candidate.years_experience,
        &candidate.education_level,
    );
    let overall = overall_score(
        &skill_scores,
        candidate.years_experience,
        &candidate.education_level,
    );
    SkillAssessment {
        skill_scores,
        overall_score: overall,
    }
}

/// Skill improvement suggestions for one candidate, optionally aimed at a
/// target job. At most 5 lines: missing required skills first, then general
/// advice for the candidate's experience tier.
pub fn skill_recommendations(candidate: &Candidate, target_job: Option<&Job>) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(job) = target_job {
        for skill in &job.required_skills {
            if !candidate.skills.contains_key(skill) {
                recommendations.push(format!("Learn {} for {} position", skill, job.title));
            }
        }
    }

    if candidate.years_experience < 2.0 {
        recommendations.extend([
            "Focus on building core technical skills".to_string(),
            "Develop soft skills like communication and teamwork".to_string(),
            "Gain hands-on project experience".to_string(),
        ]);
    } else if candidate.years_experience < 5.0 {
        recommendations.extend([
            "Develop leadership skills".to_string(),
            "Specialize in a specific domain".to_string(),
            "Build mentoring capabilities".to_string(),
        ]);
    } else {
        recommendations.extend([
            "Focus on strategic thinking".to_string(),
            "Develop executive presence".to_string(),
            "Build industry expertise".to_string(),
        ]);
    }

    recommendations.truncate(5);
    recommendations
}

/// Bonus applied on top of each skill score for formal education.
fn education_bonus(education_level: &str) -> f64 {
    match education_level {
        "High School" => 0.0,
        "Associate" => 0.05,
        "Bachelor" => 0.1,
        "Master" => 0.15,
        "PhD" => 0.2,
        "MBA" => 0.15,
        "Certificate" => 0.05,
        _ => 0.0,
    }
}

/// Education component of the overall score. Unknown labels score neutral.
fn education_score(education_level: &str) -> f64 {
    match education_level {
        "High School" => 0.3,
        "Associate" => 0.5,
        "Bachelor" => 0.7,
        "Master" => 0.85,
        "PhD" => 1.0,
        "MBA" => 0.9,
        "Certificate" => 0.6,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
        entries
            .iter()
            .map(|(name, p)| (name.to_string(), *p))
            .collect()
    }

    fn candidate(skills: BTreeMap<String, u8>, years: f64, education: &str) -> Candidate {
        Candidate {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            current_position: None,
            current_company: None,
            years_experience: years,
            education_level: education.to_string(),
            skills,
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
    fn skill_scores_stay_in_unit_interval() {
        for proficiency in 1..=10u8 {
            for years in [0.0, 3.0, 10.0, 40.0] {
                for education in ["High School", "PhD", "Bootcamp"] {
                    let scores =
                        assess_skills(&skills(&[("Rust", proficiency)]), years, education);
                    let score = scores["Rust"];
                    assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
                }
            }
        }
    }

    #[test]
    fn expert_with_phd_caps_at_one() {
        let scores = assess_skills(&skills(&[("Python", 10)]), 10.0, "PhD");
        // 1.0 * 1.0 + 0.2 capped at 1.0
        assert_eq!(scores["Python"], 1.0);
    }

    #[test]
    fn unknown_education_gets_no_bonus() {
        let with = assess_skills(&skills(&[("SQL", 5)]), 10.0, "Bachelor");
        let without = assess_skills(&skills(&[("SQL", 5)]), 10.0, "Bootcamp");
        assert!(with["SQL"] > without["SQL"]);
        assert_eq!(without["SQL"], 0.5);
    }

    #[test]
    fn output_preserves_key_set() {
        let input = skills(&[("Rust", 7), ("SQL", 4), ("Kubernetes", 9)]);
        let scores = assess_skills(&input, 5.0, "Master");
        let keys: Vec<&String> = scores.keys().collect();
        let expected: Vec<&String> = input.keys().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn empty_skills_score_zero_overall() {
        for (years, education) in [(0.0, "High School"), (20.0, "PhD"), (7.5, "Whatever")] {
            assert_eq!(overall_score(&BTreeMap::new(), years, education), 0.0);
        }
    }

    #[test]
    fn worked_example_phd_python() {
        let cand = candidate(skills(&[("Python", 10)]), 10.0, "PhD");
        let assessment = assess_candidate(&cand);
        assert_eq!(assessment.skill_scores["Python"], 1.0);
        // 0.5*1.0 + 0.3*(10/15) + 0.2*1.0 = 0.9
        assert_eq!(assessment.overall_score, 0.9);
    }

    #[test]
    fn overall_is_rounded_to_three_decimals() {
        let cand = candidate(skills(&[("Rust", 7), ("Go", 3)]), 4.0, "Associate");
        let assessment = assess_candidate(&cand);
        let rescaled = assessment.overall_score * 1000.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&assessment.overall_score));
    }

    #[test]
    fn apply_to_writes_back_scores() {
        let mut cand = candidate(skills(&[("Rust", 8)]), 6.0, "Bachelor");
        let assessment = assess_candidate(&cand);
        assessment.apply_to(&mut cand);
        assert_eq!(cand.skill_scores.as_ref().unwrap()["Rust"], assessment.skill_scores["Rust"]);
        assert_eq!(cand.overall_score, Some(assessment.overall_score));
    }

    #[test]
    fn recommendations_cap_at_five_and_lead_with_missing_skills() {
        let cand = candidate(skills(&[("Sales", 6)]), 1.0, "Bachelor");
        let job = Job {
            id: 1,
            title: "Data Scientist".to_string(),
            department: "Research".to_string(),
            level: "Mid".to_string(),
            min_salary: 80000.0,
            max_salary: 120000.0,
            currency: "USD".to_string(),
            required_skills: vec![
                "Python".to_string(),
                "Statistics".to_string(),
                "Machine Learning".to_string(),
            ],
            preferred_skills: vec![],
            experience_years: 5,
            education_level: "Master".to_string(),
            description: String::new(),
            location: "Remote".to_string(),
            work_type: "Full-time".to_string(),
            is_active: true,
        };

        let recs = skill_recommendations(&cand, Some(&job));
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], "Learn Python for Data Scientist position");
        // Junior-tier advice fills the remainder.
        assert!(recs.iter().any(|r| r.contains("core technical skills")));
    }
}
