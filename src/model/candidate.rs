//! Candidate record as supplied by the storage/import layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A job candidate. The engine reads every field except `skill_scores` and
/// `overall_score`, which are derived values written back only through an
/// explicit [`SkillAssessment`](crate::engine::assessment::SkillAssessment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    pub years_experience: f64,
    pub education_level: String,

    /// Self-reported proficiency per skill, 1-10.
    pub skills: BTreeMap<String, u8>,
    /// Derived per-skill scores in [0, 1], written by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_scores: Option<BTreeMap<String, f64>>,
    /// Derived overall quality score in [0, 1], written by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<f64>,
    #[serde(default = "default_currency")]
    pub salary_currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_work_type: Option<String>,

    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}

impl Candidate {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
