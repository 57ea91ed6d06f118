//! Analysis query parameters supplied by the calling layer

use serde::{Deserialize, Serialize};

/// Salary budget for a workforce distribution query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

/// Parameters for a workforce distribution analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub required_skills: Vec<String>,
    /// Junior, Mid, Senior or Lead.
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
}

/// Parameters for a skills gap analysis over a cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsGapQuery {
    pub candidate_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_skills: Option<Vec<String>>,
}
