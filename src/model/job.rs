//! Job opening record as supplied by the storage/import layer

use serde::{Deserialize, Serialize};

/// A job opening. Read-only to the engine; the Distribution Analyzer also
/// builds synthetic jobs from query parameters using the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub department: String,
    /// Junior, Mid, Senior, Lead, etc.
    pub level: String,

    pub min_salary: f64,
    pub max_salary: f64,
    #[serde(default = "default_currency")]
    pub currency: String,

    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_years: u32,
    pub education_level: String,

    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(default = "default_work_type")]
    pub work_type: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_work_type() -> String {
    "Full-time".to_string()
}

fn default_true() -> bool {
    true
}
