//! HR attrition dataset import
//!
//! Converts the IBM-HR-style employee CSV into candidate and job records.
//! Employees who already left (Attrition = Yes) are skipped; skill profiles
//! are synthesized from the employee's role, adjusted by satisfaction and
//! performance ratings, and every imported candidate is assessed so the
//! derived scores ship with the records.

use crate::engine::assess_candidate;
use crate::error::{Result, TalentMatcherError};
use crate::model::{Candidate, Job};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Records produced by one import run. The caller decides where they are
/// persisted.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub candidates: Vec<Candidate>,
    pub jobs: Vec<Job>,
    pub summary: ImportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub jobs_created: usize,
    pub candidates_created: usize,
    pub skills_created: usize,
    pub total_records: usize,
}

/// One row of the HR attrition CSV. Only the columns the conversion needs.
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "EmployeeNumber")]
    employee_number: i64,
    #[serde(rename = "Attrition")]
    attrition: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "JobRole")]
    job_role: String,
    #[serde(rename = "JobLevel")]
    job_level: u8,
    #[serde(rename = "MonthlyIncome")]
    monthly_income: f64,
    #[serde(rename = "Education")]
    education: u8,
    #[serde(rename = "TotalWorkingYears")]
    total_working_years: f64,
    #[serde(rename = "JobSatisfaction")]
    job_satisfaction: f64,
    #[serde(rename = "PerformanceRating")]
    performance_rating: f64,
}

/// Import the HR attrition CSV at `path`.
pub fn import_hr_csv(path: &Path) -> Result<ImportResult> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut candidates = Vec::new();
    let mut jobs: Vec<Job> = Vec::new();
    let mut seen_emails = BTreeSet::new();
    let mut seen_jobs = BTreeSet::new();
    let mut seen_skills = BTreeSet::new();
    let mut total_records = 0usize;

    for record in reader.deserialize() {
        let row: EmployeeRow = record.map_err(|e| {
            TalentMatcherError::DataImport(format!("row {}: {}", total_records + 1, e))
        })?;
        total_records += 1;

        let title = map_job_title(&row.job_role);
        if seen_jobs.insert((title.to_string(), row.department.clone())) {
            jobs.push(job_from_row(&row, jobs.len() as i64 + 1));
        }

        if row.attrition == "Yes" {
            continue;
        }

        let email = format!("employee{}@company.com", row.employee_number);
        if !seen_emails.insert(email.clone()) {
            continue;
        }

        let mut candidate = candidate_from_row(&row, email);
        seen_skills.extend(candidate.skills.keys().cloned());

        // Ship the derived scores with the record.
        assess_candidate(&candidate).apply_to(&mut candidate);
        candidates.push(candidate);
    }

    let summary = ImportSummary {
        jobs_created: jobs.len(),
        candidates_created: candidates.len(),
        skills_created: seen_skills.len(),
        total_records,
    };
    info!(
        "imported {} candidates and {} jobs from {} records",
        summary.candidates_created, summary.jobs_created, summary.total_records
    );

    Ok(ImportResult {
        candidates,
        jobs,
        summary,
    })
}

fn job_from_row(row: &EmployeeRow, id: i64) -> Job {
    let level = map_job_level(row.job_level);
    let required_skills: Vec<String> = role_skill_profile(&row.job_role)
        .iter()
        .map(|(skill, _)| skill.to_string())
        .collect();

    Job {
        id,
        title: map_job_title(&row.job_role).to_string(),
        department: row.department.clone(),
        level: level.to_string(),
        // Salary band around the observed income.
        min_salary: row.monthly_income * 0.8,
        max_salary: row.monthly_income * 1.2,
        currency: "USD".to_string(),
        required_skills,
        preferred_skills: Vec::new(),
        experience_years: experience_for_level(level),
        education_level: "Bachelor".to_string(),
        description: format!(
            "Position for {} in {} department",
            row.job_role, row.department
        ),
        location: "Remote".to_string(),
        work_type: "Full-time".to_string(),
        is_active: true,
    }
}

fn candidate_from_row(row: &EmployeeRow, email: String) -> Candidate {
    let mut skills: BTreeMap<String, u8> = BTreeMap::new();

    // Role baseline, nudged by satisfaction and performance ratings.
    let satisfaction_bonus = (row.job_satisfaction - 2.5) * 0.2;
    let performance_bonus = (row.performance_rating - 2.5) * 0.2;
    for (skill, base) in role_skill_profile(&row.job_role) {
        let adjusted = f64::from(*base) + satisfaction_bonus + performance_bonus;
        skills.insert(skill.to_string(), (adjusted as i64).clamp(1, 10) as u8);
    }

    if row.education >= 4 {
        skills.insert("Leadership".to_string(), 7);
        skills.insert("Strategic Thinking".to_string(), 6);
    }
    if row.total_working_years > 10.0 {
        skills.insert("Experience".to_string(), 9);
        skills.insert("Problem Solving".to_string(), 8);
    }

    Candidate {
        id: row.employee_number,
        first_name: format!("Employee{}", row.employee_number),
        last_name: format!("From{}", row.department.replace(' ', "")),
        email,
        phone: Some(format!("+1-555-{:04}", row.employee_number)),
        current_position: Some(map_job_title(&row.job_role).to_string()),
        current_company: Some("Current Company".to_string()),
        years_experience: row.total_working_years,
        education_level: map_education(row.education).to_string(),
        skills,
        skill_scores: None,
        overall_score: None,
        expected_salary: Some(row.monthly_income * 12.0),
        salary_currency: "USD".to_string(),
        preferred_locations: Some(vec!["Remote".to_string(), "Current Location".to_string()]),
        preferred_work_type: Some("Full-time".to_string()),
        is_available: true,
    }
}

/// Normalize dataset job roles to the titles this system uses.
fn map_job_title(job_role: &str) -> &str {
    match job_role {
        "Sales Executive" => "Sales Representative",
        "Research Scientist" => "Data Scientist",
        "Laboratory Technician" => "Research Assistant",
        "Manufacturing Director" => "Operations Manager",
        "Healthcare Representative" => "Healthcare Specialist",
        "Manager" => "Department Manager",
        "Research Director" => "Research Manager",
        "Human Resources" => "HR Specialist",
        other => other,
    }
}

/// Baseline skill profile per dataset job role.
fn role_skill_profile(job_role: &str) -> &'static [(&'static str, u8)] {
    match job_role {
        "Sales Executive" => &[
            ("Sales", 8),
            ("Communication", 7),
            ("Negotiation", 7),
            ("Customer Service", 8),
            ("Product Knowledge", 6),
            ("Relationship Building", 7),
        ],
        "Research Scientist" => &[
            ("Research", 9),
            ("Data Analysis", 8),
            ("Statistics", 8),
            ("Python", 7),
            ("Machine Learning", 7),
            ("Scientific Writing", 8),
        ],
        "Laboratory Technician" => &[
            ("Laboratory Skills", 8),
            ("Data Collection", 7),
            ("Quality Control", 7),
            ("Technical Skills", 6),
            ("Attention to Detail", 8),
        ],
        "Manufacturing Director" => &[
            ("Operations Management", 8),
            ("Leadership", 7),
            ("Process Improvement", 7),
            ("Team Management", 8),
            ("Strategic Planning", 7),
        ],
        "Healthcare Representative" => &[
            ("Healthcare Knowledge", 8),
            ("Communication", 7),
            ("Medical Terminology", 7),
            ("Customer Service", 6),
            ("Sales", 6),
        ],
        "Manager" => &[
            ("Leadership", 8),
            ("Team Management", 8),
            ("Strategic Planning", 7),
            ("Communication", 7),
            ("Decision Making", 8),
        ],
        "Sales Representative" => &[
            ("Sales", 7),
            ("Communication", 7),
            ("Customer Service", 7),
            ("Product Knowledge", 6),
            ("Relationship Building", 6),
        ],
        "Research Director" => &[
            ("Research", 9),
            ("Leadership", 8),
            ("Strategic Planning", 8),
            ("Team Management", 8),
            ("Scientific Writing", 8),
        ],
        "Human Resources" => &[
            ("HR Management", 8),
            ("Communication", 7),
            ("Employee Relations", 7),
            ("Recruitment", 7),
            ("Compliance", 6),
        ],
        _ => &[],
    }
}

fn map_education(code: u8) -> &'static str {
    match code {
        1 => "High School",
        2 => "Associate",
        3 => "Bachelor",
        4 => "Master",
        5 => "PhD",
        _ => "Bachelor",
    }
}

fn map_job_level(code: u8) -> &'static str {
    match code {
        1 => "Junior",
        2 => "Mid",
        3 => "Senior",
        4 => "Lead",
        5 => "Manager",
        _ => "Mid",
    }
}

/// Required years per job level for imported openings. Intentionally a
/// looser table than the analysis-side level mapping, matching how the
/// dataset levels spread.
fn experience_for_level(level: &str) -> u32 {
    match level {
        "Junior" => 1,
        "Mid" => 3,
        "Senior" => 6,
        "Lead" => 8,
        "Manager" => 10,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "EmployeeNumber,Attrition,Department,JobRole,JobLevel,MonthlyIncome,Education,TotalWorkingYears,JobSatisfaction,PerformanceRating";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn attrition_rows_are_skipped_but_counted() {
        let file = write_csv(&[
            "1,No,Sales,Sales Executive,2,5000,3,6,3,3",
            "2,Yes,Sales,Sales Executive,2,5200,3,8,2,3",
        ]);
        let result = import_hr_csv(file.path()).unwrap();

        assert_eq!(result.summary.total_records, 2);
        assert_eq!(result.summary.candidates_created, 1);
        assert_eq!(result.candidates[0].id, 1);
    }

    #[test]
    fn jobs_are_deduplicated_by_title_and_department() {
        let file = write_csv(&[
            "1,No,Sales,Sales Executive,2,5000,3,6,3,3",
            "2,No,Sales,Sales Executive,3,7000,3,9,3,3",
            "3,No,Research & Development,Research Scientist,2,6000,4,5,3,3",
        ]);
        let result = import_hr_csv(file.path()).unwrap();

        assert_eq!(result.summary.jobs_created, 2);
        assert_eq!(result.jobs[0].title, "Sales Representative");
        assert_eq!(result.jobs[1].title, "Data Scientist");
    }

    #[test]
    fn imported_candidates_carry_derived_scores() {
        let file = write_csv(&["1,No,Sales,Sales Executive,2,5000,3,6,3,3"]);
        let result = import_hr_csv(file.path()).unwrap();

        let candidate = &result.candidates[0];
        assert!(candidate.skill_scores.is_some());
        let overall = candidate.overall_score.unwrap();
        assert!((0.0..=1.0).contains(&overall));
        assert_eq!(candidate.expected_salary, Some(60000.0));
        assert_eq!(candidate.education_level, "Bachelor");
    }

    #[test]
    fn skill_profile_adjusts_with_ratings_and_tenure() {
        // High satisfaction and performance, master's degree, long tenure.
        let file = write_csv(&["7,No,Research & Development,Research Scientist,3,8000,4,12,4,4"]);
        let result = import_hr_csv(file.path()).unwrap();

        let skills = &result.candidates[0].skills;
        // Base Research 9 + 0.3 + 0.3 truncates back to 9.
        assert_eq!(skills["Research"], 9);
        assert_eq!(skills["Leadership"], 7);
        assert_eq!(skills["Strategic Thinking"], 6);
        assert_eq!(skills["Experience"], 9);
        assert_eq!(skills["Problem Solving"], 8);
    }

    #[test]
    fn malformed_rows_surface_as_import_errors() {
        let file = write_csv(&["not-a-number,No,Sales,Sales Executive,2,5000,3,6,3,3"]);
        let err = import_hr_csv(file.path()).unwrap_err();
        assert!(matches!(err, TalentMatcherError::DataImport(_)));
    }
}
