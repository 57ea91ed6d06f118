//! Console and JSON rendering for analysis results

use crate::engine::{
    DistributionReport, RankedCandidate, SalaryBenchmark, SkillAssessment, SkillsGapReport,
};
use crate::error::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::fmt::Write;

/// Console renderer with score-tier coloring.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Pretty-JSON renderer for piping into other tools.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        // colored honors NO_COLOR etc. on its own; this is the config switch.
        if !use_colors {
            colored::control::set_override(false);
        }
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format_assessment(&self, name: &str, assessment: &SkillAssessment) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header(&format!("Assessment: {}", name)));
        let _ = writeln!(
            out,
            "  Overall score: {}",
            self.score(assessment.overall_score)
        );
        for (skill, score) in &assessment.skill_scores {
            let _ = writeln!(out, "  {:<24} {}", skill, self.score(*score));
        }
        out
    }

    pub fn format_matches(&self, job_title: &str, ranked: &[RankedCandidate]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header(&format!("Matches for {}", job_title)));
        if ranked.is_empty() {
            let _ = writeln!(out, "  (no candidates)");
            return out;
        }
        for (position, entry) in ranked.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<28} {}",
                position + 1,
                entry.candidate_name,
                self.score(entry.result.match_score)
            );
            if self.detailed {
                for (skill, score) in &entry.result.skill_matches {
                    let _ = writeln!(out, "      {:<24} {}", skill, self.score(*score));
                }
            }
        }
        out
    }

    pub fn format_distribution(&self, report: &DistributionReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.header(&format!("Workforce distribution: {}", report.department))
        );
        let _ = writeln!(out, "  Candidates considered: {}", report.total_candidates);
        let _ = writeln!(out, "  Matched: {}", report.matched_candidates.len());
        let _ = writeln!(
            out,
            "  Distribution score: {}",
            self.score(report.distribution_score)
        );

        if !report.matched_candidates.is_empty() {
            let _ = writeln!(out);
            for candidate in &report.matched_candidates {
                let _ = writeln!(
                    out,
                    "  {:<28} {}  [salary {} | location {} | experience {}]",
                    candidate.candidate_name,
                    self.score(candidate.match_score),
                    self.flag(candidate.salary_fit),
                    self.flag(candidate.location_fit),
                    self.flag(candidate.experience_fit),
                );
                if self.detailed {
                    for (skill, score) in &candidate.skill_matches {
                        let _ = writeln!(out, "      {:<24} {}", skill, self.score(*score));
                    }
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.header("Recommendations"));
        for recommendation in &report.recommendations {
            let _ = writeln!(out, "  - {}", recommendation);
        }
        out
    }

    pub fn format_gaps(&self, report: &SkillsGapReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header("Skills gap analysis"));
        let _ = writeln!(
            out,
            "  Cohort size: {}",
            report.candidate_skills_matrix.len()
        );

        if !report.top_skills.is_empty() {
            let _ = writeln!(out, "  Top skills: {}", report.top_skills.join(", "));
        }

        if report.skill_gaps.is_empty() {
            let _ = writeln!(out, "  No skill gaps detected");
        } else {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.header("Gaps"));
            for (skill, lagging) in &report.skill_gaps {
                let _ = writeln!(
                    out,
                    "  {:<24} {} below threshold: {}",
                    skill,
                    lagging.len(),
                    lagging.join(", ")
                );
            }
        }

        if self.detailed && !report.skill_recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.header("Per-candidate recommendations"));
            for (name, recommendations) in &report.skill_recommendations {
                if recommendations.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "  {}:", name);
                for recommendation in recommendations {
                    let _ = writeln!(out, "    - {}", recommendation);
                }
            }
        }
        out
    }

    pub fn format_benchmark(&self, benchmark: &SalaryBenchmark) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.header(&format!(
                "Salary benchmark: {} ({}, {})",
                benchmark.job_title, benchmark.experience_level, benchmark.location
            ))
        );
        let _ = writeln!(
            out,
            "  Market average:   {:>12.2} {}",
            benchmark.market_average, benchmark.currency
        );
        let _ = writeln!(out, "  25th percentile:  {:>12.2}", benchmark.percentile_25);
        let _ = writeln!(out, "  50th percentile:  {:>12.2}", benchmark.percentile_50);
        let _ = writeln!(out, "  75th percentile:  {:>12.2}", benchmark.percentile_75);
        let _ = writeln!(out, "  90th percentile:  {:>12.2}", benchmark.percentile_90);
        out
    }

    fn header(&self, text: &str) -> ColoredString {
        if self.use_colors {
            text.bold().cyan()
        } else {
            text.normal()
        }
    }

    fn score(&self, value: f64) -> ColoredString {
        let text = format!("{:.3}", value);
        if !self.use_colors {
            return text.normal();
        }
        if value >= 0.8 {
            text.green()
        } else if value >= 0.6 {
            text.yellow()
        } else {
            text.red()
        }
    }

    fn flag(&self, value: bool) -> ColoredString {
        match (value, self.use_colors) {
            (true, true) => "yes".green(),
            (false, true) => "no".red(),
            (true, false) => "yes".normal(),
            (false, false) => "no".normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn plain() -> ConsoleFormatter {
        ConsoleFormatter::new(false, false)
    }

    #[test]
    fn distribution_report_lists_matches_and_recommendations() {
        let report = DistributionReport {
            department: "Engineering".to_string(),
            total_candidates: 5,
            matched_candidates: vec![crate::engine::CandidateMatch {
                candidate_id: 1,
                candidate_name: "Ada Lovelace".to_string(),
                match_score: 0.92,
                skill_matches: BTreeMap::from([("Rust".to_string(), 0.92)]),
                salary_fit: true,
                location_fit: true,
                experience_fit: false,
            }],
            distribution_score: 0.94,
            recommendations: vec!["Top candidate: Ada Lovelace (Match: 92.0%)".to_string()],
            analysis_date: Utc::now(),
        };

        let text = plain().format_distribution(&report);
        assert!(text.contains("Workforce distribution: Engineering"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("0.920"));
        assert!(text.contains("experience no"));
        assert!(text.contains("- Top candidate: Ada Lovelace"));
    }

    #[test]
    fn json_formatter_round_trips_reports() {
        let benchmark = crate::engine::salary_benchmark("Data Scientist", None, Some("Senior"));
        let json = JsonFormatter.format(&benchmark).unwrap();
        assert!(json.contains("\"job_title\": \"Data Scientist\""));
        assert!(json.contains("\"percentile_50\": 140000.0"));
    }

    #[test]
    fn benchmark_output_shows_percentiles() {
        let benchmark = crate::engine::salary_benchmark("Product Manager", None, Some("Lead"));
        let text = plain().format_benchmark(&benchmark);
        assert!(text.contains("Salary benchmark: Product Manager (Lead, US)"));
        assert!(text.contains("140000.00"));
        assert!(text.contains("260000.00"));
    }
}
