//! Record loading and dataset import

pub mod csv_import;
pub mod loader;

pub use csv_import::{import_hr_csv, ImportResult, ImportSummary};
pub use loader::{find_candidate, find_job, load_candidates, load_jobs, select_cohort};
