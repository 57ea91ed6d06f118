//! Plain data records exchanged with the storage and import layers

pub mod candidate;
pub mod job;
pub mod query;

pub use candidate::Candidate;
pub use job::Job;
pub use query::{BudgetRange, DistributionQuery, SkillsGapQuery};
