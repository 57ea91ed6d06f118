//! Talent matcher library

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use config::Config;
pub use error::{Result, TalentMatcherError};
