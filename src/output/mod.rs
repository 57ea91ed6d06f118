//! Report rendering

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter};
