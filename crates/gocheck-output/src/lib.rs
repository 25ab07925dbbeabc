//! Output formatters for gocheck results.
//!
//! Provides two output modes:
//! - **JSON** (default): the violation array, compact or pretty-printed
//! - **Human** (`--human`): one `path:line:column` line per violation

pub mod human;
pub mod json;

use gocheck_enforce::types::AnalyzeResult;

pub trait OutputFormatter {
    fn format_violations(&self, result: &AnalyzeResult) -> String;
}
