use std::path::Path;
use std::time::Instant;

use gocheck_core::config::CheckConfig;
use gocheck_parsers::go::TypeChecker;
use gocheck_parsers::resolver::TypeProvider;
use gocheck_parsers::treesitter::{GoParser, ParseError, ParsedFile};

use crate::rules::RuleTable;
use crate::types::{AnalyzeResult, Violation};
use crate::walker::TreeWalker;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Run every naming rule over one parsed file.
///
/// Performs no I/O. The result is in declaration order.
pub fn analyze(file: &ParsedFile, types: &dyn TypeProvider, rules: &RuleTable) -> Vec<Violation> {
    TreeWalker::new(file, types, rules).walk().into_violations()
}

/// Parse, type-check and analyze `source`, reported under `path`.
pub fn check_source(
    path: &str,
    source: &str,
    config: &CheckConfig,
) -> Result<AnalyzeResult, CheckError> {
    let start = Instant::now();
    let file = GoParser::new().parse(source)?;
    tracing::debug!(path, elapsed_us = start.elapsed().as_micros() as u64, "parsed");

    let types = TypeChecker::check(&file);
    let rules = RuleTable::from_config(config);
    let violations = analyze(&file, &types, &rules);
    tracing::debug!(
        path,
        violations = violations.len(),
        unresolved = types.unresolved_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "analysis finished"
    );

    Ok(AnalyzeResult {
        file: path.to_string(),
        violations,
    })
}

/// Read `path` from disk and check it.
pub fn check_file(path: &Path, config: &CheckConfig) -> Result<AnalyzeResult, CheckError> {
    let display = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: display.clone(),
        source,
    })?;
    check_source(&display, &source, config)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
