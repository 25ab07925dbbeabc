use std::path::Path;

use gocheck_core::config::CheckConfig;
use gocheck_enforce::engine::{check_file, CheckError};
use gocheck_output::OutputFormatter;

/// Run `go-checker <file>`: print violations, return the exit code.
pub fn run(formatter: &dyn OutputFormatter, file: &Path, config_path: Option<&Path>) -> i32 {
    let config = match config_path {
        Some(path) => match CheckConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("go-checker: invalid config: {}", e);
                return 1;
            }
        },
        None => CheckConfig::load(source_dir(file)),
    };
    tracing::debug!(file = %file.display(), explicit_config = config_path.is_some(), "checking");

    match check_file(file, &config) {
        Ok(result) => {
            print!("{}", formatter.format_violations(&result));
            0
        }
        Err(CheckError::Parse(e)) => {
            eprintln!("Error parsing file: {}:{}", file.display(), e);
            1
        }
        Err(e) => {
            eprintln!("go-checker: {}", e);
            1
        }
    }
}

/// Directory searched for `.gocheck.json`.
fn source_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
