use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "go-checker",
    version,
    about = "Check Go identifiers against naming conventions"
)]
pub(crate) struct Cli {
    /// Go source file to check
    pub file: PathBuf,

    /// Config file to use instead of `.gocheck.json` next to the source
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print `path:line:column` lines instead of JSON
    #[arg(long)]
    pub human: bool,

    /// Pretty-print the JSON array
    #[arg(long, conflicts_with = "human")]
    pub pretty: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
