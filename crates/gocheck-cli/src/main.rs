//! go-checker — naming-convention checks for Go source files.
//!
//! This binary checks one Go file and prints its violations as a JSON array.
//! See `go-checker --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::Cli;
use gocheck_output::OutputFormatter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1; --help and --version keep clap's exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logging::init(cli.verbose);

    let formatter: Box<dyn OutputFormatter> = if cli.human {
        Box::new(gocheck_output::human::HumanFormatter)
    } else {
        Box::new(gocheck_output::json::JsonFormatter { pretty: cli.pretty })
    };

    let exit_code = commands::check::run(&*formatter, &cli.file, cli.config.as_deref());
    std::process::exit(exit_code);
}
