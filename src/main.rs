mod cli;
mod config;
mod error;
mod init;
mod migrate;
mod utils;

use cli::{AppArgs, parse_args};
use error::MigrateError;
use migrate::parse;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let args = parse_args();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &AppArgs) -> Result<(), MigrateError> {
    let config = parse::load_config(args)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    parse::match_arguments(args, &config, &mut input, &mut output)
}

/// Diagnostics go to stderr so they never mix with the table on stdout
fn setup_logging(args: &AppArgs) {
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .with(filter)
        .init();
}
