//! Secret Santa list generator.
//!
//! This binary delegates to `secret_santa::cli` for parsing and the run
//! flow, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use secret_santa::cli::{CliError, ParseOutcome, load_settings, parse_args, run, success_message};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    match parse_args(env::args_os())? {
        ParseOutcome::Help(text) => {
            write_stdout(&text);
            Ok(())
        }
        ParseOutcome::Run(args) => {
            let settings = load_settings()?;
            let report = run(&args, &settings)?;
            write_stdout(&success_message(&report));
            Ok(())
        }
    }
}

fn write_stdout(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{}", message.trim_end()) {
        drop(err);
    }
}
