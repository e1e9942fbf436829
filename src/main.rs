//! Binary entry point for hexlit.
//!
//! Prints the literal sequence for one binary file on stdout.

#![allow(clippy::print_stderr)]

use clap::Parser;
use hexlit::cli::{Cli, execute, init_logging, usage};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let stdout = BufWriter::new(io::stdout().lock());

    match execute(&cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        // Handle broken pipe gracefully (e.g., when piped to `head`)
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => {
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
