//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Dump a binary file as comma-separated hex byte literals.
///
/// The output can be pasted into source code as the contents of a byte
/// array initializer.
#[derive(Parser, Debug)]
#[command(name = "hexlit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the binary file to dump.
    ///
    /// Optional at the parser level so a missing path is reported as a
    /// usage error with exit status 1.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Creates a CLI invocation for the given input file.
    #[must_use]
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
        }
    }
}

/// Returns the one-line usage message.
#[must_use]
pub fn usage() -> String {
    format!("usage: {} file.bin", clap::crate_name!())
}
