//! CLI command implementation.
//!
//! Validates the invocation and reads the input file in full, then streams
//! the literal sequence to the output. Nothing is written if reading fails.

use crate::cli::parser::Cli;
use crate::error::{CommandError, Result};
use crate::format::write_literals;
use crate::io::read_bytes;
use std::io::Write;
use tracing::debug;

/// Executes the CLI command, writing the literal sequence to `out`.
///
/// # Errors
///
/// Returns [`CommandError::MissingArgument`] before touching the filesystem
/// if no file was given, an input error if the file cannot be read, or
/// [`IoError::Output`](crate::error::IoError::Output) if writing to `out`
/// fails.
pub fn execute<W: Write>(cli: &Cli, out: W) -> Result<()> {
    let path = cli
        .file
        .as_deref()
        .ok_or_else(|| CommandError::MissingArgument("FILE".to_string()))?;

    let bytes = read_bytes(path)?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        mapped = bytes.is_mapped(),
        "read input"
    );

    write_literals(out, &bytes)?;
    Ok(())
}
