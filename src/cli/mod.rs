//! CLI layer for hexlit.
//!
//! Provides the command-line interface using clap: argument parsing, the
//! single formatting command, and diagnostic logging setup.

pub mod commands;
pub mod logging;
pub mod parser;

pub use commands::execute;
pub use logging::init_logging;
pub use parser::{Cli, usage};
