//! Error types for hexlit.
//!
//! Two failure families exist: usage errors, detected before any I/O, and
//! I/O errors raised while reading the input or writing the literal
//! sequence. Both are fatal.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hexlit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Input or output failure.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Invalid invocation.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Returns `true` if the error stems from invalid invocation.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Command(CommandError::MissingArgument(_)))
    }

    /// Returns `true` if the output sink was closed by the reader.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(IoError::Output(e)) if e.kind() == ErrorKind::BrokenPipe)
    }
}

/// Failures reading the input file or writing the output.
#[derive(Error, Debug)]
pub enum IoError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The input exists but could not be opened or read.
    #[error("failed to read file: {}: {reason}", path.display())]
    ReadFailed {
        /// Input path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// The input could not be memory mapped.
    #[error("memory mapping failed: {}: {reason}", path.display())]
    MmapFailed {
        /// Input path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// Writing the literal sequence failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Output(err))
    }
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/firmware.bin"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/firmware.bin");
    }

    #[test]
    fn test_read_failed_display() {
        let err = IoError::ReadFailed {
            path: PathBuf::from("/tmp/test"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read file: /tmp/test: permission denied"
        );

        let err = IoError::MmapFailed {
            path: PathBuf::from("/tmp/big"),
            reason: "out of memory".to_string(),
        };
        assert!(err.to_string().contains("memory mapping"));
    }

    #[test]
    fn test_output_error_from_io() {
        let err: Error = std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(IoError::Output(_))));
        assert!(err.is_broken_pipe());
        assert!(!err.is_usage());
        assert!(err.to_string().contains("failed to write output"));
    }

    #[test]
    fn test_other_output_error_is_not_broken_pipe() {
        let err: Error = std::io::Error::new(ErrorKind::WriteZero, "disk full").into();
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_usage_error() {
        let err: Error = CommandError::MissingArgument("FILE".to_string()).into();
        assert!(err.is_usage());
        assert!(!err.is_broken_pipe());
        assert_eq!(
            err.to_string(),
            "command error: missing required argument: FILE"
        );
    }
}
