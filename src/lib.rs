//! # hexlit
//!
//! Dumps a binary file as comma-separated hex byte literals.
//!
//! Each byte becomes a `0xHH` token (two lowercase hex digits). Tokens are
//! comma separated with eight per line, ready to paste into an array
//! initializer:
//!
//! ```
//! let text = hexlit::format_literals(&[0xca, 0xfe]);
//! assert_eq!(text, " 0xca, 0xfe");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export formatter types
pub use format::{
    LITERALS_PER_LINE, Literals, Token, Tokens, format_literals, tokens, write_literals,
};

// Re-export I/O types
pub use io::{FileBytes, FileReader, read_bytes};

// Re-export CLI types
pub use cli::{Cli, execute};
