//! Byte-to-literal formatting.
//!
//! Turns a byte buffer into the text of an array initializer: one `0xHH`
//! token per byte, comma separated, eight tokens per line.

pub mod literal;
pub mod token;

pub use literal::{LITERALS_PER_LINE, Literals, format_literals, write_literals};
pub use token::{Token, Tokens, tokens};
