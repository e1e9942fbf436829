//! Literal sequence layout.
//!
//! Every token is preceded by a single space. Tokens are separated by commas
//! with no comma after the last one, and a newline follows every eighth
//! token. A buffer whose length is a multiple of eight therefore ends in a
//! newline; any other buffer ends right after its final token.

use super::token::tokens;
use std::fmt;
use std::io::{self, Write};
use tracing::trace;

/// Number of tokens written per output line.
pub const LITERALS_PER_LINE: usize = 8;

/// Display adapter that lays out a byte buffer as a literal sequence.
///
/// # Examples
///
/// ```
/// use hexlit::format::Literals;
///
/// let text = Literals::new(&[0x00, 0x7f, 0xff]).to_string();
/// assert_eq!(text, " 0x00, 0x7f, 0xff");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Literals<'a> {
    bytes: &'a [u8],
}

impl<'a> Literals<'a> {
    /// Wraps `bytes` for formatting.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of tokens this sequence renders.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if there are no bytes to render.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Literals<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.bytes.len().saturating_sub(1);

        for (i, token) in tokens(self.bytes).enumerate() {
            write!(f, " {token}")?;
            if i != last {
                f.write_str(",")?;
            }
            if i % LITERALS_PER_LINE == LITERALS_PER_LINE - 1 {
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

/// Formats `bytes` as a literal sequence.
///
/// Identical input always yields identical output.
#[must_use]
pub fn format_literals(bytes: &[u8]) -> String {
    let text = Literals::new(bytes).to_string();
    trace!(tokens = bytes.len(), chars = text.len(), "formatted literals");
    text
}

/// Writes `bytes` as a literal sequence to `writer`.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_literals<W: Write>(mut writer: W, bytes: &[u8]) -> io::Result<()> {
    write!(writer, "{}", Literals::new(bytes))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_literals(&[]), "");
        assert!(Literals::new(&[]).is_empty());
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(format_literals(&[0x41]), " 0x41");
    }

    #[test]
    fn test_ten_bytes_wrap_after_eighth() {
        let bytes: Vec<u8> = (0..10).collect();
        assert_eq!(
            format_literals(&bytes),
            " 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n 0x08, 0x09"
        );
    }

    #[test]
    fn test_exact_line_ends_with_newline_not_comma() {
        let bytes: Vec<u8> = (0..8).collect();
        assert_eq!(
            format_literals(&bytes),
            " 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07\n"
        );
    }

    #[test]
    fn test_two_full_lines() {
        let bytes = [0xffu8; 16];
        let line = " 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff";
        assert_eq!(format_literals(&bytes), format!("{line},\n{line}\n"));
    }

    #[test]
    fn test_write_literals_matches_format() {
        let bytes = b"hello, world";
        let mut sink = Vec::new();
        write_literals(&mut sink, bytes).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), format_literals(bytes));
    }

    #[test]
    fn test_len_counts_tokens() {
        assert_eq!(Literals::new(b"abc").len(), 3);
    }
}
