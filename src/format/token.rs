//! Hex literal tokens.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// A single formatted hex literal for one input byte.
///
/// Displays as `0x` followed by exactly two lowercase hex digits.
///
/// # Examples
///
/// ```
/// use hexlit::format::Token;
///
/// assert_eq!(Token::new(5).to_string(), "0x05");
/// assert_eq!(Token::new(255).to_string(), "0xff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u8);

impl Token {
    /// Creates a token for the given byte.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the byte this token represents.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Token {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Lazy token stream over a byte buffer, one token per byte.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: slice::Iter<'a, u8>,
}

impl<'a> Tokens<'a> {
    /// Creates a token stream borrowing `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes: bytes.iter() }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.bytes.next().copied().map(Token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

impl ExactSizeIterator for Tokens<'_> {}

impl FusedIterator for Tokens<'_> {}

/// Returns the token stream for `bytes`.
#[must_use]
pub fn tokens(bytes: &[u8]) -> Tokens<'_> {
    Tokens::new(bytes)
}
