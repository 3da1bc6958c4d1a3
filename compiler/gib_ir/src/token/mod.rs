//! Token types for the Gibbous lexer.
//!
//! A [`Token`] owns its lexeme and carries the position it started at. The
//! end line and end offset are derived from the lexeme once, at construction.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// A scanned token.
///
/// Immutable once built: fields are private and only read through accessors.
///
/// # End values
///
/// - `end_line` is the number of `\n` characters in the text. It is a count,
///   not `start_line` plus that count.
/// - `end_offset` is `len(text) - last_newline_index - 1`, where the index is
///   `-1` when the text has no newline. A single-line token therefore reports
///   its full length; a multi-line token reports the number of characters after
///   its last newline.
///
/// Lengths and indices count `char`s, not bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: TokenKind,
    text: String,
    start_line: u32,
    end_line: u32,
    start_offset: i32,
    end_offset: u32,
}

impl Token {
    /// Create a token starting at `start`, deriving its end values from `text`.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position) -> Self {
        let text = text.into();
        let (end_line, end_offset) = end_of(&text);
        Token {
            kind,
            text,
            start_line: start.line(),
            end_line,
            start_offset: start.column(),
            end_offset,
        }
    }

    /// Create a token from explicit span values.
    ///
    /// Nothing is derived or checked; used by callers that synthesize tokens.
    pub fn from_parts(
        kind: TokenKind,
        text: impl Into<String>,
        start_line: u32,
        end_line: u32,
        start_offset: i32,
        end_offset: u32,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            start_line,
            end_line,
            start_offset,
            end_offset,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    #[inline]
    pub fn start_offset(&self) -> i32 {
        self.start_offset
    }

    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.end_offset
    }

    /// Position of the first character.
    #[inline]
    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_offset)
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.text, self.start())
    }
}

/// Newline count and end offset of `text`.
fn end_of(text: &str) -> (u32, u32) {
    let mut newlines: u32 = 0;
    let mut len: usize = 0;
    let mut last_newline: Option<usize> = None;
    for (i, c) in text.chars().enumerate() {
        if c == '\n' {
            newlines = newlines.saturating_add(1);
            last_newline = Some(i);
        }
        len = i + 1;
    }
    let after_last_newline = match last_newline {
        Some(i) => len - i - 1,
        None => len,
    };
    (newlines, u32::try_from(after_last_newline).unwrap_or(u32::MAX))
}
