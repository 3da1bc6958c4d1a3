//! Lexer for Gibbous.
//!
//! Turns source text into a `Vec<Token>` in a single pass, or fails with the
//! first [`LexError`]. Scanning is maximal munch over a
//! [`LookaheadCursor`] of `char`s; positions come from a [`PositionTracker`]
//! attached to the cursor as observers, so every consumed character moves the
//! tracker, including the second `=` of `==` and the closing `"` of a string.
//!
//! # Lexical rules
//!
//! - `*` `/` `+` `-` are single-character operators; `=` and `==` are told
//!   apart by one character of lookahead.
//! - `"..."` is a string literal; the quotes are not part of the token text and
//!   there are no escapes.
//! - Runs of ASCII letters are identifiers or keywords. Digits and `_` end the
//!   run, so `let1` is `let` followed by `1`.
//! - Runs of ASCII digits are integers.
//! - Whitespace separates tokens and is otherwise ignored.
//! - Anything else aborts the scan.

use gib_ir::{Position, Token, TokenKind};
use gib_lexer_core::LookaheadCursor;
use tracing::{debug, trace};

pub mod keywords;
mod lex_error;
mod tracker;

pub use lex_error::LexError;
pub use tracker::PositionTracker;

/// Source-to-tokens conversion.
///
/// Implementations own no state between calls; each call scans its input
/// from scratch.
pub trait Lexer {
    fn lex(&self, source: &str) -> Result<Vec<Token>, LexError>;
}

/// The standard Gibbous lexer.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultLexer;

impl Lexer for DefaultLexer {
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    fn lex(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let tracker = PositionTracker::new();
        let mut cursor = LookaheadCursor::new(source.chars().collect::<Vec<char>>());
        tracker.attach(&mut cursor);

        let result = Scanner {
            cursor,
            tracker: &tracker,
        }
        .run();

        match &result {
            Ok(tokens) => debug!(count = tokens.len(), "lexing complete"),
            Err(err) => debug!(error = %err, "lexing failed"),
        }
        result
    }
}

/// Lex `source` with [`DefaultLexer`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    DefaultLexer.lex(source)
}

/// State for one scan.
struct Scanner<'o> {
    cursor: LookaheadCursor<'o, char>,
    tracker: &'o PositionTracker,
}

impl Scanner<'_> {
    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while self.cursor.has_next() {
            let start = self.tracker.snapshot();
            let Some(&cur) = self.cursor.consume() else {
                break;
            };
            let Some(token) = self.token(cur, start)? else {
                continue;
            };
            trace!(kind = %token.kind(), text = token.text(), start = %start, "token");
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Finish the token whose first character `cur` was just consumed.
    ///
    /// `Ok(None)` for whitespace.
    fn token(&mut self, cur: char, start: Position) -> Result<Option<Token>, LexError> {
        let token = match cur {
            '*' => Token::new(TokenKind::Star, "*", start),
            '/' => Token::new(TokenKind::Slash, "/", start),
            '+' => Token::new(TokenKind::Plus, "+", start),
            '-' => Token::new(TokenKind::Minus, "-", start),
            '=' => {
                if self.cursor.peek(1) == Some(&'=') {
                    self.cursor.consume();
                    Token::new(TokenKind::DoubleEquals, "==", start)
                } else {
                    Token::new(TokenKind::Equals, "=", start)
                }
            }
            '"' => self.string(start)?,
            c if is_letter(c) => {
                let text = self.run_of(c, is_letter);
                Token::new(keywords::classify(&text), text, start)
            }
            c if is_digit(c) => Token::new(TokenKind::Integer, self.run_of(c, is_digit), start),
            c if is_whitespace(c) => return Ok(None),
            c => return Err(LexError::unrecognized_character(c, start)),
        };
        Ok(Some(token))
    }

    /// String body after the opening quote. The closing quote is consumed but
    /// not kept.
    fn string(&mut self, start: Position) -> Result<Token, LexError> {
        let mut text = String::new();
        self.eat_while(&mut text, |c| c != '"');
        if self.cursor.consume().is_none() {
            return Err(LexError::unterminated_string(start));
        }
        Ok(Token::new(TokenKind::String, text, start))
    }

    /// `first` followed by every following character matching `pred`.
    fn run_of(&mut self, first: char, pred: fn(char) -> bool) -> String {
        let mut text = String::from(first);
        self.eat_while(&mut text, pred);
        text
    }

    fn eat_while(&mut self, text: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(&c) = self.cursor.peek(1) {
            if !pred(c) {
                break;
            }
            self.cursor.consume();
            text.push(c);
        }
    }
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Unicode `White_Space` minus the no-break spaces and NEL, plus the
/// information separators U+001C..=U+001F.
#[inline]
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && !matches!(c, '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}'))
        || matches!(c, '\u{1c}'..='\u{1f}')
}
