//! Lexer error types.
//!
//! Both errors are fatal for the scan that raised them: the lexer stops at the
//! first one and returns no tokens. Each carries the start position of the
//! token being scanned when it failed.

use gib_ir::Position;

/// A fatal lexing failure.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Input ended inside a string literal.
    #[error("end of file reached while lexing string starting at {start}")]
    UnterminatedString {
        /// Position of the opening `"`.
        start: Position,
    },
    /// A character matched no scanning rule.
    #[error("lexing failed at {start}: unrecognized character {found:?}")]
    UnrecognizedCharacter { found: char, start: Position },
}

impl LexError {
    pub fn unterminated_string(start: Position) -> Self {
        LexError::UnterminatedString { start }
    }

    pub fn unrecognized_character(found: char, start: Position) -> Self {
        LexError::UnrecognizedCharacter { found, start }
    }

    /// Where the failing token started.
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { start }
            | LexError::UnrecognizedCharacter { start, .. } => *start,
        }
    }
}

#[cfg(test)]
mod tests;
