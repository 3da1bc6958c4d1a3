//! Source positions.
//!
//! A [`Position`] is a line/column pair. The scanner mutates one in place as
//! characters are consumed; tokens keep a copy taken before their first
//! character.

use std::fmt;

/// Line/column location in source text.
///
/// Lines are zero-based. Columns start at `-1` on the first line (nothing
/// consumed yet) and at `0` after every newline.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    line: u32,
    column: i32,
}

impl Position {
    /// Position before the first character of a source has been consumed.
    pub const START: Position = Position {
        line: 0,
        column: -1,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: i32) -> Self {
        Position { line, column }
    }

    #[inline]
    pub const fn line(self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn column(self) -> i32 {
        self.column
    }

    #[inline]
    pub fn increment_column(&mut self) {
        self.column = self.column.saturating_add(1);
    }

    /// Move to the next line.
    ///
    /// The column is left untouched; callers reset it with
    /// [`set_column`](Self::set_column).
    #[inline]
    pub fn increment_line(&mut self) {
        self.line = self.line.saturating_add(1);
    }

    #[inline]
    pub fn set_column(&mut self, column: i32) {
        self.column = column;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
