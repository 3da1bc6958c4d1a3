//! Position tracking driven by cursor observers.
//!
//! The tracker is shared by reference between the scanning loop (which takes
//! snapshots) and the observers registered on the cursor (which advance it),
//! so it mutates through a `Cell`.

use std::cell::Cell;

use gib_ir::Position;
use gib_lexer_core::LookaheadCursor;

/// Mutable line/column counter with copy-out snapshots.
#[derive(Debug, Default)]
pub struct PositionTracker {
    pos: Cell<Position>,
}

impl PositionTracker {
    /// Create a tracker at [`Position::START`].
    pub fn new() -> Self {
        Self::starting_at(Position::START)
    }

    pub fn starting_at(pos: Position) -> Self {
        PositionTracker {
            pos: Cell::new(pos),
        }
    }

    /// Copy of the current position, unaffected by later updates.
    #[inline]
    pub fn snapshot(&self) -> Position {
        self.pos.get()
    }

    #[inline]
    pub fn increment_column(&self) {
        self.update(Position::increment_column);
    }

    /// Advance the line. The column must be reset separately.
    #[inline]
    pub fn increment_line(&self) {
        self.update(Position::increment_line);
    }

    #[inline]
    pub fn set_column(&self, column: i32) {
        self.update(|pos| pos.set_column(column));
    }

    /// Register the two tracking observers on `cursor`.
    ///
    /// Order matters: the column observer runs first, so a newline bumps the
    /// column and then the line observer resets it to 0.
    pub fn attach<'o>(&'o self, cursor: &mut LookaheadCursor<'o, char>) {
        cursor.add_observer(move |_: &char| self.increment_column());
        cursor.add_observer(move |c: &char| {
            if *c == '\n' {
                self.increment_line();
                self.set_column(0);
            }
        });
    }

    fn update(&self, f: impl FnOnce(&mut Position)) {
        let mut pos = self.pos.get();
        f(&mut pos);
        self.pos.set(pos);
    }
}

#[cfg(test)]
mod tests;
