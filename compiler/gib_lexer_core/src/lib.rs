//! Low-level reading primitives for the Gibbous lexer.
//!
//! Provides [`LookaheadCursor`], a consume/peek reader over a fixed sequence
//! that notifies observers on every consumption. The crate has no knowledge
//! of tokens or positions; the lexer layers those on top through observers.

mod cursor;

pub use cursor::{LookaheadCursor, Observer, ObserverId};
