//! Gibbous IR - token model shared by the front end.
//!
//! This crate contains the data produced by the lexer:
//! - [`Position`] for line/column locations
//! - [`Token`] and [`TokenKind`] for lexer output
//!
//! Consumers (parsers, tooling) depend on this crate without pulling in the
//! scanner itself.
//!
//! # Serialization
//!
//! The `serde` feature derives `Serialize`/`Deserialize` on every public type.

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind};
