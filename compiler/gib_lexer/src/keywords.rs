//! Keyword resolution.
//!
//! Keywords are never scanned directly. The lexer first collects a run of
//! ASCII letters, then reclassifies it here. Matching is exact and
//! case-sensitive: `Let` stays an identifier.

use gib_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for a regular identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "let" => Some(TokenKind::KwLet),
        "const" => Some(TokenKind::KwConst),
        "var" => Some(TokenKind::KwVar),
        _ => None,
    }
}

/// Kind for an identifier-shaped lexeme.
#[inline]
pub(crate) fn classify(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests;
