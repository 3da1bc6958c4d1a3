//! Token kinds for Gibbous.

use std::fmt;

/// Token kinds for Gibbous.
///
/// The set is closed. Keyword kinds are never scanned directly; the lexer
/// reclassifies identifier-shaped lexemes through its keyword table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Equals,
    /// `==`
    DoubleEquals,
    /// String literal body, quotes excluded: `"hello"`
    String,
    /// Run of ASCII letters that is not a keyword
    Identifier,
    /// Run of ASCII digits
    Integer,
    /// `let`
    KwLet,
    /// `const`
    KwConst,
    /// `var`
    KwVar,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Equals,
        TokenKind::DoubleEquals,
        TokenKind::String,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::KwLet,
        TokenKind::KwConst,
        TokenKind::KwVar,
    ];

    /// Stable upper-snake name used in dumps and diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Equals => "EQUALS",
            TokenKind::DoubleEquals => "DOUBLE_EQUALS",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::KwLet => "KW_LET",
            TokenKind::KwConst => "KW_CONST",
            TokenKind::KwVar => "KW_VAR",
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwLet | TokenKind::KwConst | TokenKind::KwVar
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
