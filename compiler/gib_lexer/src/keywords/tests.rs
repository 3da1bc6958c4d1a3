use super::*;

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("let"), Some(TokenKind::KwLet));
    assert_eq!(lookup("const"), Some(TokenKind::KwConst));
    assert_eq!(lookup("var"), Some(TokenKind::KwVar));
}

#[test]
fn non_keywords_are_none() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("lets"), None);
    assert_eq!(lookup("le"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("Let"), None);
    assert_eq!(lookup("CONST"), None);
    assert_eq!(lookup("vaR"), None);
}

#[test]
fn every_keyword_kind_has_a_spelling() {
    let table: Vec<TokenKind> = ["let", "const", "var"]
        .iter()
        .filter_map(|text| lookup(text))
        .collect();
    let expected: Vec<TokenKind> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_keyword())
        .collect();
    assert_eq!(table, expected);
}

#[test]
fn classify_falls_back_to_identifier() {
    assert_eq!(classify("var"), TokenKind::KwVar);
    assert_eq!(classify("value"), TokenKind::Identifier);
}
