use super::*;

#[test]
fn error_construction() {
    let start = Position::new(2, 4);
    let err = LexError::unterminated_string(start);
    assert_eq!(err, LexError::UnterminatedString { start });
    assert_eq!(err.position(), start);
}

#[test]
fn unrecognized_character_keeps_char() {
    let err = LexError::unrecognized_character('@', Position::new(0, 3));
    match err {
        LexError::UnrecognizedCharacter { found, start } => {
            assert_eq!(found, '@');
            assert_eq!(start, Position::new(0, 3));
        }
        other => panic!("expected UnrecognizedCharacter, got {other:?}"),
    }
}

#[test]
fn messages_name_the_position() {
    let err = LexError::unterminated_string(Position::new(1, 0));
    assert_eq!(
        err.to_string(),
        "end of file reached while lexing string starting at 1:0"
    );

    let err = LexError::unrecognized_character('#', Position::START);
    assert_eq!(
        err.to_string(),
        "lexing failed at 0:-1: unrecognized character '#'"
    );
}

#[test]
fn error_equality() {
    let a = LexError::unrecognized_character('$', Position::new(0, 1));
    let b = LexError::unrecognized_character('$', Position::new(0, 1));
    let c = LexError::unrecognized_character('$', Position::new(0, 2));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&LexError::unterminated_string(Position::START));
}
