use super::*;

#[test]
fn start_is_before_first_column() {
    let pos = Position::START;
    assert_eq!(pos.line(), 0);
    assert_eq!(pos.column(), -1);
    assert_eq!(Position::default(), pos);
}

#[test]
fn increment_column_advances_by_one() {
    let mut pos = Position::START;
    pos.increment_column();
    assert_eq!(pos, Position::new(0, 0));
    pos.increment_column();
    assert_eq!(pos, Position::new(0, 1));
}

#[test]
fn increment_line_keeps_column() {
    let mut pos = Position::new(0, 5);
    pos.increment_line();
    assert_eq!(pos, Position::new(1, 5));
    pos.set_column(0);
    assert_eq!(pos, Position::new(1, 0));
}

#[test]
fn copies_are_independent() {
    let mut pos = Position::new(2, 3);
    let snapshot = pos;
    pos.increment_column();
    pos.increment_line();
    assert_eq!(snapshot, Position::new(2, 3));
    assert_eq!(pos, Position::new(3, 4));
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Position::START.to_string(), "0:-1");
    assert_eq!(Position::new(4, 12).to_string(), "4:12");
}

#[test]
fn increments_saturate() {
    let mut pos = Position::new(u32::MAX, i32::MAX);
    pos.increment_column();
    pos.increment_line();
    assert_eq!(pos, Position::new(u32::MAX, i32::MAX));
}
