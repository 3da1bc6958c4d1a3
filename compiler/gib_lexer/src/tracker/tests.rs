use super::*;

#[test]
fn new_tracker_starts_before_first_column() {
    let tracker = PositionTracker::new();
    assert_eq!(tracker.snapshot(), Position::START);
    assert_eq!(PositionTracker::default().snapshot(), Position::START);
}

#[test]
fn snapshot_is_independent_of_later_updates() {
    let tracker = PositionTracker::starting_at(Position::new(1, 1));
    let before = tracker.snapshot();
    tracker.increment_column();
    tracker.increment_line();
    assert_eq!(before, Position::new(1, 1));
    assert_eq!(tracker.snapshot(), Position::new(2, 2));
}

#[test]
fn set_column_overrides() {
    let tracker = PositionTracker::starting_at(Position::new(0, 9));
    tracker.set_column(0);
    assert_eq!(tracker.snapshot(), Position::new(0, 0));
}

#[test]
fn attached_tracker_counts_columns() {
    let tracker = PositionTracker::new();
    let mut cursor = LookaheadCursor::new("ab".chars().collect::<Vec<_>>());
    tracker.attach(&mut cursor);

    cursor.consume();
    assert_eq!(tracker.snapshot(), Position::new(0, 0));
    cursor.consume();
    assert_eq!(tracker.snapshot(), Position::new(0, 1));
}

#[test]
fn newline_moves_to_column_zero_of_next_line() {
    let tracker = PositionTracker::new();
    let mut cursor = LookaheadCursor::new("a\nb".chars().collect::<Vec<_>>());
    tracker.attach(&mut cursor);

    cursor.consume();
    cursor.consume();
    assert_eq!(tracker.snapshot(), Position::new(1, 0));
    cursor.consume();
    assert_eq!(tracker.snapshot(), Position::new(1, 1));
}

#[test]
fn peeking_does_not_move_tracker() {
    let tracker = PositionTracker::new();
    let mut cursor = LookaheadCursor::new("\n\n".chars().collect::<Vec<_>>());
    tracker.attach(&mut cursor);

    let _ = cursor.peek(1);
    let _ = cursor.peek_next();
    assert_eq!(tracker.snapshot(), Position::START);
}

#[test]
fn attach_registers_two_observers() {
    let tracker = PositionTracker::new();
    let mut cursor = LookaheadCursor::new(Vec::new());
    tracker.attach(&mut cursor);
    assert_eq!(cursor.observer_count(), 2);
}
