//! Lookahead cursor over a fixed sequence.
//!
//! The cursor starts *before* the first element (`index == -1`). Every call to
//! [`consume`](LookaheadCursor::consume) moves it forward by exactly one,
//! whether or not an element is there. Reads never fault: anything outside the
//! sequence comes back as `None`.
//!
//! # Observers
//!
//! Observers are run synchronously, in registration order, on every
//! successful consumption. Lookahead helpers (`peek`, `has_next`) never notify.
//! Callers that track positions through observers therefore stay correct no
//! matter how they structure their lookahead.

use std::fmt;

/// Callback run with each consumed element.
pub type Observer<'o, T> = Box<dyn FnMut(&T) + 'o>;

/// Handle returned by [`LookaheadCursor::add_observer`], used for removal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObserverId(u32);

/// Consume-with-lookahead reader over a fixed sequence of `T`.
///
/// `'o` bounds what observers may borrow; a lexer can register closures that
/// borrow a tracker living on its stack.
pub struct LookaheadCursor<'o, T> {
    elements: Vec<T>,
    /// Index of the last consumed element. `-1` before the first consume.
    index: isize,
    observers: Vec<(ObserverId, Observer<'o, T>)>,
    next_observer_id: u32,
}

impl<'o, T> LookaheadCursor<'o, T> {
    /// Create a cursor positioned before the first element.
    pub fn new(elements: impl Into<Vec<T>>) -> Self {
        LookaheadCursor {
            elements: elements.into(),
            index: -1,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Create a cursor with an initial list of observers, run in list order.
    pub fn with_observers(
        elements: impl Into<Vec<T>>,
        observers: impl IntoIterator<Item = Observer<'o, T>>,
    ) -> Self {
        let mut cursor = Self::new(elements);
        for observer in observers {
            cursor.register(observer);
        }
        cursor
    }

    /// Advance by one and return the element now under the cursor.
    ///
    /// Returns `None` without notifying observers once the sequence is
    /// exhausted. The index still advances in that case.
    pub fn consume(&mut self) -> Option<&T> {
        self.index += 1;
        let element = slot(&self.elements, self.index)?;
        for (_, observer) in &mut self.observers {
            observer(element);
        }
        Some(element)
    }

    /// Element under the cursor, `None` before the first consume or past the end.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        slot(&self.elements, self.index)
    }

    /// Element `offset` places from the cursor, without advancing.
    ///
    /// `peek(1)` is what the next [`consume`](Self::consume) returns. Negative
    /// offsets look behind.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&T> {
        self.index
            .checked_add(offset)
            .and_then(|i| slot(&self.elements, i))
    }

    /// Element two places ahead; sugar for `peek(2)`.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        self.peek(2)
    }

    /// Whether another [`consume`](Self::consume) would return an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.peek(1).is_some()
    }

    /// Index of the last consumed element; `-1` before the first consume.
    ///
    /// Keeps growing past `len()` if the caller consumes beyond the end.
    #[inline]
    pub fn index(&self) -> isize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Register an observer to run after the existing ones.
    pub fn add_observer(&mut self, observer: impl FnMut(&T) + 'o) -> ObserverId {
        self.register(Box::new(observer))
    }

    /// Unregister an observer. Returns `false` if the handle is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn register(&mut self, observer: Observer<'o, T>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }
}

impl<T: fmt::Debug> fmt::Debug for LookaheadCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookaheadCursor")
            .field("index", &self.index)
            .field("len", &self.elements.len())
            .field("current", &self.current())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Bounds-checked access by signed index.
#[inline]
fn slot<T>(elements: &[T], index: isize) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| elements.get(i))
}
