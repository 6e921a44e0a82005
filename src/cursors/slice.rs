use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    At(usize),
    End,
}

/// Cursor over a borrowed slice
///
/// Backs arrays, `Vec` (whether used as a list or as a stack) and any other
/// contiguous view. Knows its count and reads by position in O(1).
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    state: State,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor {
            data,
            state: State::Start,
        }
    }

    /// The underlying slice
    pub fn source(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Element = &'a T;

    const HAS_COUNT: bool = true;
    const HAS_INDEXER: bool = true;

    fn reset(&mut self) {
        self.state = State::Start;
    }

    fn move_next(&mut self) -> bool {
        self.state = match self.state {
            State::Start if !self.data.is_empty() => State::At(0),
            State::At(position) if position + 1 < self.data.len() => State::At(position + 1),
            _ => State::End,
        };
        self.state != State::End
    }

    fn current(&self) -> Option<Self::Element> {
        match self.state {
            State::At(position) => self.data.get(position),
            State::Start | State::End => None,
        }
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.data.len())
    }

    fn known_at(&self, index: usize) -> Option<Self::Element> {
        self.data.get(index)
    }
}

impl<'a, T> IntoAdapter for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_adapter(self) -> Adapter<Self::Cursor> {
        Adapter::new(SliceCursor::new(self))
    }
}

impl<'a, T, const N: usize> IntoAdapter for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_adapter(self) -> Adapter<Self::Cursor> {
        Adapter::new(SliceCursor::new(self))
    }
}

impl<'a, T> IntoAdapter for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_adapter(self) -> Adapter<Self::Cursor> {
        Adapter::new(SliceCursor::new(self))
    }
}
