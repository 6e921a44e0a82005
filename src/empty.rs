use crate::adapter::Adapter;
use crate::cursor::Cursor;
use std::marker::PhantomData;

/// Stateless, zero-sized generator of no elements
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Cursor for Empty<T> {
    type Element = T;

    const HAS_COUNT: bool = true;
    const HAS_INDEXER: bool = true;

    fn reset(&mut self) {}

    fn move_next(&mut self) -> bool {
        false
    }

    fn current(&self) -> Option<T> {
        None
    }

    fn known_len(&self) -> Option<usize> {
        Some(0)
    }
}

/// The empty sequence of `T`
pub fn empty<T>() -> Adapter<Empty<T>> {
    Adapter::new(Empty::new())
}
