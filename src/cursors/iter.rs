use crate::adapter::Adapter;
use crate::cursor::Cursor;

/// Cursor over any cloneable iterator
///
/// Keeps an untouched copy of the iterator to rewind from, and the last
/// yielded item. Knows nothing about its length.
pub struct IterCursor<I: Iterator> {
    pristine: I,
    live: I,
    current: Option<I::Item>,
    exhausted: bool,
}

impl<I: Iterator + Clone> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            live: iter.clone(),
            pristine: iter,
            current: None,
            exhausted: false,
        }
    }

    /// The iterator in its original, unadvanced state
    pub fn pristine(&self) -> &I {
        &self.pristine
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        IterCursor {
            pristine: self.pristine.clone(),
            live: self.live.clone(),
            current: self.current.clone(),
            exhausted: self.exhausted,
        }
    }
}

impl<I> std::fmt::Debug for IterCursor<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor")
            .field("exhausted", &self.exhausted)
            .field("has_current", &self.current.is_some())
            .finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Element = I::Item;

    fn reset(&mut self) {
        self.live = self.pristine.clone();
        self.current = None;
        self.exhausted = false;
    }

    fn move_next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.current = self.live.next();
        self.exhausted = self.current.is_none();
        !self.exhausted
    }

    fn current(&self) -> Option<Self::Element> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.current = None;
    }
}

/// Adapt an arbitrary cloneable iterator
///
/// Each traversal replays a fresh clone of the iterator, so the adapter can
/// be enumerated any number of times.
pub fn from_iter<T>(iter: T) -> Adapter<IterCursor<T::IntoIter>>
where
    T: IntoIterator,
    T::IntoIter: Clone,
    T::Item: Clone,
{
    Adapter::new(IterCursor::new(iter.into_iter()))
}
