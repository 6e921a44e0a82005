use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;

/// Cursor that yields at most `count` inner elements
///
/// Once the bound is reached the inner cursor is not advanced again.
#[derive(Debug, Clone)]
pub struct Take<C> {
    inner: C,
    count: usize,
    taken: usize,
}

impl<C> Take<C> {
    pub fn new(inner: C, count: usize) -> Self {
        Take {
            inner,
            count,
            taken: 0,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.taken = 0;
    }

    fn move_next(&mut self) -> bool {
        if self.taken >= self.count {
            // Past the bound: park beyond it so `current` reads nothing.
            self.taken = self.count.saturating_add(1);
            return false;
        }
        if self.inner.move_next() {
            self.taken += 1;
            true
        } else {
            self.taken = self.count.saturating_add(1);
            false
        }
    }

    fn current(&self) -> Option<Self::Element> {
        if self.taken == 0 || self.taken > self.count {
            return None;
        }
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len().map(|len| len.min(self.count))
    }

    fn known_at(&self, index: usize) -> Option<Self::Element> {
        if index < self.count {
            self.inner.known_at(index)
        } else {
            None
        }
    }
}

/// Extension trait adding `.take()` to any sequence
pub trait TakeExt: IntoAdapter + Sized {
    /// Yield at most `count` elements
    fn take(self, count: usize) -> Adapter<Take<Self::Cursor>> {
        Adapter::new(Take::new(self.into_adapter().into_cursor(), count))
    }
}

impl<S: IntoAdapter> TakeExt for S {}

/// Convenience function to keep a sequence's first `count` elements
pub fn take<S: IntoAdapter>(source: S, count: usize) -> Adapter<Take<S::Cursor>> {
    source.take(count)
}
