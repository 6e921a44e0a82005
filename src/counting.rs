use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;

/// Cursor that passes its inner stream through while tracking the position
///
/// The index-aware operators sit on top of this: the index is the number of
/// successful inner advances minus one, so it counts inner positions from 0
/// whether or not the layer above keeps the element.
#[derive(Debug, Clone)]
pub struct Counting<C> {
    inner: C,
    advanced: usize,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Counting { inner, advanced: 0 }
    }

    /// Zero-based position of the current element
    pub fn index(&self) -> Option<usize> {
        self.advanced.checked_sub(1)
    }
}

impl<C: Cursor> Cursor for Counting<C> {
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.advanced = 0;
    }

    fn move_next(&mut self) -> bool {
        if self.inner.move_next() {
            self.advanced += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> Option<Self::Element> {
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }

    fn known_at(&self, index: usize) -> Option<Self::Element> {
        self.inner.known_at(index)
    }
}

/// Extension trait adding `.counted()` to any sequence
pub trait CountingExt: IntoAdapter + Sized {
    /// Track how many times the sequence has advanced
    fn counted(self) -> Adapter<Counting<Self::Cursor>> {
        Adapter::new(Counting::new(self.into_adapter().into_cursor()))
    }
}

impl<S: IntoAdapter> CountingExt for S {}

/// Convenience function to wrap a sequence in a [`Counting`] cursor
pub fn counted<S: IntoAdapter>(source: S) -> Adapter<Counting<S::Cursor>> {
    source.counted()
}
