use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;

/// Cursor that discards the first `count` inner elements
///
/// The discard happens lazily on the first `move_next`. Count and indexer
/// carry over with the offset applied.
#[derive(Debug, Clone)]
pub struct Skip<C> {
    inner: C,
    count: usize,
    skipped: bool,
}

impl<C> Skip<C> {
    pub fn new(inner: C, count: usize) -> Self {
        Skip {
            inner,
            count,
            skipped: false,
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.skipped = false;
    }

    fn move_next(&mut self) -> bool {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                if !self.inner.move_next() {
                    return false;
                }
            }
        }
        self.inner.move_next()
    }

    fn current(&self) -> Option<Self::Element> {
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner
            .known_len()
            .map(|len| len.saturating_sub(self.count))
    }

    fn known_at(&self, index: usize) -> Option<Self::Element> {
        self.inner.known_at(index.checked_add(self.count)?)
    }
}

/// Extension trait adding `.skip()` to any sequence
pub trait SkipExt: IntoAdapter + Sized {
    /// Pass over the first `count` elements
    fn skip(self, count: usize) -> Adapter<Skip<Self::Cursor>> {
        Adapter::new(Skip::new(self.into_adapter().into_cursor(), count))
    }
}

impl<S: IntoAdapter> SkipExt for S {}

/// Convenience function to drop a sequence's first `count` elements
pub fn skip<S: IntoAdapter>(source: S, count: usize) -> Adapter<Skip<S::Cursor>> {
    source.skip(count)
}
