use crate::capability::{Capabilities, Capability};
use crate::cursor::Cursor;
use crate::error::{Result, SeqError, fail};
use std::iter::FusedIterator;

/// The public operator surface over a cursor
///
/// An adapter is a recipe, not a traversal: it keeps one pristine cursor and
/// hands out a fresh copy (reset to the pre-first state) for every
/// traversal. Two traversals of the same adapter, including both halves of
/// `a.concat(&a)`, never share position.
///
/// Operators consume the adapter and return a new one wrapping a new cursor
/// type, so composition happens entirely in the type system.
#[derive(Debug, Clone, Copy)]
pub struct Adapter<C> {
    prototype: C,
}

impl<C: Cursor> Adapter<C> {
    pub const HAS_COUNT: bool = C::HAS_COUNT;
    pub const HAS_INDEXER: bool = C::HAS_INDEXER;

    pub fn new(cursor: C) -> Self {
        Adapter { prototype: cursor }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::of::<C>()
    }

    /// The untouched cursor, for the constant-time accessors
    pub(crate) fn prototype(&self) -> &C {
        &self.prototype
    }

    /// A fresh cursor positioned before the first element
    pub fn cursor(&self) -> C
    where
        C: Clone,
    {
        let mut cursor = self.prototype.clone();
        cursor.reset();
        cursor
    }

    /// Take the cursor out of the adapter, rewound
    pub fn into_cursor(self) -> C {
        let mut cursor = self.prototype;
        cursor.reset();
        cursor
    }

    /// Iterate a fresh traversal; the cursor is disposed when the iterator drops
    pub fn iter(&self) -> CursorIter<C>
    where
        C: Clone,
    {
        CursorIter::new(self.cursor())
    }

    /// Constant-time element count
    ///
    /// Fails with [`SeqError::Unsupported`] when the cursor type does not
    /// know its count; use the `count` terminal to count by traversal.
    pub fn len(&self) -> Result<usize> {
        match self.prototype.known_len() {
            Some(len) if C::HAS_COUNT => Ok(len),
            _ => fail("len", SeqError::Unsupported(Capability::Count)),
        }
    }

    /// Constant-time positional read
    pub fn get(&self, index: usize) -> Result<C::Element> {
        if !C::HAS_INDEXER {
            return fail("get", SeqError::Unsupported(Capability::Indexer));
        }
        match self.prototype.known_at(index) {
            Some(element) => Ok(element),
            None => fail("get", SeqError::IndexOutOfRange { index }),
        }
    }
}

impl<C: Cursor> IntoIterator for Adapter<C> {
    type Item = C::Element;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.into_cursor())
    }
}

impl<'a, C: Cursor + Clone> IntoIterator for &'a Adapter<C> {
    type Item = C::Element;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drives one cursor through the std `Iterator` protocol
///
/// Dropping the iterator disposes the cursor, so an early `break`, a `?`
/// or an unwinding callback all release it.
pub struct CursorIter<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        CursorIter { cursor }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.move_next() {
            self.cursor.current()
        } else {
            None
        }
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

impl<C: Cursor> Drop for CursorIter<C> {
    fn drop(&mut self) {
        self.cursor.dispose();
    }
}

/// Conversion into an [`Adapter`]
///
/// Accepted wherever an operator takes a second sequence, so containers,
/// adapters and borrowed adapters mix freely.
pub trait IntoAdapter {
    type Cursor: Cursor;

    fn into_adapter(self) -> Adapter<Self::Cursor>;
}

/// Element type of whatever `S` converts into
pub type ElementOf<S> = <<S as IntoAdapter>::Cursor as Cursor>::Element;

impl<C: Cursor> IntoAdapter for Adapter<C> {
    type Cursor = C;

    fn into_adapter(self) -> Adapter<C> {
        self
    }
}

impl<'a, C: Cursor + Clone> IntoAdapter for &'a Adapter<C> {
    type Cursor = C;

    fn into_adapter(self) -> Adapter<C> {
        self.clone()
    }
}

/// Wrap any supported source in an adapter
pub fn seq<S: IntoAdapter>(source: S) -> Adapter<S::Cursor> {
    source.into_adapter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterExt;
    use crate::testing::Recorder;

    #[test]
    fn test_iter_matches_source() {
        let data = [3, 1, 4, 1, 5];
        let values: Vec<i32> = seq(&data).iter().copied().collect();
        assert_eq!(values, data);
    }

    #[test]
    fn test_each_traversal_is_fresh() {
        let data = [1, 2, 3];
        let adapter = seq(&data);

        let mut first = adapter.cursor();
        assert!(first.move_next());
        assert!(first.move_next());

        let mut second = adapter.cursor();
        assert!(second.move_next());
        assert_eq!(second.current(), Some(&1));
        assert_eq!(first.current(), Some(&2));
    }

    #[test]
    fn test_into_cursor_rewinds() {
        let data = [7, 8];
        let mut cursor = seq(&data).into_cursor();
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&7));
    }

    #[test]
    fn test_len_and_get_on_indexed_source() {
        let data = [10, 20, 30];
        let adapter = seq(&data);
        assert_eq!(adapter.len(), Ok(3));
        assert_eq!(adapter.get(1), Ok(&20));
        assert_eq!(
            adapter.get(3),
            Err(SeqError::IndexOutOfRange { index: 3 })
        );
    }

    #[test]
    fn test_len_refused_without_count() {
        let data = [1, 2, 3];
        let adapter = seq(&data).filter(|v| **v > 1);
        assert!(!adapter.capabilities().has_count);
        assert_eq!(
            adapter.len(),
            Err(SeqError::Unsupported(Capability::Count))
        );
        assert_eq!(
            adapter.get(0),
            Err(SeqError::Unsupported(Capability::Indexer))
        );
    }

    #[test]
    fn test_drop_disposes_on_early_break() {
        let recorder = Recorder::new(&[1, 2, 3, 4]);
        let adapter = Adapter::new(recorder.clone());

        for value in &adapter {
            if value == 2 {
                break;
            }
        }
        assert_eq!(recorder.disposals(), 1);
    }

    #[test]
    fn test_borrowed_adapter_converts() {
        let data = [1, 2];
        let adapter = seq(&data);
        let again = seq(&adapter);
        assert_eq!(again.iter().count(), 2);
    }
}
