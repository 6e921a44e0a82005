use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::counting::Counting;
use crate::cursor::Cursor;

/// Cursor that skips inner elements failing a predicate
///
/// How many elements survive is unknowable without a traversal, so neither
/// count nor indexer propagates.
#[derive(Clone)]
pub struct Where<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> Where<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        Where { inner, predicate }
    }
}

impl<C, P> Cursor for Where<C, P>
where
    C: Cursor,
    P: Fn(&C::Element) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn move_next(&mut self) -> bool {
        while self.inner.move_next() {
            if self
                .inner
                .current()
                .is_some_and(|element| (self.predicate)(&element))
            {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<Self::Element> {
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Index-aware [`Where`]
///
/// The index counts every inner advance, kept or not.
#[derive(Clone)]
pub struct WhereIndexed<C, P> {
    inner: Counting<C>,
    predicate: P,
}

impl<C, P> WhereIndexed<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        WhereIndexed {
            inner: Counting::new(inner),
            predicate,
        }
    }
}

impl<C, P> Cursor for WhereIndexed<C, P>
where
    C: Cursor,
    P: Fn(&C::Element, usize) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn move_next(&mut self) -> bool {
        while self.inner.move_next() {
            let Some(index) = self.inner.index() else {
                continue;
            };
            if self
                .inner
                .current()
                .is_some_and(|element| (self.predicate)(&element, index))
            {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<Self::Element> {
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Extension trait adding `.filter()` to any sequence
pub trait FilterExt: IntoAdapter + Sized {
    /// Keep only the elements satisfying `predicate`
    fn filter<P>(self, predicate: P) -> Adapter<Where<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>) -> bool,
    {
        Adapter::new(Where::new(self.into_adapter().into_cursor(), predicate))
    }

    /// Keep only the elements satisfying `predicate`, which also sees the
    /// element's position in the inner sequence
    fn filter_indexed<P>(self, predicate: P) -> Adapter<WhereIndexed<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>, usize) -> bool,
    {
        Adapter::new(WhereIndexed::new(
            self.into_adapter().into_cursor(),
            predicate,
        ))
    }
}

impl<S: IntoAdapter> FilterExt for S {}

/// Convenience function to filter a sequence
pub fn filter<S, P>(source: S, predicate: P) -> Adapter<Where<S::Cursor, P>>
where
    S: IntoAdapter,
    P: Fn(&ElementOf<S>) -> bool,
{
    source.filter(predicate)
}
