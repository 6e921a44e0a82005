use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::counting::Counting;
use crate::cursor::Cursor;

/// Cursor that yields inner elements while a predicate holds
///
/// The first failing element ends the sequence and is not yielded.
#[derive(Clone)]
pub struct TakeWhile<C, P> {
    inner: C,
    predicate: P,
    done: bool,
}

impl<C, P> TakeWhile<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        TakeWhile {
            inner,
            predicate,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Element) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
        self.done = false;
    }

    fn move_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        let taken = self.inner.move_next()
            && self
                .inner
                .current()
                .is_some_and(|element| (self.predicate)(&element));
        self.done = !taken;
        taken
    }

    fn current(&self) -> Option<Self::Element> {
        if self.done {
            return None;
        }
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Index-aware [`TakeWhile`]; the index counts inner advances from 0
#[derive(Clone)]
pub struct TakeWhileIndexed<C, P> {
    inner: Counting<C>,
    predicate: P,
    done: bool,
}

impl<C, P> TakeWhileIndexed<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        TakeWhileIndexed {
            inner: Counting::new(inner),
            predicate,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeWhileIndexed<C, P>
where
    C: Cursor,
    P: Fn(&C::Element, usize) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
        self.done = false;
    }

    fn move_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        let taken = self.inner.move_next()
            && match (self.inner.current(), self.inner.index()) {
                (Some(element), Some(index)) => (self.predicate)(&element, index),
                _ => false,
            };
        self.done = !taken;
        taken
    }

    fn current(&self) -> Option<Self::Element> {
        if self.done {
            return None;
        }
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Extension trait adding `.take_while()` to any sequence
pub trait TakeWhileExt: IntoAdapter + Sized {
    /// Yield the leading elements that satisfy `predicate`
    fn take_while<P>(self, predicate: P) -> Adapter<TakeWhile<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>) -> bool,
    {
        Adapter::new(TakeWhile::new(self.into_adapter().into_cursor(), predicate))
    }

    /// Index-aware [`TakeWhileExt::take_while`]
    fn take_while_indexed<P>(self, predicate: P) -> Adapter<TakeWhileIndexed<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>, usize) -> bool,
    {
        Adapter::new(TakeWhileIndexed::new(
            self.into_adapter().into_cursor(),
            predicate,
        ))
    }
}

impl<S: IntoAdapter> TakeWhileExt for S {}

/// Convenience function to keep a sequence's leading matches
pub fn take_while<S, P>(source: S, predicate: P) -> Adapter<TakeWhile<S::Cursor, P>>
where
    S: IntoAdapter,
    P: Fn(&ElementOf<S>) -> bool,
{
    source.take_while(predicate)
}
