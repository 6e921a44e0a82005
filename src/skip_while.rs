use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::counting::Counting;
use crate::cursor::Cursor;

/// Cursor that discards inner elements while a predicate holds
///
/// The first failing element and everything after it are yielded; the
/// predicate is not consulted again once it has failed.
#[derive(Clone)]
pub struct SkipWhile<C, P> {
    inner: C,
    predicate: P,
    skipping: bool,
}

impl<C, P> SkipWhile<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        SkipWhile {
            inner,
            predicate,
            skipping: true,
        }
    }
}

impl<C, P> Cursor for SkipWhile<C, P>
where
    C: Cursor,
    P: Fn(&C::Element) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
        self.skipping = true;
    }

    fn move_next(&mut self) -> bool {
        if !self.skipping {
            return self.inner.move_next();
        }
        while self.inner.move_next() {
            let keep = self
                .inner
                .current()
                .is_some_and(|element| !(self.predicate)(&element));
            if keep {
                self.skipping = false;
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<Self::Element> {
        if self.skipping {
            return None;
        }
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Index-aware [`SkipWhile`]; the index counts inner advances from 0
#[derive(Clone)]
pub struct SkipWhileIndexed<C, P> {
    inner: Counting<C>,
    predicate: P,
    skipping: bool,
}

impl<C, P> SkipWhileIndexed<C, P> {
    pub fn new(inner: C, predicate: P) -> Self {
        SkipWhileIndexed {
            inner: Counting::new(inner),
            predicate,
            skipping: true,
        }
    }
}

impl<C, P> Cursor for SkipWhileIndexed<C, P>
where
    C: Cursor,
    P: Fn(&C::Element, usize) -> bool,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
        self.skipping = true;
    }

    fn move_next(&mut self) -> bool {
        if !self.skipping {
            return self.inner.move_next();
        }
        while self.inner.move_next() {
            let Some(index) = self.inner.index() else {
                continue;
            };
            let keep = self
                .inner
                .current()
                .is_some_and(|element| !(self.predicate)(&element, index));
            if keep {
                self.skipping = false;
                return true;
            }
        }
        false
    }

    fn current(&self) -> Option<Self::Element> {
        if self.skipping {
            return None;
        }
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Extension trait adding `.skip_while()` to any sequence
pub trait SkipWhileExt: IntoAdapter + Sized {
    /// Pass over the leading elements that satisfy `predicate`
    fn skip_while<P>(self, predicate: P) -> Adapter<SkipWhile<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>) -> bool,
    {
        Adapter::new(SkipWhile::new(self.into_adapter().into_cursor(), predicate))
    }

    /// Index-aware [`SkipWhileExt::skip_while`]
    fn skip_while_indexed<P>(self, predicate: P) -> Adapter<SkipWhileIndexed<Self::Cursor, P>>
    where
        P: Fn(&ElementOf<Self>, usize) -> bool,
    {
        Adapter::new(SkipWhileIndexed::new(
            self.into_adapter().into_cursor(),
            predicate,
        ))
    }
}

impl<S: IntoAdapter> SkipWhileExt for S {}

/// Convenience function to drop a sequence's leading matches
pub fn skip_while<S, P>(source: S, predicate: P) -> Adapter<SkipWhile<S::Cursor, P>>
where
    S: IntoAdapter,
    P: Fn(&ElementOf<S>) -> bool,
{
    source.skip_while(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::seq;
    use std::cell::Cell;

    #[test]
    fn test_skip_while_prefix() {
        let data = [0, 1, 2, 3, 4];
        let rest: Vec<i32> = seq(&data).skip_while(|v| **v < 2).iter().copied().collect();
        assert_eq!(rest, vec![2, 3, 4]);
    }

    #[test]
    fn test_skip_while_keeps_later_matches() {
        let data = [1, 1, 5, 1, 1];
        let rest: Vec<i32> = seq(&data).skip_while(|v| **v == 1).iter().copied().collect();
        assert_eq!(rest, vec![5, 1, 1]);
    }

    #[test]
    fn test_skip_while_everything() {
        let data = [0, 1, 2];
        let mut cursor = seq(&data).skip_while(|_| true).cursor();
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
    }

    #[test]
    fn test_skip_while_stops_consulting_predicate() {
        let calls = Cell::new(0);
        let data = [0, 1, 2, 3, 4];
        let count = seq(&data)
            .skip_while(|v| {
                calls.set(calls.get() + 1);
                **v < 1
            })
            .iter()
            .count();
        assert_eq!(count, 4);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_skip_while_indexed() {
        let data = [9, 9, 9, 0, 9];
        let rest: Vec<i32> = seq(&data)
            .skip_while_indexed(|_, i| i < 3)
            .iter()
            .copied()
            .collect();
        assert_eq!(rest, vec![0, 9]);
    }

    #[test]
    fn test_skip_while_reset() {
        let data = [0, 1, 2];
        let mut cursor = seq(&data).skip_while(|v| **v == 0).cursor();
        assert!(cursor.move_next());
        cursor.reset();
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&1));
    }
}
