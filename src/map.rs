use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::counting::Counting;
use crate::cursor::Cursor;

/// Cursor that transforms each element of its inner cursor
///
/// Strictly 1:1 with the inner stream, so count and indexer carry over. The
/// selector runs once per advance and `current` hands out the stored result.
#[derive(Clone)]
pub struct Select<C, F, U> {
    inner: C,
    selector: F,
    current: Option<U>,
}

impl<C, F, U> Select<C, F, U> {
    pub fn new(inner: C, selector: F) -> Self {
        Select {
            inner,
            selector,
            current: None,
        }
    }
}

impl<C, F, U> Cursor for Select<C, F, U>
where
    C: Cursor,
    F: Fn(C::Element) -> U,
    U: Clone,
{
    type Element = U;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        let moved = self.inner.move_next();
        self.current = if moved {
            self.inner.current().map(&self.selector)
        } else {
            None
        };
        moved
    }

    fn current(&self) -> Option<U> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }

    fn known_at(&self, index: usize) -> Option<U> {
        self.inner.known_at(index).map(&self.selector)
    }
}

/// Index-aware [`Select`]: the selector also receives the element's position
#[derive(Clone)]
pub struct SelectIndexed<C, F, U> {
    inner: Counting<C>,
    selector: F,
    current: Option<U>,
}

impl<C, F, U> SelectIndexed<C, F, U> {
    pub fn new(inner: C, selector: F) -> Self {
        SelectIndexed {
            inner: Counting::new(inner),
            selector,
            current: None,
        }
    }
}

impl<C, F, U> Cursor for SelectIndexed<C, F, U>
where
    C: Cursor,
    F: Fn(C::Element, usize) -> U,
    U: Clone,
{
    type Element = U;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        let moved = self.inner.move_next();
        self.current = match (moved, self.inner.index()) {
            (true, Some(index)) => self
                .inner
                .current()
                .map(|element| (self.selector)(element, index)),
            _ => None,
        };
        moved
    }

    fn current(&self) -> Option<U> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }

    fn known_at(&self, index: usize) -> Option<U> {
        self.inner
            .known_at(index)
            .map(|element| (self.selector)(element, index))
    }
}

/// Extension trait adding `.select()` to any sequence
pub trait SelectExt: IntoAdapter + Sized {
    /// Transform every element
    fn select<F, U>(self, selector: F) -> Adapter<Select<Self::Cursor, F, U>>
    where
        F: Fn(ElementOf<Self>) -> U,
        U: Clone,
    {
        Adapter::new(Select::new(self.into_adapter().into_cursor(), selector))
    }

    /// Transform every element together with its zero-based position
    fn select_indexed<F, U>(self, selector: F) -> Adapter<SelectIndexed<Self::Cursor, F, U>>
    where
        F: Fn(ElementOf<Self>, usize) -> U,
        U: Clone,
    {
        Adapter::new(SelectIndexed::new(
            self.into_adapter().into_cursor(),
            selector,
        ))
    }
}

impl<S: IntoAdapter> SelectExt for S {}

/// Convenience function to transform every element of a sequence
pub fn select<S, F, U>(source: S, selector: F) -> Adapter<Select<S::Cursor, F, U>>
where
    S: IntoAdapter,
    F: Fn(ElementOf<S>) -> U,
    U: Clone,
{
    source.select(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::seq;
    use crate::filter::FilterExt;
    use crate::skip_while::SkipWhileExt;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Small(i32),
        Large(i32),
    }

    #[test]
    fn test_select_doubles() {
        let data = [0, 1, 2, 3, 4];
        let doubled: Vec<i32> = seq(&data).select(|v| v * 2).into_iter().collect();
        assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_select_to_enum() {
        let data = [1, 50];
        let tokens: Vec<Token> = seq(&data)
            .select(|v| {
                if *v < 10 {
                    Token::Small(*v)
                } else {
                    Token::Large(*v)
                }
            })
            .into_iter()
            .collect();
        assert_eq!(tokens, vec![Token::Small(1), Token::Large(50)]);
    }

    #[test]
    fn test_select_chaining_round_trip() {
        let data = [3, 1, 4, 1, 5];
        let back: Vec<i32> = seq(&data)
            .select(|v| i64::from(*v) + 100)
            .select(|v| (v - 100) as i32)
            .into_iter()
            .collect();
        assert_eq!(back, data);
    }

    #[test]
    fn test_select_keeps_capabilities() {
        let data = [1, 2, 3];
        let adapter = seq(&data).select(|v| v + 1);
        assert_eq!(adapter.len(), Ok(3));
        assert_eq!(adapter.get(2), Ok(4));
    }

    #[test]
    fn test_select_indexed_passes_position() {
        let data = ["a", "b", "c"];
        let labelled: Vec<String> = seq(&data)
            .select_indexed(|v, i| format!("{i}{v}"))
            .into_iter()
            .collect();
        assert_eq!(labelled, vec!["0a", "1b", "2c"]);
    }

    #[test]
    fn test_select_indexed_positional_read() {
        let data = [10, 20, 30];
        let adapter = seq(&data).select_indexed(|v, i| v + i as i32);
        assert_eq!(adapter.get(2), Ok(32));
    }

    #[test]
    fn test_select_current_outside_window() {
        let data = [1];
        let mut cursor = seq(&data).select(|v| v * 10).cursor();
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(10));
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_select_runs_once_per_element_under_filter() {
        let calls = Cell::new(0);
        let data = [0, 1, 2, 3, 4];
        let kept: Vec<i32> = seq(&data)
            .select(|v| {
                calls.set(calls.get() + 1);
                *v
            })
            .filter(|v| *v % 2 == 0)
            .into_iter()
            .collect();
        assert_eq!(kept, vec![0, 2, 4]);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_select_repeated_reads_reuse_result() {
        let calls = Cell::new(0);
        let data = [7];
        let adapter = seq(&data).select(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        let mut cursor = adapter.cursor();
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(14));
        assert_eq!(cursor.current(), Some(14));
        assert_eq!(calls.get(), 1);
        cursor.reset();
        assert_eq!(cursor.current(), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_select_indexed_runs_once_per_element_under_skip_while() {
        let calls = Cell::new(0);
        let data = [5, 6, 7];
        let kept: Vec<usize> = seq(&data)
            .select_indexed(|_, i| {
                calls.set(calls.get() + 1);
                i
            })
            .skip_while(|i| *i < 1)
            .into_iter()
            .collect();
        assert_eq!(kept, vec![1, 2]);
        assert_eq!(calls.get(), 3);
    }
}
