use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::counting::Counting;
use crate::cursor::Cursor;

/// Derives the group for an outer element
pub trait GroupSelector<T> {
    type Cursor: Cursor;

    fn select_group(&self, element: T, index: usize) -> Adapter<Self::Cursor>;
}

/// Group selector ignoring the outer position
#[derive(Debug, Clone, Copy)]
pub struct Plain<F>(pub F);

impl<T, F, G> GroupSelector<T> for Plain<F>
where
    F: Fn(T) -> G,
    G: IntoAdapter,
{
    type Cursor = G::Cursor;

    fn select_group(&self, element: T, _index: usize) -> Adapter<G::Cursor> {
        (self.0)(element).into_adapter()
    }
}

/// Group selector that also receives the outer position
#[derive(Debug, Clone, Copy)]
pub struct WithIndex<F>(pub F);

impl<T, F, G> GroupSelector<T> for WithIndex<F>
where
    F: Fn(T, usize) -> G,
    G: IntoAdapter,
{
    type Cursor = G::Cursor;

    fn select_group(&self, element: T, index: usize) -> Adapter<G::Cursor> {
        (self.0)(element, index).into_adapter()
    }
}

/// Builds the exposed element from an outer element and one of its group's
///
/// The outer element is passed lazily; flattening never reads it.
pub trait ResultSelector<T, E> {
    type Output;

    fn combine(&self, outer: impl FnOnce() -> Option<T>, inner: E) -> Option<Self::Output>;
}

/// Result selector yielding the group elements unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Flatten;

impl<T, E> ResultSelector<T, E> for Flatten {
    type Output = E;

    fn combine(&self, _outer: impl FnOnce() -> Option<T>, inner: E) -> Option<E> {
        Some(inner)
    }
}

/// Result selector pairing every group element with its outer element
#[derive(Debug, Clone, Copy)]
pub struct Combine<F>(pub F);

impl<T, E, F, U> ResultSelector<T, E> for Combine<F>
where
    F: Fn(T, E) -> U,
{
    type Output = U;

    fn combine(&self, outer: impl FnOnce() -> Option<T>, inner: E) -> Option<U> {
        Some((self.0)(outer()?, inner))
    }
}

/// Cursor flattening the groups selected from each outer element
///
/// Holds at most one live group cursor. A group is disposed as soon as it is
/// exhausted, before the next outer element is read; empty groups are passed
/// over. The result selector runs once per advance.
pub struct SelectMany<C, S, R>
where
    C: Cursor,
    S: GroupSelector<C::Element>,
    R: ResultSelector<C::Element, <S::Cursor as Cursor>::Element>,
{
    outer: Counting<C>,
    group_selector: S,
    result_selector: R,
    group: Option<S::Cursor>,
    current: Option<R::Output>,
}

impl<C, S, R> SelectMany<C, S, R>
where
    C: Cursor,
    S: GroupSelector<C::Element>,
    R: ResultSelector<C::Element, <S::Cursor as Cursor>::Element>,
{
    pub fn new(outer: C, group_selector: S, result_selector: R) -> Self {
        SelectMany {
            outer: Counting::new(outer),
            group_selector,
            result_selector,
            group: None,
            current: None,
        }
    }

    fn release_group(&mut self) {
        if let Some(mut group) = self.group.take() {
            group.dispose();
        }
    }

    fn combine_current(&self) -> Option<R::Output> {
        let inner = self.group.as_ref()?.current()?;
        self.result_selector
            .combine(|| self.outer.current(), inner)
    }
}

impl<C, S, R> Clone for SelectMany<C, S, R>
where
    C: Cursor + Clone,
    S: GroupSelector<C::Element> + Clone,
    S::Cursor: Clone,
    R: ResultSelector<C::Element, <S::Cursor as Cursor>::Element> + Clone,
    R::Output: Clone,
{
    fn clone(&self) -> Self {
        SelectMany {
            outer: self.outer.clone(),
            group_selector: self.group_selector.clone(),
            result_selector: self.result_selector.clone(),
            group: self.group.clone(),
            current: self.current.clone(),
        }
    }
}

impl<C, S, R> Cursor for SelectMany<C, S, R>
where
    C: Cursor,
    S: GroupSelector<C::Element>,
    R: ResultSelector<C::Element, <S::Cursor as Cursor>::Element>,
    R::Output: Clone,
{
    type Element = R::Output;

    fn reset(&mut self) {
        self.release_group();
        self.outer.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        loop {
            if let Some(group) = self.group.as_mut() {
                if group.move_next() {
                    self.current = self.combine_current();
                    return true;
                }
                self.release_group();
            }

            if !self.outer.move_next() {
                self.current = None;
                return false;
            }
            let (Some(element), Some(index)) = (self.outer.current(), self.outer.index()) else {
                self.current = None;
                return false;
            };
            self.group = Some(
                self.group_selector
                    .select_group(element, index)
                    .into_cursor(),
            );
        }
    }

    fn current(&self) -> Option<Self::Element> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.release_group();
        self.outer.dispose();
    }
}

/// Extension trait adding the flattening operators to any sequence
pub trait SelectManyExt: IntoAdapter + Sized {
    /// Flatten the group `selector` derives from every element
    fn select_many<F, G>(self, selector: F) -> Adapter<SelectMany<Self::Cursor, Plain<F>, Flatten>>
    where
        F: Fn(ElementOf<Self>) -> G,
        G: IntoAdapter,
        ElementOf<G>: Clone,
    {
        Adapter::new(SelectMany::new(
            self.into_adapter().into_cursor(),
            Plain(selector),
            Flatten,
        ))
    }

    /// Flatten the group `selector` derives from every element and its index
    fn select_many_indexed<F, G>(
        self,
        selector: F,
    ) -> Adapter<SelectMany<Self::Cursor, WithIndex<F>, Flatten>>
    where
        F: Fn(ElementOf<Self>, usize) -> G,
        G: IntoAdapter,
        ElementOf<G>: Clone,
    {
        Adapter::new(SelectMany::new(
            self.into_adapter().into_cursor(),
            WithIndex(selector),
            Flatten,
        ))
    }

    /// Like [`SelectManyExt::select_many`], exposing `result(outer, inner)`
    /// per group element
    fn select_many_with<F, G, P, U>(
        self,
        selector: F,
        result: P,
    ) -> Adapter<SelectMany<Self::Cursor, Plain<F>, Combine<P>>>
    where
        F: Fn(ElementOf<Self>) -> G,
        G: IntoAdapter,
        P: Fn(ElementOf<Self>, ElementOf<G>) -> U,
        U: Clone,
    {
        Adapter::new(SelectMany::new(
            self.into_adapter().into_cursor(),
            Plain(selector),
            Combine(result),
        ))
    }

    /// Like [`SelectManyExt::select_many_indexed`], exposing
    /// `result(outer, inner)`
    fn select_many_indexed_with<F, G, P, U>(
        self,
        selector: F,
        result: P,
    ) -> Adapter<SelectMany<Self::Cursor, WithIndex<F>, Combine<P>>>
    where
        F: Fn(ElementOf<Self>, usize) -> G,
        G: IntoAdapter,
        P: Fn(ElementOf<Self>, ElementOf<G>) -> U,
        U: Clone,
    {
        Adapter::new(SelectMany::new(
            self.into_adapter().into_cursor(),
            WithIndex(selector),
            Combine(result),
        ))
    }
}

impl<S: IntoAdapter> SelectManyExt for S {}

/// Convenience function to flatten the groups of a sequence
pub fn select_many<S, F, G>(source: S, selector: F) -> Adapter<SelectMany<S::Cursor, Plain<F>, Flatten>>
where
    S: IntoAdapter,
    F: Fn(ElementOf<S>) -> G,
    G: IntoAdapter,
    ElementOf<G>: Clone,
{
    source.select_many(selector)
}
