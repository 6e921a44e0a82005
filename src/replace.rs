use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;

/// Cursor that substitutes `replacement` for every element equal to `target`
///
/// Shape-preserving, so count and indexer carry over. `equals` runs once per
/// advance.
#[derive(Clone)]
pub struct Replace<C, T, E> {
    inner: C,
    target: T,
    replacement: T,
    equals: E,
    current: Option<T>,
}

impl<C, T, E> Replace<C, T, E> {
    pub fn new(inner: C, target: T, replacement: T, equals: E) -> Self {
        Replace {
            inner,
            target,
            replacement,
            equals,
            current: None,
        }
    }

    fn substitute(&self, element: T) -> T
    where
        T: Clone,
        E: Fn(&T, &T) -> bool,
    {
        if (self.equals)(&element, &self.target) {
            self.replacement.clone()
        } else {
            element
        }
    }
}

impl<C, E> Cursor for Replace<C, C::Element, E>
where
    C: Cursor,
    C::Element: Clone,
    E: Fn(&C::Element, &C::Element) -> bool,
{
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        let moved = self.inner.move_next();
        self.current = if moved {
            self.inner.current().map(|element| self.substitute(element))
        } else {
            None
        };
        moved
    }

    fn current(&self) -> Option<Self::Element> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()
    }

    fn known_at(&self, index: usize) -> Option<Self::Element> {
        self.inner
            .known_at(index)
            .map(|element| self.substitute(element))
    }
}

/// Equality used by plain [`ReplaceExt::replace`]
pub type Equality<T> = fn(&T, &T) -> bool;

fn equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// Extension trait adding value substitution to any sequence
pub trait ReplaceExt: IntoAdapter + Sized
where
    ElementOf<Self>: Clone,
{
    /// Replace every element equal to `target` with `replacement`
    fn replace(
        self,
        target: ElementOf<Self>,
        replacement: ElementOf<Self>,
    ) -> Adapter<Replace<Self::Cursor, ElementOf<Self>, Equality<ElementOf<Self>>>>
    where
        ElementOf<Self>: PartialEq,
    {
        self.replace_by(target, replacement, equal as Equality<ElementOf<Self>>)
    }

    /// Replace every element `equals` deems equal to `target`
    fn replace_by<E>(
        self,
        target: ElementOf<Self>,
        replacement: ElementOf<Self>,
        equals: E,
    ) -> Adapter<Replace<Self::Cursor, ElementOf<Self>, E>>
    where
        E: Fn(&ElementOf<Self>, &ElementOf<Self>) -> bool,
    {
        Adapter::new(Replace::new(
            self.into_adapter().into_cursor(),
            target,
            replacement,
            equals,
        ))
    }
}

impl<S> ReplaceExt for S
where
    S: IntoAdapter,
    ElementOf<S>: Clone,
{
}

/// Convenience function to substitute one value in a sequence
pub fn replace<S>(
    source: S,
    target: ElementOf<S>,
    replacement: ElementOf<S>,
) -> Adapter<Replace<S::Cursor, ElementOf<S>, Equality<ElementOf<S>>>>
where
    S: IntoAdapter,
    ElementOf<S>: Clone + PartialEq,
{
    source.replace(target, replacement)
}
