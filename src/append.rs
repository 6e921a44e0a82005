use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Inner,
    Extra,
    Done,
}

/// Cursor that yields every inner element, then one trailing element
#[derive(Debug, Clone)]
pub struct Append<C, T> {
    inner: C,
    element: T,
    stage: Stage,
}

impl<C, T> Append<C, T> {
    pub fn new(inner: C, element: T) -> Self {
        Append {
            inner,
            element,
            stage: Stage::Inner,
        }
    }
}

impl<C> Cursor for Append<C, C::Element>
where
    C: Cursor,
    C::Element: Clone,
{
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;

    fn reset(&mut self) {
        self.inner.reset();
        self.stage = Stage::Inner;
    }

    fn move_next(&mut self) -> bool {
        match self.stage {
            Stage::Inner => {
                if !self.inner.move_next() {
                    self.stage = Stage::Extra;
                }
                true
            }
            Stage::Extra | Stage::Done => {
                self.stage = Stage::Done;
                false
            }
        }
    }

    fn current(&self) -> Option<Self::Element> {
        match self.stage {
            Stage::Inner => self.inner.current(),
            Stage::Extra => Some(self.element.clone()),
            Stage::Done => None,
        }
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()?.checked_add(1)
    }
}

/// Cursor that yields one leading element, then every inner element
#[derive(Debug, Clone)]
pub struct Prepend<C, T> {
    inner: C,
    element: T,
    stage: Stage,
    started: bool,
}

impl<C, T> Prepend<C, T> {
    pub fn new(inner: C, element: T) -> Self {
        Prepend {
            inner,
            element,
            stage: Stage::Extra,
            started: false,
        }
    }
}

impl<C> Cursor for Prepend<C, C::Element>
where
    C: Cursor,
    C::Element: Clone,
{
    type Element = C::Element;

    const HAS_COUNT: bool = C::HAS_COUNT;

    fn reset(&mut self) {
        self.inner.reset();
        self.stage = Stage::Extra;
        self.started = false;
    }

    fn move_next(&mut self) -> bool {
        if !self.started {
            self.started = true;
            return true;
        }
        if self.stage == Stage::Done {
            return false;
        }
        if self.inner.move_next() {
            self.stage = Stage::Inner;
            true
        } else {
            self.stage = Stage::Done;
            false
        }
    }

    fn current(&self) -> Option<Self::Element> {
        if !self.started {
            return None;
        }
        match self.stage {
            Stage::Extra => Some(self.element.clone()),
            Stage::Inner => self.inner.current(),
            Stage::Done => None,
        }
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        self.inner.known_len()?.checked_add(1)
    }
}

/// Extension trait adding boundary elements to any sequence
pub trait AppendExt: IntoAdapter + Sized
where
    ElementOf<Self>: Clone,
{
    /// Yield every element, then `element`
    fn append(self, element: ElementOf<Self>) -> Adapter<Append<Self::Cursor, ElementOf<Self>>> {
        Adapter::new(Append::new(self.into_adapter().into_cursor(), element))
    }

    /// Yield `element`, then every element
    fn prepend(self, element: ElementOf<Self>) -> Adapter<Prepend<Self::Cursor, ElementOf<Self>>> {
        Adapter::new(Prepend::new(self.into_adapter().into_cursor(), element))
    }
}

impl<S> AppendExt for S
where
    S: IntoAdapter,
    ElementOf<S>: Clone,
{
}

/// Convenience function to append one element to a sequence
pub fn append<S>(source: S, element: ElementOf<S>) -> Adapter<Append<S::Cursor, ElementOf<S>>>
where
    S: IntoAdapter,
    ElementOf<S>: Clone,
{
    source.append(element)
}

/// Convenience function to prepend one element to a sequence
pub fn prepend<S>(source: S, element: ElementOf<S>) -> Adapter<Prepend<S::Cursor, ElementOf<S>>>
where
    S: IntoAdapter,
    ElementOf<S>: Clone,
{
    source.prepend(element)
}
