use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;
use std::any::Any;

/// Checked view of an element as a `U`
///
/// Implemented for the type-erased element shapes (`&dyn Any`,
/// `&Box<dyn Any>`); enums can implement it to expose their variants.
pub trait Downcast<U> {
    fn downcast(self) -> Option<U>;
}

impl<'a, U: Any> Downcast<&'a U> for &'a dyn Any {
    fn downcast(self) -> Option<&'a U> {
        self.downcast_ref::<U>()
    }
}

impl<'a, U: Any> Downcast<&'a U> for &'a (dyn Any + Send + Sync) {
    fn downcast(self) -> Option<&'a U> {
        self.downcast_ref::<U>()
    }
}

impl<'a, U: Any> Downcast<&'a U> for &'a Box<dyn Any> {
    fn downcast(self) -> Option<&'a U> {
        let erased: &'a dyn Any = self.as_ref();
        erased.downcast_ref::<U>()
    }
}

/// Cursor yielding only the inner elements whose dynamic kind is `U`
pub struct OfType<C, U> {
    inner: C,
    current: Option<U>,
}

impl<C, U> OfType<C, U> {
    pub fn new(inner: C) -> Self {
        OfType {
            inner,
            current: None,
        }
    }
}

impl<C: Clone, U: Clone> Clone for OfType<C, U> {
    fn clone(&self) -> Self {
        OfType {
            inner: self.inner.clone(),
            current: self.current.clone(),
        }
    }
}

impl<C, U> Cursor for OfType<C, U>
where
    C: Cursor,
    C::Element: Downcast<U>,
    U: Clone,
{
    type Element = U;

    fn reset(&mut self) {
        self.inner.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        while self.inner.move_next() {
            if let Some(matched) = self.inner.current().and_then(Downcast::downcast) {
                self.current = Some(matched);
                return true;
            }
        }
        self.current = None;
        false
    }

    fn current(&self) -> Option<U> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Extension trait adding `.of_type()` to any sequence
pub trait OfTypeExt: IntoAdapter + Sized {
    /// Keep only the elements that are a `U`, viewed as `U`
    fn of_type<U>(self) -> Adapter<OfType<Self::Cursor, U>>
    where
        ElementOf<Self>: Downcast<U>,
        U: Clone,
    {
        Adapter::new(OfType::new(self.into_adapter().into_cursor()))
    }
}

impl<S: IntoAdapter> OfTypeExt for S {}

/// Convenience function to keep the elements of one type
pub fn of_type<S, U>(source: S) -> Adapter<OfType<S::Cursor, U>>
where
    S: IntoAdapter,
    ElementOf<S>: Downcast<U>,
    U: Clone,
{
    source.of_type::<U>()
}
