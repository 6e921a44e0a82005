use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;
use crate::error::SeqError;
use std::any::type_name;
use std::marker::PhantomData;

/// Cursor converting each element to `U` through `TryFrom`
///
/// A failed conversion is not skipped or coerced: that element comes out as
/// `Err(SeqError::Conversion { .. })`, so collecting into a `Result` stops
/// at the first bad element. Each element is converted once per advance.
pub struct Cast<C, U> {
    inner: C,
    current: Option<Result<U, SeqError>>,
    _target: PhantomData<fn() -> U>,
}

impl<C, U> Cast<C, U> {
    pub fn new(inner: C) -> Self {
        Cast {
            inner,
            current: None,
            _target: PhantomData,
        }
    }
}

impl<C: Clone, U: Clone> Clone for Cast<C, U> {
    fn clone(&self) -> Self {
        Cast {
            inner: self.inner.clone(),
            current: self.current.clone(),
            _target: PhantomData,
        }
    }
}

impl<C: std::fmt::Debug, U> std::fmt::Debug for Cast<C, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cast")
            .field("inner", &self.inner)
            .field("target", &type_name::<U>())
            .finish()
    }
}

fn convert<T, U: TryFrom<T>>(element: T) -> Result<U, SeqError> {
    U::try_from(element).map_err(|_| SeqError::Conversion {
        from: type_name::<T>(),
        to: type_name::<U>(),
    })
}

impl<C, U> Cursor for Cast<C, U>
where
    C: Cursor,
    U: TryFrom<C::Element> + Clone,
{
    type Element = Result<U, SeqError>;

    const HAS_COUNT: bool = C::HAS_COUNT;
    const HAS_INDEXER: bool = C::HAS_INDEXER;

    fn reset(&mut self) {
        self.inner.reset();
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        let moved = self.inner.move_next();
        self.current = if moved {
            self.inner.current().map(convert)
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
        self.inner.known_at(index).map(convert)
    }
}

/// Extension trait adding `.cast()` to any sequence
pub trait CastExt: IntoAdapter + Sized {
    /// Convert every element to `U`, reporting elements that do not fit
    fn cast<U>(self) -> Adapter<Cast<Self::Cursor, U>>
    where
        U: TryFrom<ElementOf<Self>> + Clone,
    {
        Adapter::new(Cast::new(self.into_adapter().into_cursor()))
    }
}

impl<S: IntoAdapter> CastExt for S {}

/// Convenience function to cast every element of a sequence
pub fn cast<S, U>(source: S) -> Adapter<Cast<S::Cursor, U>>
where
    S: IntoAdapter,
    U: TryFrom<ElementOf<S>> + Clone,
{
    source.cast::<U>()
}
