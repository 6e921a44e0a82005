use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;

/// Cursor that advances two cursors in lock-step and pairs their elements
///
/// Stops as soon as either side runs out; the second side is not advanced
/// once the first is exhausted. `pairing` runs once per advance.
#[derive(Clone)]
pub struct Zip<A, B, F, R> {
    first: A,
    second: B,
    pairing: F,
    exhausted: bool,
    current: Option<R>,
}

impl<A, B, F, R> Zip<A, B, F, R> {
    pub fn new(first: A, second: B, pairing: F) -> Self {
        Zip {
            first,
            second,
            pairing,
            exhausted: false,
            current: None,
        }
    }
}

impl<A, B, F, R> Cursor for Zip<A, B, F, R>
where
    A: Cursor,
    B: Cursor,
    F: Fn(A::Element, B::Element) -> R,
    R: Clone,
{
    type Element = R;

    const HAS_COUNT: bool = A::HAS_COUNT && B::HAS_COUNT;

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.exhausted = false;
        self.current = None;
    }

    fn move_next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.exhausted = !(self.first.move_next() && self.second.move_next());
        self.current = if self.exhausted {
            None
        } else {
            self.first
                .current()
                .zip(self.second.current())
                .map(|(first, second)| (self.pairing)(first, second))
        };
        !self.exhausted
    }

    fn current(&self) -> Option<R> {
        self.current.clone()
    }

    fn dispose(&mut self) {
        self.first.dispose();
        self.second.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        if !Self::HAS_COUNT {
            return None;
        }
        Some(self.first.known_len()?.min(self.second.known_len()?))
    }
}

/// Pairing used by plain [`ZipExt::zip`]
pub type Pair<A, B> = fn(A, B) -> (A, B);

fn pair<A, B>(first: A, second: B) -> (A, B) {
    (first, second)
}

/// Extension trait adding `.zip()` to any sequence
pub trait ZipExt: IntoAdapter + Sized {
    /// Pair elements positionally into tuples
    #[allow(clippy::type_complexity)]
    fn zip<S>(
        self,
        second: S,
    ) -> Adapter<
        Zip<
            Self::Cursor,
            S::Cursor,
            Pair<ElementOf<Self>, ElementOf<S>>,
            (ElementOf<Self>, ElementOf<S>),
        >,
    >
    where
        S: IntoAdapter,
        ElementOf<Self>: Clone,
        ElementOf<S>: Clone,
    {
        self.zip_with(second, pair as Pair<ElementOf<Self>, ElementOf<S>>)
    }

    /// Pair elements positionally through `pairing`
    fn zip_with<S, F, R>(self, second: S, pairing: F) -> Adapter<Zip<Self::Cursor, S::Cursor, F, R>>
    where
        S: IntoAdapter,
        F: Fn(ElementOf<Self>, ElementOf<S>) -> R,
        R: Clone,
    {
        Adapter::new(Zip::new(
            self.into_adapter().into_cursor(),
            second.into_adapter().into_cursor(),
            pairing,
        ))
    }
}

impl<S: IntoAdapter> ZipExt for S {}

/// Convenience function to pair two sequences positionally
#[allow(clippy::type_complexity)]
pub fn zip<A, B>(
    first: A,
    second: B,
) -> Adapter<Zip<A::Cursor, B::Cursor, Pair<ElementOf<A>, ElementOf<B>>, (ElementOf<A>, ElementOf<B>)>>
where
    A: IntoAdapter,
    B: IntoAdapter,
    ElementOf<A>: Clone,
    ElementOf<B>: Clone,
{
    first.zip(second)
}
