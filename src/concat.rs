use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
    Done,
}

/// Cursor that draws from `first` until it is exhausted, then from `second`
///
/// Each side is its own cursor value, so concatenating an adapter with
/// itself gives two independent traversal states.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    side: Side,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Concat {
            first,
            second,
            side: Side::First,
        }
    }
}

impl<A, B> Cursor for Concat<A, B>
where
    A: Cursor,
    B: Cursor<Element = A::Element>,
{
    type Element = A::Element;

    const HAS_COUNT: bool = A::HAS_COUNT && B::HAS_COUNT;

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.side = Side::First;
    }

    fn move_next(&mut self) -> bool {
        if self.side == Side::First {
            if self.first.move_next() {
                return true;
            }
            self.first.dispose();
            self.side = Side::Second;
        }
        if self.side == Side::Second {
            if self.second.move_next() {
                return true;
            }
            self.second.dispose();
            self.side = Side::Done;
        }
        false
    }

    fn current(&self) -> Option<Self::Element> {
        match self.side {
            Side::First => self.first.current(),
            Side::Second => self.second.current(),
            Side::Done => None,
        }
    }

    fn dispose(&mut self) {
        self.first.dispose();
        self.second.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        if !Self::HAS_COUNT {
            return None;
        }
        self.first.known_len()?.checked_add(self.second.known_len()?)
    }
}

/// Extension trait adding `.concat()` to any sequence
pub trait ConcatExt: IntoAdapter + Sized {
    /// Every element of `self`, then every element of `second`
    fn concat<S>(self, second: S) -> Adapter<Concat<Self::Cursor, S::Cursor>>
    where
        S: IntoAdapter,
        S::Cursor: Cursor<Element = ElementOf<Self>>,
    {
        Adapter::new(Concat::new(
            self.into_adapter().into_cursor(),
            second.into_adapter().into_cursor(),
        ))
    }
}

impl<S: IntoAdapter> ConcatExt for S {}

/// Convenience function to chain two sequences
pub fn concat<A, B>(first: A, second: B) -> Adapter<Concat<A::Cursor, B::Cursor>>
where
    A: IntoAdapter,
    B: IntoAdapter,
    B::Cursor: Cursor<Element = ElementOf<A>>,
{
    first.concat(second)
}
