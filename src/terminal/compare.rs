use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;

impl<C: Cursor + Clone> Adapter<C> {
    /// Whether both sequences hold equal elements in the same order
    pub fn sequence_equal<S>(&self, other: S) -> bool
    where
        S: IntoAdapter,
        C::Element: PartialEq<<S::Cursor as Cursor>::Element>,
    {
        self.sequence_equal_by(other, |a, b| a == b)
    }

    /// [`Adapter::sequence_equal`] with a caller-supplied equality
    ///
    /// Returns `false` without traversing when both counts are known and differ.
    pub fn sequence_equal_by<S, E>(&self, other: S, equals: E) -> bool
    where
        S: IntoAdapter,
        E: FnMut(&C::Element, &<S::Cursor as Cursor>::Element) -> bool,
    {
        let other = other.into_adapter();
        if C::HAS_COUNT && <S::Cursor as Cursor>::HAS_COUNT {
            let lengths = (self.prototype().known_len(), other.prototype().known_len());
            if let (Some(left), Some(right)) = lengths {
                if left != right {
                    return false;
                }
            }
        }
        mismatch_in(self, other, equals).is_none()
    }

    /// Position of the first difference, counting a length difference
    ///
    /// `None` when both sequences end together with no unequal pair.
    pub fn mismatch<S>(&self, other: S) -> Option<usize>
    where
        S: IntoAdapter,
        C::Element: PartialEq<<S::Cursor as Cursor>::Element>,
    {
        self.mismatch_by(other, |a, b| a == b)
    }

    pub fn mismatch_by<S, E>(&self, other: S, equals: E) -> Option<usize>
    where
        S: IntoAdapter,
        E: FnMut(&C::Element, &<S::Cursor as Cursor>::Element) -> bool,
    {
        mismatch_in(self, other.into_adapter(), equals)
    }
}

fn mismatch_in<A, B, E>(left: &Adapter<A>, right: Adapter<B>, mut equals: E) -> Option<usize>
where
    A: Cursor + Clone,
    B: Cursor,
    E: FnMut(&A::Element, &B::Element) -> bool,
{
    let mut left = left.iter();
    let mut right = right.into_iter();
    let mut index = 0;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (Some(a), Some(b)) if equals(&a, &b) => index += 1,
            _ => return Some(index),
        }
    }
}
