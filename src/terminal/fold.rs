use crate::adapter::Adapter;
use crate::cursor::Cursor;
use crate::error::{Result, SeqError, fail};

impl<C: Cursor + Clone> Adapter<C> {
    /// Smallest element; the first of equal minima wins
    pub fn min(&self) -> Result<C::Element>
    where
        C::Element: PartialOrd,
    {
        match self.iter().reduce(|min, element| if element < min { element } else { min }) {
            Some(min) => Ok(min),
            None => fail("min", SeqError::NoElements),
        }
    }

    /// Largest element; the first of equal maxima wins
    pub fn max(&self) -> Result<C::Element>
    where
        C::Element: PartialOrd,
    {
        match self.iter().reduce(|max, element| if element > max { element } else { max }) {
            Some(max) => Ok(max),
            None => fail("max", SeqError::NoElements),
        }
    }

    /// Left fold from `seed`
    pub fn aggregate<A, F>(&self, seed: A, accumulate: F) -> A
    where
        F: FnMut(A, C::Element) -> A,
    {
        self.iter().fold(seed, accumulate)
    }

    /// Left fold from `seed`, finished by `result`
    pub fn aggregate_with<A, F, R, U>(&self, seed: A, accumulate: F, result: R) -> U
    where
        F: FnMut(A, C::Element) -> A,
        R: FnOnce(A) -> U,
    {
        result(self.aggregate(seed, accumulate))
    }
}
