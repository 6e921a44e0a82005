use crate::adapter::Adapter;
use crate::cursor::Cursor;
use crate::error::{Result, SeqError, fail};

/// Outcome of looking for exactly one element
enum Lone<T> {
    Zero,
    One(T),
    Many,
}

impl<C: Cursor + Clone> Adapter<C> {
    pub fn first(&self) -> Result<C::Element> {
        match self.iter().next() {
            Some(element) => Ok(element),
            None => fail("first", SeqError::NoElements),
        }
    }

    /// First element matching `predicate`
    pub fn first_where<P>(&self, mut predicate: P) -> Result<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
    {
        match self.iter().find(|element| predicate(element)) {
            Some(element) => Ok(element),
            None => fail("first_where", SeqError::NoMatch),
        }
    }

    pub fn first_or_default(&self) -> C::Element
    where
        C::Element: Default,
    {
        self.iter().next().unwrap_or_default()
    }

    pub fn first_or_default_where<P>(&self, mut predicate: P) -> C::Element
    where
        P: FnMut(&C::Element) -> bool,
        C::Element: Default,
    {
        self.iter()
            .find(|element| predicate(element))
            .unwrap_or_default()
    }

    /// Last element; always a full traversal
    pub fn last(&self) -> Result<C::Element> {
        match self.iter().last() {
            Some(element) => Ok(element),
            None => fail("last", SeqError::NoElements),
        }
    }

    pub fn last_where<P>(&self, mut predicate: P) -> Result<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
    {
        match self.iter().filter(|element| predicate(element)).last() {
            Some(element) => Ok(element),
            None => fail("last_where", SeqError::NoMatch),
        }
    }

    pub fn last_or_default(&self) -> C::Element
    where
        C::Element: Default,
    {
        self.iter().last().unwrap_or_default()
    }

    pub fn last_or_default_where<P>(&self, mut predicate: P) -> C::Element
    where
        P: FnMut(&C::Element) -> bool,
        C::Element: Default,
    {
        self.iter()
            .filter(|element| predicate(element))
            .last()
            .unwrap_or_default()
    }

    /// The only element; fails when there are none or several
    pub fn single(&self) -> Result<C::Element> {
        match self.lone(|_| true) {
            Lone::One(element) => Ok(element),
            Lone::Zero => fail("single", SeqError::NoElements),
            Lone::Many => fail("single", SeqError::MoreThanOneElement),
        }
    }

    pub fn single_where<P>(&self, predicate: P) -> Result<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
    {
        match self.lone(predicate) {
            Lone::One(element) => Ok(element),
            Lone::Zero => fail("single_where", SeqError::NoMatch),
            Lone::Many => fail("single_where", SeqError::MoreThanOneMatch),
        }
    }

    /// The only element, or the default when empty
    ///
    /// Several elements are still an error.
    pub fn single_or_default(&self) -> Result<C::Element>
    where
        C::Element: Default,
    {
        match self.lone(|_| true) {
            Lone::One(element) => Ok(element),
            Lone::Zero => Ok(C::Element::default()),
            Lone::Many => fail("single_or_default", SeqError::MoreThanOneElement),
        }
    }

    pub fn single_or_default_where<P>(&self, predicate: P) -> Result<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
        C::Element: Default,
    {
        match self.lone(predicate) {
            Lone::One(element) => Ok(element),
            Lone::Zero => Ok(C::Element::default()),
            Lone::Many => fail("single_or_default_where", SeqError::MoreThanOneMatch),
        }
    }

    /// Element at `index`, read in constant time when the cursor supports it
    pub fn element_at(&self, index: usize) -> Result<C::Element> {
        match self.nth(index) {
            Some(element) => Ok(element),
            None => fail("element_at", SeqError::IndexOutOfRange { index }),
        }
    }

    pub fn element_at_or_default(&self, index: usize) -> C::Element
    where
        C::Element: Default,
    {
        self.nth(index).unwrap_or_default()
    }

    fn nth(&self, index: usize) -> Option<C::Element> {
        if C::HAS_INDEXER {
            return self.prototype().known_at(index);
        }
        self.iter().nth(index)
    }

    // Stops at the second match.
    fn lone<P>(&self, mut predicate: P) -> Lone<C::Element>
    where
        P: FnMut(&C::Element) -> bool,
    {
        let mut matches = self.iter().filter(|element| predicate(element));
        match (matches.next(), matches.next()) {
            (None, _) => Lone::Zero,
            (Some(element), None) => Lone::One(element),
            (Some(_), Some(_)) => Lone::Many,
        }
    }
}
