use crate::adapter::Adapter;
use crate::cursor::Cursor;

impl<C: Cursor + Clone> Adapter<C> {
    /// Whether there is at least one element
    pub fn any(&self) -> bool {
        if C::HAS_COUNT {
            if let Some(len) = self.prototype().known_len() {
                return len > 0;
            }
        }
        self.cursor_has_next()
    }

    /// Whether some element matches; stops at the first match
    pub fn any_where<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.iter().any(|element| predicate(&element))
    }

    /// Whether every element matches; vacuously true when empty
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.iter().all(|element| predicate(&element))
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    pub fn none_where<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&C::Element) -> bool,
    {
        !self.any_where(predicate)
    }

    pub fn contains(&self, value: &C::Element) -> bool
    where
        C::Element: PartialEq,
    {
        self.contains_by(value, |a, b| a == b)
    }

    /// Linear search with a caller-supplied equality
    pub fn contains_by<E>(&self, value: &C::Element, mut equals: E) -> bool
    where
        E: FnMut(&C::Element, &C::Element) -> bool,
    {
        self.iter().any(|element| equals(&element, value))
    }

    fn cursor_has_next(&self) -> bool {
        let mut cursor = self.cursor();
        let found = cursor.move_next();
        cursor.dispose();
        found
    }
}
