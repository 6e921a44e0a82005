use crate::adapter::Adapter;
use crate::cursor::Cursor;

impl<C: Cursor + Clone> Adapter<C> {
    /// Number of elements, in constant time when the cursor knows it
    pub fn count(&self) -> usize {
        if C::HAS_COUNT {
            if let Some(len) = self.prototype().known_len() {
                return len;
            }
        }
        self.iter().count()
    }

    /// Number of elements matching `predicate`; always a full traversal
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }
}
