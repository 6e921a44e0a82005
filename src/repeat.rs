use crate::adapter::Adapter;
use crate::cursor::Cursor;
use crate::range::Tally;

/// Generator yielding the same element `count` times
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    element: T,
    tally: Tally,
}

impl<T> Repeat<T> {
    pub fn new(element: T, count: usize) -> Self {
        Repeat {
            element,
            tally: Tally::new(count),
        }
    }
}

impl<T: Clone> Cursor for Repeat<T> {
    type Element = T;

    const HAS_COUNT: bool = true;
    const HAS_INDEXER: bool = true;

    fn reset(&mut self) {
        self.tally.reset();
    }

    fn move_next(&mut self) -> bool {
        self.tally.advance()
    }

    fn current(&self) -> Option<T> {
        self.tally.position().map(|_| self.element.clone())
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.tally.count())
    }

    fn known_at(&self, index: usize) -> Option<T> {
        (index < self.tally.count()).then(|| self.element.clone())
    }
}

/// `element`, `count` times
pub fn repeat<T: Clone>(element: T, count: usize) -> Adapter<Repeat<T>> {
    Adapter::new(Repeat::new(element, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_values() {
        let values: Vec<&str> = repeat("ab", 3).into_iter().collect();
        assert_eq!(values, vec!["ab", "ab", "ab"]);
    }

    #[test]
    fn test_repeat_zero_times() {
        let mut cursor = repeat('x', 0).cursor();
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_repeat_capabilities() {
        let adapter = repeat(7u8, 4);
        assert_eq!(adapter.len(), Ok(4));
        assert_eq!(adapter.get(3), Ok(7));
        assert!(adapter.get(4).is_err());
    }
}
