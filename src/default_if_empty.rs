use crate::adapter::{Adapter, ElementOf, IntoAdapter};
use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Inner,
    Fallback,
    Done,
}

/// Cursor that yields the inner elements, or a single fallback element when
/// the inner sequence turns out to be empty
#[derive(Debug, Clone)]
pub struct DefaultIfEmpty<C, T> {
    inner: C,
    fallback: T,
    stage: Stage,
}

impl<C, T> DefaultIfEmpty<C, T> {
    pub fn new(inner: C, fallback: T) -> Self {
        DefaultIfEmpty {
            inner,
            fallback,
            stage: Stage::Start,
        }
    }
}

impl<C> Cursor for DefaultIfEmpty<C, C::Element>
where
    C: Cursor,
    C::Element: Clone,
{
    type Element = C::Element;

    fn reset(&mut self) {
        self.inner.reset();
        self.stage = Stage::Start;
    }

    fn move_next(&mut self) -> bool {
        let stage = self.stage;
        self.stage = match stage {
            Stage::Start if self.inner.move_next() => Stage::Inner,
            Stage::Start => Stage::Fallback,
            Stage::Inner if self.inner.move_next() => Stage::Inner,
            Stage::Inner | Stage::Fallback | Stage::Done => Stage::Done,
        };
        self.stage != Stage::Done
    }

    fn current(&self) -> Option<Self::Element> {
        match self.stage {
            Stage::Inner => self.inner.current(),
            Stage::Fallback => Some(self.fallback.clone()),
            Stage::Start | Stage::Done => None,
        }
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

/// Extension trait adding the empty-sequence fallbacks to any sequence
pub trait DefaultIfEmptyExt: IntoAdapter + Sized
where
    ElementOf<Self>: Clone,
{
    /// Yield `Default::default()` once if the sequence turns out empty
    fn default_if_empty(self) -> Adapter<DefaultIfEmpty<Self::Cursor, ElementOf<Self>>>
    where
        ElementOf<Self>: Default,
    {
        self.default_if_empty_with(Default::default())
    }

    /// Yield `fallback` once if the sequence turns out empty
    fn default_if_empty_with(
        self,
        fallback: ElementOf<Self>,
    ) -> Adapter<DefaultIfEmpty<Self::Cursor, ElementOf<Self>>> {
        Adapter::new(DefaultIfEmpty::new(
            self.into_adapter().into_cursor(),
            fallback,
        ))
    }
}

impl<S> DefaultIfEmptyExt for S
where
    S: IntoAdapter,
    ElementOf<S>: Clone,
{
}

/// Convenience function to give an empty sequence a single default element
pub fn default_if_empty<S>(source: S) -> Adapter<DefaultIfEmpty<S::Cursor, ElementOf<S>>>
where
    S: IntoAdapter,
    ElementOf<S>: Clone + Default,
{
    source.default_if_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::seq;
    use crate::filter::FilterExt;
    use crate::map::SelectExt;

    #[test]
    fn test_non_empty_passes_through() {
        let data = [1, 2, 3];
        let values: Vec<i32> = seq(&data)
            .select(|v| *v)
            .default_if_empty()
            .into_iter()
            .collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_yields_default() {
        let data: [i32; 0] = [];
        let values: Vec<i32> = seq(&data)
            .select(|v| *v)
            .default_if_empty()
            .into_iter()
            .collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_empty_yields_supplied_value() {
        let data: Vec<String> = Vec::new();
        let values: Vec<String> = seq(&data)
            .select(|v| v.clone())
            .default_if_empty_with("none".to_string())
            .into_iter()
            .collect();
        assert_eq!(values, vec!["none".to_string()]);
    }

    #[test]
    fn test_filtered_to_empty_yields_default() {
        let data = [1, 3, 5];
        let values: Vec<i32> = seq(&data)
            .select(|v| *v)
            .filter(|v| v % 2 == 0)
            .default_if_empty_with(-1)
            .into_iter()
            .collect();
        assert_eq!(values, vec![-1]);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let data: [i32; 0] = [];
        let mut cursor = seq(&data).select(|v| *v).default_if_empty().cursor();
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(0));
        assert!(!cursor.move_next());
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_capabilities_unknown() {
        let data = [1];
        let adapter = seq(&data).default_if_empty_with(&0);
        assert!(!adapter.capabilities().has_count);
        assert!(!adapter.capabilities().has_indexer);
    }
}
