/// One-pass, position-advancing handle over a sequence of elements
///
/// A cursor starts positioned before the first element. Every operator in
/// this crate is a cursor wrapping one or two inner cursors, so a pipeline is
/// a stack of nested, statically known types with no boxing and no virtual
/// calls on the per-element path.
///
/// Capabilities are associated consts. Operators derive theirs from their
/// inner cursors' consts, so a composed pipeline knows at compile time
/// whether a constant-time count or positional read is available.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Element;

    /// Whether the total number of elements is known in O(1)
    const HAS_COUNT: bool = false;

    /// Whether any element can be read by position in O(1)
    const HAS_INDEXER: bool = false;

    /// Rewind to the state before the first element
    ///
    /// Valid at any point, including mid-traversal and after exhaustion.
    fn reset(&mut self);

    /// Advance to the next element
    ///
    /// Returns `false` once the sequence is exhausted and keeps returning
    /// `false` on every later call until `reset`.
    fn move_next(&mut self) -> bool;

    /// Read the element the last successful `move_next` landed on
    ///
    /// Returns `None` before the first advance, after exhaustion, and after
    /// `reset`.
    fn current(&self) -> Option<Self::Element>;

    /// Release anything held for the traversal
    ///
    /// Safe to call more than once. Composite cursors forward the call to
    /// every inner cursor.
    fn dispose(&mut self) {}

    /// Total element count of the whole sequence, independent of position
    ///
    /// `Some` exactly when `HAS_COUNT` holds.
    fn known_len(&self) -> Option<usize> {
        None
    }

    /// Element at `index` of the whole sequence, independent of position
    ///
    /// Only answers when `HAS_INDEXER` holds; `None` past the end.
    fn known_at(&self, _index: usize) -> Option<Self::Element> {
        None
    }
}
