//! Leaf cursors that turn a concrete container into the first cursor of a pipeline

pub mod collection;
pub mod iter;
pub mod slice;

pub use collection::CollectionCursor;
pub use iter::{IterCursor, from_iter};
pub use slice::SliceCursor;
