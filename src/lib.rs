//! # SeqComb - Composable Sequence Operators
//!
//! Lazy, pull-based query operators over in-memory sequences, built from
//! small cursor types that nest into a single concrete pipeline type.
//!
//! A pipeline starts from a container through [`seq`] (or a generator such as
//! [`range`], [`repeat`] or [`empty`]) and is extended with the operator
//! methods of the `*Ext` traits, all gathered in [`prelude`]:
//!
//! - **Static composition**: every operator wraps the previous cursor in a new
//!   type, so no pipeline stage is boxed or dynamically dispatched
//! - **Capabilities**: cursors that know their length or support positional
//!   reads say so at compile time, and terminals like `count` or `element_at`
//!   use that instead of traversing
//! - **Reusable recipes**: an adapter can be traversed any number of times;
//!   each traversal gets its own cursor
//!
//! ```
//! use seqcomb::prelude::*;
//!
//! let data = [5, 1, 4, 2, 3];
//! let evens = seq(&data).filter(|v| **v % 2 == 0).select(|v| v * 10);
//! assert_eq!(evens.iter().collect::<Vec<_>>(), vec![40, 20]);
//! assert_eq!(evens.count(), 2);
//! ```

pub mod adapter;
pub mod append;
pub mod capability;
pub mod cast;
pub mod concat;
pub mod counting;
pub mod cursor;
pub mod cursors;
pub mod default_if_empty;
pub mod empty;
pub mod error;
pub mod filter;
pub mod map;
pub mod of_type;
pub mod prelude;
pub mod range;
pub mod repeat;
pub mod replace;
pub mod select_many;
pub mod skip;
pub mod skip_while;
pub mod step;
pub mod take;
pub mod take_while;
pub mod terminal;
pub mod zip;

#[cfg(test)]
mod testing;

pub use adapter::{Adapter, CursorIter, ElementOf, IntoAdapter, seq};
pub use append::{AppendExt, append, prepend};
pub use capability::{Capabilities, Capability};
pub use cast::{CastExt, cast};
pub use concat::{ConcatExt, concat};
pub use counting::{CountingExt, counted};
pub use cursor::Cursor;
pub use cursors::{CollectionCursor, IterCursor, SliceCursor, from_iter};
pub use default_if_empty::{DefaultIfEmptyExt, default_if_empty};
pub use empty::empty;
pub use error::{Result, SeqError};
pub use filter::{FilterExt, filter};
pub use map::{SelectExt, select};
pub use of_type::{Downcast, OfTypeExt, of_type};
pub use range::{range, range_with};
pub use repeat::repeat;
pub use replace::{ReplaceExt, replace};
pub use select_many::{SelectManyExt, select_many};
pub use skip::{SkipExt, skip};
pub use skip_while::{SkipWhileExt, skip_while};
pub use step::Step;
pub use take::{TakeExt, take};
pub use take_while::{TakeWhileExt, take_while};
pub use zip::{ZipExt, zip};
