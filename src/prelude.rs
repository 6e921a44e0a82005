//! Everything needed to build and run a pipeline
//!
//! ```
//! use seqcomb::prelude::*;
//!
//! let words = ["one", "two", "three"];
//! let lengths: Vec<usize> = seq(&words).select(|w| w.len()).skip(1).into_iter().collect();
//! assert_eq!(lengths, vec![3, 5]);
//! ```

pub use crate::adapter::{Adapter, IntoAdapter, seq};
pub use crate::append::AppendExt;
pub use crate::cast::CastExt;
pub use crate::concat::ConcatExt;
pub use crate::counting::CountingExt;
pub use crate::cursor::Cursor;
pub use crate::default_if_empty::DefaultIfEmptyExt;
pub use crate::filter::FilterExt;
pub use crate::map::SelectExt;
pub use crate::of_type::OfTypeExt;
pub use crate::replace::ReplaceExt;
pub use crate::select_many::SelectManyExt;
pub use crate::skip::SkipExt;
pub use crate::skip_while::SkipWhileExt;
pub use crate::take::TakeExt;
pub use crate::take_while::TakeWhileExt;
pub use crate::zip::ZipExt;
