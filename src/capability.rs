use crate::cursor::Cursor;
use std::fmt;

/// A constant-time accessor a cursor may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// O(1) element count
    Count,
    /// O(1) positional read
    Indexer,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Count => write!(f, "count"),
            Capability::Indexer => write!(f, "indexing"),
        }
    }
}

/// The capability flags of a cursor type, read off its associated consts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub has_count: bool,
    pub has_indexer: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities::new(false, false);
    pub const COUNT: Capabilities = Capabilities::new(true, false);
    pub const ALL: Capabilities = Capabilities::new(true, true);

    pub const fn new(has_count: bool, has_indexer: bool) -> Self {
        Capabilities {
            has_count,
            has_indexer,
        }
    }

    /// Capabilities of the cursor type `C`
    pub const fn of<C: Cursor>() -> Self {
        Capabilities::new(C::HAS_COUNT, C::HAS_INDEXER)
    }

    pub const fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Count => self.has_count,
            Capability::Indexer => self.has_indexer,
        }
    }
}
