//! Terminal operations
//!
//! Each terminal drives one fresh traversal of the adapter (or answers from
//! the constant-time accessors when the cursor type has them) and releases
//! the cursor before returning, on every exit path. User callbacks are only
//! invoked for elements that exist, so nothing runs against an empty source.

mod compare;
mod count;
mod element;
mod fold;
mod quantifier;
