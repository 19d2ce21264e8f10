//! Errors reported by tree operations.
//!
//! Almost nothing here can fail. Looking up a missing value or computing the
//! depth of a node that isn't in the tree are answered with `None` or `-1`.
//! The one real failure is asking for a traversal without saying what to do
//! with each visited node.

use thiserror::Error;

/// Everything that can go wrong while using a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A traversal was started without a visitor. The payload names the
    /// traversal, e.g. `"in_order"`.
    #[error("invalid argument: {0} requires a visitor callback")]
    InvalidArgument(&'static str),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
