//! Error types for txmerkle

use thiserror::Error;

/// Result type alias for txmerkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a tree
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The builder was handed zero leaves, so there is no root to return.
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyInput,

    /// A node handed to the builder already has children. Only leaves can
    /// be folded, otherwise the tree depth would not match its height.
    #[error("node {index} is not a leaf")]
    NotALeaf {
        /// Position of the offending node in the input.
        index: usize,
    },
}
