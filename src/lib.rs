//! light pointer-based _Merkle Tree_ over opaque transaction data.
//!
//! Leaves keep the caller's raw bytes. Every internal node holds the digest
//! of the plain concatenation of its children's values:
//!
//! ```text
//! node = HASH(left.value || right.value)
//! ```
//!
//! There is no leaf/interior domain prefix and leaves are not hashed on the
//! way in, so a tree of one leaf has that leaf as its root.
//!
//! Levels with an odd number of nodes get their last node duplicated (as a
//! fresh childless copy) before pairing, at every level:
//!
//! ```text
//!              root = h(hab + hcc)
//!             /                   \
//!     hab = h(a + b)          hcc = h(c + c)
//!      /         \             /         \
//!     a           b           c           c'
//! ```
//!
//! Link: <https://en.wikipedia.org/wiki/Merkle_tree>
//!
//! # Interface
//!
//! ```text
//! - build_tree (leaves) -> tree | EmptyInput
//! - depth_of (leaf count) -> depth
//! - find (root, target) -> value | None
//! ```
//!
//! # Quick start
//!
//! ```
//! use txmerkle::{build_tree, depth_of, find};
//!
//! let tree = build_tree(vec![b"Transaction1".to_vec(), b"Transaction2".to_vec()])?;
//! assert_eq!(tree.depth(), depth_of(2));
//! assert_eq!(find(Some(tree.root()), b"Transaction2"), Some(&b"Transaction2"[..]));
//! assert_eq!(find(Some(tree.root()), b"Transaction3"), None);
//! println!("{}", tree);
//! # Ok::<(), txmerkle::Error>(())
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]
#![warn(trivial_casts, trivial_numeric_casts, unused_qualifications)]

/// Digest algorithms used to combine children.
pub mod hash;

/// Tree nodes and the leaf factory.
pub mod node;

/// Merkle tree construction and depth calculation.
pub mod merkle;

/// Pre-order lookup of values in a built tree.
pub mod lookup;

mod error;

#[cfg(test)]
mod test_common;


pub use error::{Error, Result};
#[cfg(feature = "blake3")]
pub use hash::Blake3Algorithm;
pub use hash::{Algorithm, Digest, Sha256Algorithm};
pub use lookup::{find, LookupIndex};
pub use merkle::{build_tree, depth_of, BuildConfig, MerkleTree, SMALL_TREE_BUILD};
pub use node::{create_nodes, Node, PreOrder};
