use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::hash::{Algorithm, Sha256Algorithm};
use crate::lookup::{self, LookupIndex};
use crate::node::{create_nodes, Node};

/// Level width (number of pairs) used as threshold to decide how a level is
/// hashed. Narrower levels are hashed in place on the calling thread, wider
/// ones are spread over the rayon pool.
pub const SMALL_TREE_BUILD: usize = 1024;

/// Build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Leaves placed ahead of the caller's data in every build. They count
    /// towards the tree depth like any other leaf.
    pub default_leaves: Vec<Vec<u8>>,

    /// Minimum number of pairs in a level before it is hashed in parallel.
    pub parallel_threshold: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            default_leaves: Vec::new(),
            parallel_threshold: SMALL_TREE_BUILD,
        }
    }
}

impl BuildConfig {
    /// Sets the leaves that precede caller data.
    pub fn with_default_leaves<D, I>(mut self, leaves: I) -> Self
    where
        D: Into<Vec<u8>>,
        I: IntoIterator<Item = D>,
    {
        self.default_leaves = leaves.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the parallel hashing threshold.
    pub fn with_parallel_threshold(mut self, pairs: usize) -> Self {
        self.parallel_threshold = pairs;
        self
    }
}

/// Merkle Tree.
///
/// Nodes are linked through owned children rather than laid out in a vec,
/// so the tree can be walked and rendered structurally. A diagram of a
/// four leaf tree:
///
/// ```text
///         root = h1234 = h(h12 + h34)
///        /                           \
///  h12 = h(tx1 + tx2)          h34 = h(tx3 + tx4)
///   /            \              /            \
/// tx1            tx2          tx3            tx4
/// ```
///
/// The number of inputs is not always a power of two. Whenever a level is
/// odd, its last node is duplicated as a childless copy and paired with
/// itself, so that node is hashed by concatenating it with its own value.
///
/// `depth` always equals the structural height of `root`.
pub struct MerkleTree<A: Algorithm = Sha256Algorithm> {
    root: Node,
    leafs: usize,
    depth: usize,
    _a: PhantomData<A>,
}

impl<A: Algorithm> MerkleTree<A> {
    /// Creates new merkle tree from a list of leaf buffers.
    pub fn new<D, I>(data: I) -> Result<MerkleTree<A>>
    where
        D: Into<Vec<u8>>,
        I: IntoIterator<Item = D>,
    {
        Self::new_with_config(data, &BuildConfig::default())
    }

    /// Creates new merkle tree from a list of leaf buffers, preceded by the
    /// configured default leaves.
    pub fn new_with_config<D, I>(data: I, config: &BuildConfig) -> Result<MerkleTree<A>>
    where
        D: Into<Vec<u8>>,
        I: IntoIterator<Item = D>,
    {
        let mut nodes = create_nodes(config.default_leaves.iter().cloned());
        nodes.extend(create_nodes(data));
        Self::from_nodes_with_config(nodes, config)
    }

    /// Creates new merkle tree from already built leaf nodes.
    ///
    /// Fails with [`Error::NotALeaf`] if any node has children.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<MerkleTree<A>> {
        Self::from_nodes_with_config(nodes, &BuildConfig::default())
    }

    fn from_nodes_with_config(nodes: Vec<Node>, config: &BuildConfig) -> Result<MerkleTree<A>> {
        if let Some(index) = nodes.iter().position(|n| !n.is_leaf()) {
            return Err(Error::NotALeaf { index });
        }

        let leafs = nodes.len();
        debug!(
            "building merkle tree from {} leaves ({} default)",
            leafs,
            config.default_leaves.len()
        );

        let (root, levels) = Self::build(nodes, config.parallel_threshold)?;

        let depth = depth_of(leafs);
        debug_assert_eq!(depth, levels);

        Ok(MerkleTree {
            root,
            leafs,
            depth,
            _a: PhantomData,
        })
    }

    /// Folds `nodes` level by level into a single root. Returns the root and
    /// the number of levels traversed, the leaf level included.
    fn build(mut nodes: Vec<Node>, parallel_threshold: usize) -> Result<(Node, usize)> {
        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut levels = 1;
        while nodes.len() > 1 {
            // Odd number of nodes, duplicate last.
            if nodes.len() & 1 == 1 {
                if let Some(last) = nodes.last().map(Node::duplicate) {
                    nodes.push(last);
                }
            }

            trace!("level {}: hashing {} pairs", levels, nodes.len() / 2);
            nodes = Self::fold_level(nodes, parallel_threshold);
            levels += 1;
        }

        match nodes.pop() {
            Some(root) => Ok((root, levels)),
            None => Err(Error::EmptyInput),
        }
    }

    /// Pairs an even level `(0,1), (2,3), ...` into the next level, keeping
    /// pair order.
    fn fold_level(level: Vec<Node>, parallel_threshold: usize) -> Vec<Node> {
        debug_assert_eq!(level.len() % 2, 0);

        let mut pairs = Vec::with_capacity(level.len() / 2);
        let mut iter = level.into_iter();
        while let (Some(lhs), Some(rhs)) = (iter.next(), iter.next()) {
            pairs.push((lhs, rhs));
        }

        if pairs.len() >= parallel_threshold {
            // Indexed collect keeps the output in pair order.
            pairs
                .into_par_iter()
                .map(|(lhs, rhs)| Node::parent(&mut A::default(), lhs, rhs))
                .collect()
        } else {
            let mut a = A::default();
            pairs
                .into_iter()
                .map(|(lhs, rhs)| Node::parent(&mut a, lhs, rhs))
                .collect()
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the merkle root value.
    pub fn root_value(&self) -> &[u8] {
        self.root.value()
    }

    /// Returns depth of the tree: levels from the leaves to the root,
    /// inclusive.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns number of leaves the tree was built upon, default leaves
    /// included.
    pub fn leafs(&self) -> usize {
        self.leafs
    }

    /// Pre-order search for `target`, see [`lookup::find`].
    pub fn find(&self, target: &[u8]) -> Option<&[u8]> {
        lookup::find(Some(&self.root), target)
    }

    /// Builds a value index over every node of the tree.
    pub fn index(&self) -> LookupIndex<'_> {
        LookupIndex::new(&self.root)
    }
}

impl<A: Algorithm> Clone for MerkleTree<A> {
    fn clone(&self) -> Self {
        MerkleTree {
            root: self.root.clone(),
            leafs: self.leafs,
            depth: self.depth,
            _a: PhantomData,
        }
    }
}

impl<A: Algorithm> PartialEq for MerkleTree<A> {
    fn eq(&self, other: &Self) -> bool {
        self.leafs == other.leafs && self.depth == other.depth && self.root == other.root
    }
}

impl<A: Algorithm> Eq for MerkleTree<A> {}

impl<A: Algorithm> fmt::Debug for MerkleTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("root", &hex::encode(self.root.value()))
            .field("leafs", &self.leafs)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<A: Algorithm> fmt::Display for MerkleTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Builds a SHA-256 merkle tree over `leaves`.
///
/// Fails with [`Error::EmptyInput`] when `leaves` is empty.
pub fn build_tree<D, I>(leaves: I) -> Result<MerkleTree>
where
    D: Into<Vec<u8>>,
    I: IntoIterator<Item = D>,
{
    MerkleTree::new(leaves)
}

/// Number of levels a tree over `leafs` leaves has, leaf level included.
///
/// Each level halves the count, rounding odd counts up as the duplication
/// rule does, until one node remains.
pub fn depth_of(mut leafs: usize) -> usize {
    if leafs == 0 {
        return 0;
    }

    let mut depth = 1;
    while leafs > 1 {
        leafs = leafs.div_ceil(2);
        depth += 1;
    }
    depth
}
