use std::fmt;

use crate::hash::Algorithm;

/// Node of a Merkle tree.
///
/// A leaf wraps the caller's original bytes. An interior node holds the
/// digest of its two children's combined values and owns both children.
/// Nodes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: Vec<u8>,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    /// Creates a leaf wrapping `value` unchanged.
    pub fn leaf<D: Into<Vec<u8>>>(value: D) -> Node {
        Node {
            value: value.into(),
            children: None,
        }
    }

    /// Creates an interior node over `left` and `right`, in that order.
    pub fn parent<A: Algorithm>(alg: &mut A, left: Node, right: Node) -> Node {
        let value = alg.node(&left.value, &right.value).to_vec();
        Node {
            value,
            children: Some(Box::new((left, right))),
        }
    }

    /// Returns a childless copy with its own copy of the value.
    ///
    /// Used to pad odd levels; the copy never shares children or storage
    /// with `self`.
    pub fn duplicate(&self) -> Node {
        Node::leaf(self.value.clone())
    }

    /// Stored value: original data for a leaf, digest otherwise.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Left child, `None` for a leaf.
    pub fn left(&self) -> Option<&Node> {
        self.children.as_ref().map(|c| &c.0)
    }

    /// Right child, `None` for a leaf.
    pub fn right(&self) -> Option<&Node> {
        self.children.as_ref().map(|c| &c.1)
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of levels on the longest path from this node down to a leaf,
    /// counting both ends.
    pub fn height(&self) -> usize {
        self.iter().map(|(level, _)| level + 1).max().unwrap_or(0)
    }

    /// Pre-order walk (current, left, right) of this subtree.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![(0, self)] }
    }
}

/// Pre-order iterator over a subtree, yielding `(level, node)` where the
/// starting node is level 0.
///
/// Runs off an explicit stack, so memory is bounded by the tree height and
/// not by the call stack.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        if let Some(children) = node.children.as_deref() {
            // right first so that left pops first
            self.stack.push((level + 1, &children.1));
            self.stack.push((level + 1, &children.0));
        }
        Some((level, node))
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (usize, &'a Node);
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> PreOrder<'a> {
        self.iter()
    }
}

/// Renders the subtree as lowercase hex, one node per line, indented by two
/// spaces per level.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, node) in self.iter() {
            writeln!(f, "{:indent$}{}", "", hex::encode(&node.value), indent = level * 2)?;
        }
        Ok(())
    }
}

/// Leaf factory: wraps every buffer of `data` in a leaf, preserving order.
///
/// Buffers are moved into the leaves, not copied or hashed. Empty input
/// gives an empty vec.
pub fn create_nodes<D, I>(data: I) -> Vec<Node>
where
    D: Into<Vec<u8>>,
    I: IntoIterator<Item = D>,
{
    data.into_iter().map(Node::leaf).collect()
}
