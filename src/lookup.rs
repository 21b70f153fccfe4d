use std::collections::HashMap;

use crate::node::Node;

/// Searches the tree under `root` for a node whose value equals `target`
/// byte for byte, and returns that node's value.
///
/// Nodes are visited in pre-order (current, left subtree, right subtree) and
/// the first match wins. Leaves and interior digests are compared the same
/// way. An absent root or an empty target is simply not found.
pub fn find<'a>(root: Option<&'a Node>, target: &[u8]) -> Option<&'a [u8]> {
    if target.is_empty() {
        return None;
    }

    root?
        .iter()
        .map(|(_, node)| node.value())
        .find(|value| *value == target)
}

/// Value index over a built tree.
///
/// Maps every distinct node value to the first node holding it in pre-order,
/// so lookups agree with [`find`] while costing a hash probe instead of a
/// walk.
#[derive(Debug, Clone)]
pub struct LookupIndex<'a> {
    nodes: HashMap<&'a [u8], &'a Node>,
}

impl<'a> LookupIndex<'a> {
    /// Indexes every node under `root`.
    pub fn new(root: &'a Node) -> LookupIndex<'a> {
        let mut nodes = HashMap::new();
        for (_, node) in root.iter() {
            nodes.entry(node.value()).or_insert(node);
        }
        LookupIndex { nodes }
    }

    /// Same contract as [`find`].
    pub fn find(&self, target: &[u8]) -> Option<&'a [u8]> {
        if target.is_empty() {
            return None;
        }
        self.nodes.get(target).map(|&node| node.value())
    }

    /// Returns the first node, in pre-order, whose value is `target`.
    pub fn get(&self, target: &[u8]) -> Option<&'a Node> {
        self.nodes.get(target).copied()
    }

    /// Number of distinct values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
