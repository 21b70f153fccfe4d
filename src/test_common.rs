use crate::hash::{Algorithm, Digest, Sha256Algorithm};
use crate::merkle::MerkleTree;
use crate::node::Node;

pub const TX: [&[u8]; 9] = [
    b"Transaction1",
    b"Transaction2",
    b"Transaction3",
    b"Transaction4",
    b"Transaction5",
    b"Transaction6",
    b"Transaction7",
    b"Transaction8",
    b"Transaction9",
];

pub fn sha256(data: &[u8]) -> Digest {
    Sha256Algorithm::new().digest(data)
}

/// `sha256(left || right)`, computed independently of `Algorithm::node`.
pub fn h(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut buf = left.to_vec();
    buf.extend_from_slice(right);
    sha256(&buf).to_vec()
}

pub fn leaves(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("Transaction{}", i + 1).into_bytes()).collect()
}

pub fn get_tree(n: usize) -> MerkleTree {
    MerkleTree::new(leaves(n)).expect("failed to create tree from leaves")
}

/// Number of nodes on the leftmost root-to-leaf path. The left spine never
/// contains a padding copy, so this is the number of fold levels.
pub fn left_spine_len(root: &Node) -> usize {
    let mut len = 1;
    let mut node = root;
    while let Some(left) = node.left() {
        node = left;
        len += 1;
    }
    len
}

/// Checks `value == HASH(left || right)` for every interior node.
pub fn assert_node_invariant(root: &Node) {
    for (_, node) in root.iter() {
        if let (Some(l), Some(r)) = (node.left(), node.right()) {
            assert_eq!(node.value(), h(l.value(), r.value()).as_slice());
        } else {
            assert!(node.left().is_none() && node.right().is_none());
        }
    }
}
