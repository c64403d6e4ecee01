//! Binary Merkle tree over one-time public digests.
//!
//! Nodes are stored in heap order, 1-indexed: `nodes[1]` is the root, the children of
//! `nodes[i]` are `nodes[2i]` and `nodes[2i + 1]`, and the leaves occupy
//! `nodes[2^height..2^(height + 1)]`. `nodes[0]` is unused.
use crate::common::{Digest, ZERO_DIGEST};
use crate::traits::HashFunction;

/// A complete Merkle tree, padded to a power of two with zero digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    height: u32,
    leaves: usize,
    nodes: Vec<Digest>,
}

impl MerkleTree {
    /// Build the tree over `leaves`.
    ///
    /// An empty input gives a tree of height 0 with a zero root, and a single leaf is
    /// its own root.
    pub fn from_leaves<H: HashFunction>(leaves: &[Digest]) -> Self {
        let mut height = 0;
        while (1usize << height) < leaves.len() {
            height += 1;
        }
        let width = 1usize << height;

        let mut nodes = vec![ZERO_DIGEST; 2 * width];
        nodes[width..width + leaves.len()].copy_from_slice(leaves);
        for i in (1..width).rev() {
            nodes[i] = H::hash_pair(&nodes[2 * i], &nodes[2 * i + 1]);
        }

        MerkleTree {
            height,
            leaves: leaves.len(),
            nodes,
        }
    }

    /// Number of levels above the leaves.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of leaves the tree was built from, before padding.
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// The root digest.
    pub fn root(&self) -> Digest {
        self.nodes[1]
    }

    /// All nodes in heap order; index 0 is unused.
    pub fn nodes(&self) -> &[Digest] {
        &self.nodes
    }

    /// Digest stored at leaf `index`, padding included.
    pub fn leaf(&self, index: u32) -> Option<&Digest> {
        let width = 1usize << self.height;
        let index = index as usize;
        if index < width {
            Some(&self.nodes[width + index])
        } else {
            None
        }
    }

    /// Sibling digests from leaf `index` up to, but excluding, the root.
    /// The path has exactly `height` entries; `None` if `index` is outside the tree.
    pub fn auth_path(&self, index: u32) -> Option<Vec<Digest>> {
        let width = 1usize << self.height;
        if index as usize >= width {
            return None;
        }

        let mut node = width + index as usize;
        let mut path = Vec::with_capacity(self.height as usize);
        while node > 1 {
            path.push(self.nodes[node ^ 1]);
            node >>= 1;
        }
        Some(path)
    }
}

/// Fold `leaf` up through `path`. At level `k`, bit `k` of `index` says whether the
/// running node is a right child (sibling hashed on the left) or a left child.
pub fn fold_root<H: HashFunction>(leaf: &Digest, index: u32, path: &[Digest]) -> Digest {
    let mut node = *leaf;
    let mut index = index;
    for sibling in path {
        node = if index & 1 == 0 {
            H::hash_pair(&node, sibling)
        } else {
            H::hash_pair(sibling, &node)
        };
        index >>= 1;
    }
    node
}
