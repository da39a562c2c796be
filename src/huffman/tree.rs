// src/huffman/tree.rs

//! Huffman tree construction from a frequency table.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to their children by
//! index, so the tree needs no pointer juggling and drops in one piece.
//! Construction is the classic greedy merge: repeatedly combine the two
//! lowest-weight nodes until one root remains, which minimizes the weighted
//! path length over all binary prefix trees for the distribution.
//!
//! Equal weights are broken deterministically by insertion order, with
//! leaves seeded in ascending byte-value order before any merge. Encode and
//! decode both build from the same frequency table, so they always
//! reconstruct the identical tree shape; the frequency table is the
//! canonical source of truth and the code table is never serialized.

use crate::huffman::freq::FreqTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Index of a node within the tree arena.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// A symbol-bearing leaf.
    Leaf(u8),
    /// An internal node owning exactly two children.
    Internal { zero: NodeId, one: NodeId },
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) weight: u64,
    pub(crate) kind: NodeKind,
}

/// Queue entry: a node awaiting its merge, keyed by weight then insertion
/// order so that ties resolve identically on every build.
#[derive(Debug, PartialEq, Eq)]
struct Pending {
    weight: u64,
    order: u32,
    node: NodeId,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman tree with as many leaves as there are
/// nonzero-frequency byte values.
#[derive(Debug, Clone)]
pub struct HuffTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffTree {
    /// Builds the tree for a frequency table. Returns `None` when the table
    /// is entirely zero (nothing was scanned). A table with exactly one
    /// distinct value yields a lone leaf root with no internal nodes.
    pub fn build(freqs: &FreqTable) -> Option<Self> {
        let mut nodes = Vec::new();
        let mut heap = BinaryHeap::new();
        let mut order = 0u32;

        for (symbol, weight) in freqs.nonzero() {
            let id = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Leaf(symbol),
            });
            heap.push(Pending {
                weight,
                order,
                node: id,
            });
            order += 1;
        }

        if heap.is_empty() {
            return None;
        }

        while heap.len() > 1 {
            // first-extracted becomes the zero-branch
            let zero = heap.pop().unwrap();
            let one = heap.pop().unwrap();
            let weight = nodes[zero.node].weight + nodes[one.node].weight;
            let id = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal {
                    zero: zero.node,
                    one: one.node,
                },
            });
            heap.push(Pending {
                weight,
                order,
                node: id,
            });
            order += 1;
        }

        let root = heap.pop()?.node;
        Some(Self { nodes, root })
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Child reached from `id` on the given bit; leaves stay put.
    pub(crate) fn step(&self, id: NodeId, bit: bool) -> NodeId {
        match self.nodes[id].kind {
            NodeKind::Internal { zero, one } => {
                if bit {
                    one
                } else {
                    zero
                }
            }
            NodeKind::Leaf(_) => id,
        }
    }

    /// Number of symbol-bearing leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Leaf(_)))
            .count()
    }

    /// Sum over all leaves of `weight * depth`; the quantity the greedy
    /// merge minimizes. Zero for a single-leaf tree.
    pub fn weighted_path_length(&self) -> u64 {
        let mut wpl = 0u64;
        let mut stack = vec![(self.root, 0u64)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id].kind {
                NodeKind::Leaf(_) => wpl += self.nodes[id].weight * depth,
                NodeKind::Internal { zero, one } => {
                    stack.push((zero, depth + 1));
                    stack.push((one, depth + 1));
                }
            }
        }
        wpl
    }
}
