//! Node assignments, bitstring decoding and cut evaluation.
//!
//! Backends report measurement outcomes as bitstrings whose rightmost
//! character is qubit 0. Decoding therefore reverses the string: the last
//! character becomes node 0 and the first becomes the highest node.

use std::collections::BTreeMap;


use crate::error::{CutError, CutResult};
use crate::graph::Graph;

/// A binary value (side of the cut) for each node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: BTreeMap<usize, bool>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a backend bitstring (rightmost character is node 0).
    pub fn from_bitstring(bitstring: &str) -> CutResult<Self> {
        bitstring
            .chars()
            .rev()
            .enumerate()
            .map(|(node, c)| match c {
                '0' => Ok((node, false)),
                '1' => Ok((node, true)),
                _ => Err(CutError::InvalidBitstring(bitstring.to_string())),
            })
            .collect()
    }

    /// Build a `width`-node assignment from an integer state: bit `i` is node `i`.
    ///
    /// Equivalent to formatting `state` as a zero-padded binary string of
    /// `width` characters and decoding it. Bits at or above 64 are zero.
    pub fn from_state(state: u64, width: usize) -> Self {
        (0..width)
            .map(|node| (node, node < 64 && (state >> node) & 1 == 1))
            .collect()
    }

    /// Build a `width`-node assignment from little-endian 64-bit words.
    pub fn from_words(words: &[u64], width: usize) -> Self {
        (0..width)
            .map(|node| {
                let word = words.get(node / 64).copied().unwrap_or(0);
                (node, (word >> (node % 64)) & 1 == 1)
            })
            .collect()
    }

    /// Set the value of a node.
    pub fn set(&mut self, node: usize, value: bool) {
        self.values.insert(node, value);
    }

    /// Value of a node, if assigned.
    pub fn get(&self, node: usize) -> Option<bool> {
        self.values.get(&node).copied()
    }

    /// Number of assigned nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no node is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(node, value)` in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.values.iter().map(|(&node, &value)| (node, value))
    }

    /// Values as 0/1 in ascending node order.
    pub fn bits(&self) -> Vec<u8> {
        self.values.values().map(|&v| u8::from(v)).collect()
    }

    /// The same partition with every node on the opposite side.
    pub fn complement(&self) -> Self {
        self.iter().map(|(node, value)| (node, !value)).collect()
    }

    /// Encode with the backend convention: highest node first, node 0 last.
    pub fn to_bitstring(&self) -> String {
        self.values
            .values()
            .rev()
            .map(|&v| if v { '1' } else { '0' })
            .collect()
    }
}

impl FromIterator<(usize, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (usize, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: Vec<String> = self.bits().iter().map(u8::to_string).collect();
        write!(f, "[{}]", bits.join(", "))
    }
}

/// Count the edges whose endpoints lie on different sides of the cut.
///
/// Every endpoint must be assigned; a missing node is reported as
/// [`CutError::UnassignedNode`].
pub fn cut_value(graph: &Graph, assignment: &Assignment) -> CutResult<usize> {
    let side = |node: usize| assignment.get(node).ok_or(CutError::UnassignedNode(node));

    graph.edges().iter().try_fold(0, |cut, edge| {
        Ok(if side(edge.from)? != side(edge.to)? {
            cut + 1
        } else {
            cut
        })
    })
}

/// Decode a bitstring and evaluate its cut value.
pub fn bitstring_cut_value(graph: &Graph, bitstring: &str) -> CutResult<usize> {
    cut_value(graph, &Assignment::from_bitstring(bitstring)?)
}
