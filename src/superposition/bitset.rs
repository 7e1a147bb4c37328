use bitvec::prelude::*;
use std::fmt;

use crate::topology::Topology;

/// Fixed-size bitset over the edges of a topology
///
/// Bits are addressed by [`Topology::edge_index`], so a bitset only makes
/// sense together with the topology it was built for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeBitset {
    bits: BitVec,
}

impl EdgeBitset {
    /// Create a bitset with no edges present
    pub fn new(edge_count: usize) -> Self {
        Self {
            bits: bitvec![0; edge_count],
        }
    }

    /// Create a bitset containing every edge
    pub fn all(edge_count: usize) -> Self {
        Self {
            bits: bitvec![1; edge_count],
        }
    }

    /// Create a bitset from edge indices, ignoring out-of-range ones
    pub fn from_indices(edge_count: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut bitset = Self::new(edge_count);
        for index in indices {
            bitset.insert(index);
        }
        bitset
    }

    /// Create a bitset from topology edges
    pub fn from_edges<T: Topology>(edges: impl IntoIterator<Item = T::Edge>) -> Self {
        Self::from_indices(T::edge_count(), edges.into_iter().map(T::edge_index))
    }

    /// Insert an edge index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove an edge index
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Test edge membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no edges are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count edges in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all edge indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Resolve the set back into topology edges
    pub fn edges<T: Topology>(&self) -> Vec<T::Edge> {
        let all = T::all_edges();
        self.bits
            .iter_ones()
            .filter_map(|index| all.get(index).copied())
            .collect()
    }
}

impl fmt::Display for EdgeBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeBitset({} edges: {:?})", self.count(), self.to_vec())
    }
}
