//! Uncollapsed nodes bucketed by entropy

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use indexmap::IndexSet;

use crate::math::random::RandomSelector;

/// Index answering "which uncollapsed point has the lowest entropy"
///
/// Points are kept in buckets keyed by entropy; ties inside the lowest
/// bucket are broken uniformly at random.
#[derive(Debug, Clone)]
pub struct EntropyIndex<P: Copy + Eq + Hash> {
    buckets: BTreeMap<usize, IndexSet<P>>,
    entropies: HashMap<P, usize>,
}

impl<P: Copy + Eq + Hash> Default for EntropyIndex<P> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            entropies: HashMap::new(),
        }
    }
}

impl<P: Copy + Eq + Hash> EntropyIndex<P> {
    /// Empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.entropies.len()
    }

    /// Whether no point is indexed
    pub fn is_empty(&self) -> bool {
        self.entropies.is_empty()
    }

    /// Recorded entropy of a point
    pub fn entropy_of(&self, point: P) -> Option<usize> {
        self.entropies.get(&point).copied()
    }

    /// Insert a point or move it to a new bucket
    pub fn update(&mut self, point: P, entropy: usize) {
        if let Some(previous) = self.entropies.insert(point, entropy) {
            if previous == entropy {
                return;
            }
            self.detach(point, previous);
        }
        self.buckets.entry(entropy).or_default().insert(point);
    }

    /// Drop a point, returning its recorded entropy
    pub fn remove(&mut self, point: P) -> Option<usize> {
        let entropy = self.entropies.remove(&point)?;
        self.detach(point, entropy);
        Some(entropy)
    }

    fn detach(&mut self, point: P, entropy: usize) {
        if let Some(bucket) = self.buckets.get_mut(&entropy) {
            bucket.shift_remove(&point);
            if bucket.is_empty() {
                self.buckets.remove(&entropy);
            }
        }
    }

    /// Lowest entropy currently indexed
    pub fn min_entropy(&self) -> Option<usize> {
        self.buckets.keys().next().copied()
    }

    /// Uniformly random point from the lowest bucket
    pub fn pick_min(&self, selector: &mut RandomSelector) -> Option<P> {
        let bucket = self.buckets.values().next()?;
        let index = selector.choose_index(bucket.len())?;
        bucket.get_index(index).copied()
    }
}
