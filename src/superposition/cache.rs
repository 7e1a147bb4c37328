use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::marker::PhantomData;

use crate::element::ElementCategory;
use crate::math::combinatorics::{binomial, combinations};
use crate::superposition::bitset::EdgeBitset;
use crate::topology::Topology;

/// Shape a plain passage set must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArityRule {
    /// Exactly one open edge
    Single,
    /// Two open edges that are opposite to each other
    OppositePair,
    /// Two open edges that are not opposite
    AdjacentPair,
    /// Three or more open edges
    Branching,
}

impl ArityRule {
    /// Rule describing a plain passage kind
    pub const fn for_category(category: ElementCategory) -> Option<Self> {
        match category {
            ElementCategory::DeadEnd => Some(Self::Single),
            ElementCategory::Corridor => Some(Self::OppositePair),
            ElementCategory::Corner => Some(Self::AdjacentPair),
            ElementCategory::Junction => Some(Self::Branching),
            _ => None,
        }
    }

    /// Kind produced by collapsing under this rule
    pub const fn category(self) -> ElementCategory {
        match self {
            Self::Single => ElementCategory::DeadEnd,
            Self::OppositePair => ElementCategory::Corridor,
            Self::AdjacentPair => ElementCategory::Corner,
            Self::Branching => ElementCategory::Junction,
        }
    }

    /// Whether an edge subset satisfies the rule
    pub fn accepts<T: Topology>(self, subset: &EdgeBitset) -> bool {
        match self {
            Self::Single => subset.count() == 1,
            Self::Branching => subset.count() > 2,
            Self::OppositePair | Self::AdjacentPair => {
                let edges = subset.edges::<T>();
                let [first, second] = edges.as_slice() else {
                    return false;
                };
                let opposite = T::opposite(*first) == Some(*second);
                opposite == (self == Self::OppositePair)
            }
        }
    }
}

/// Memoization cache for edge-subset enumeration
///
/// Every plain passage superposition starts from the full list of subsets
/// its rule accepts; computing that list once per topology and rule keeps
/// resets cheap.
pub struct CombinatoricsCache<T: Topology> {
    /// Rule to accepted subsets mapping
    subsets: HashMap<ArityRule, Vec<EdgeBitset>>,
    /// `(n, k)` to binomial coefficient mapping
    binomials: HashMap<(usize, usize), usize>,

    /// Cache performance statistics
    pub stats: CacheStats,
    marker: PhantomData<T>,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl<T: Topology> Default for CombinatoricsCache<T> {
    fn default() -> Self {
        Self {
            subsets: HashMap::new(),
            binomials: HashMap::new(),
            stats: CacheStats::default(),
            marker: PhantomData,
        }
    }
}

impl<T: Topology> CombinatoricsCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Every edge subset accepted by a rule, computed on first use
    pub fn edge_subsets(&mut self, rule: ArityRule) -> &[EdgeBitset] {
        if self.subsets.contains_key(&rule) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            let subsets = self.enumerate(rule);
            self.subsets.insert(rule, subsets);
        }
        self.subsets.get(&rule).map_or(&[], Vec::as_slice)
    }

    /// Memoized binomial coefficient
    pub fn binomial(&mut self, n: usize, k: usize) -> usize {
        match self.binomials.entry((n, k)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                *entry.insert(binomial(n, k))
            }
        }
    }

    fn enumerate(&mut self, rule: ArityRule) -> Vec<EdgeBitset> {
        let edge_count = T::edge_count();
        let sizes = match rule {
            ArityRule::Single => 1..=1,
            ArityRule::OppositePair | ArityRule::AdjacentPair => 2..=2,
            ArityRule::Branching => 3..=edge_count,
        };
        let capacity = sizes.clone().map(|size| self.binomial(edge_count, size)).sum();
        let mut subsets = Vec::with_capacity(capacity);
        for size in sizes {
            subsets.extend(
                combinations(edge_count, size)
                    .into_iter()
                    .map(|indices| EdgeBitset::from_indices(edge_count, indices))
                    .filter(|subset| rule.accepts::<T>(subset)),
            );
        }
        subsets
    }
}
