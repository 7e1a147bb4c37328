//! Plain passage kinds as a set of still-possible open-edge subsets

use crate::element::{EdgeRole, Element, ElementCategory};
use crate::math::random::RandomSelector;
use crate::restriction::Restriction;
use crate::superposition::bitset::EdgeBitset;
use crate::superposition::cache::{ArityRule, CombinatoricsCache};
use crate::topology::Topology;

/// Remaining open-edge subsets of a dead-end, corridor, corner or junction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSetSuperposition<T: Topology> {
    rule: ArityRule,
    options: Vec<EdgeBitset>,
    marker: std::marker::PhantomData<T>,
}

impl<T: Topology> EdgeSetSuperposition<T> {
    /// Superposition holding every subset the rule accepts
    pub fn new(rule: ArityRule, cache: &mut CombinatoricsCache<T>) -> Self {
        Self {
            rule,
            options: cache.edge_subsets(rule).to_vec(),
            marker: std::marker::PhantomData,
        }
    }

    /// Rule the subsets follow
    pub const fn rule(&self) -> ArityRule {
        self.rule
    }

    /// Kind this superposition collapses into
    pub const fn category(&self) -> ElementCategory {
        self.rule.category()
    }

    /// Subsets still possible
    pub fn options(&self) -> &[EdgeBitset] {
        &self.options
    }

    /// Number of subsets still possible
    pub fn entropy(&self) -> usize {
        self.options.len()
    }

    /// Keep subsets consistent with an edge restriction
    ///
    /// Walls drop subsets opening the edge; passages and one-way demands keep
    /// only subsets opening it. Returns false for restrictions this kind
    /// cannot interpret.
    pub fn apply_restriction(&mut self, restriction: &Restriction<T>) -> bool {
        let Some((edge, role)) = restriction.kind.edge_role() else {
            return false;
        };
        let index = T::edge_index(edge);
        let open = role != EdgeRole::Wall;
        self.options.retain(|subset| subset.contains(index) == open);
        true
    }

    /// Restore every subset the rule accepts
    pub fn reset(&mut self, cache: &mut CombinatoricsCache<T>) {
        self.options = cache.edge_subsets(self.rule).to_vec();
    }

    /// Pick one remaining subset uniformly
    pub fn collapse(&self, selector: &mut RandomSelector) -> Option<Element<T>> {
        let subset = selector.choose(&self.options)?;
        Some(Element::Passage {
            category: self.category(),
            passages: subset.edges::<T>(),
        })
    }
}
