//! Cells mixing passages with directed edges
//!
//! Each edge is either still undefined or fixed to one role. A valid
//! one-way cell needs at least one way in (an income or a passage) and at
//! least one directed edge (an income or an outgoing). Entropy counts the
//! completions of the undefined edges that satisfy both, using
//! inclusion-exclusion over the two failure modes.

use crate::element::{EdgeRole, Element};
use crate::math::combinatorics::{assignments, saturating_power};
use crate::math::random::RandomSelector;
use crate::restriction::{Restriction, RestrictionKind};
use crate::topology::Topology;

const ALL_ROLES: [EdgeRole; 4] = [
    EdgeRole::Wall,
    EdgeRole::Passage,
    EdgeRole::Income,
    EdgeRole::Outgoing,
];
const PLAIN_ROLES: [EdgeRole; 2] = [EdgeRole::Wall, EdgeRole::Passage];

/// Per-edge role assignment of a one-way cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneWaySuperposition<T: Topology> {
    roles: Vec<Option<EdgeRole>>,
    optional_one_ways: bool,
    conflicting: bool,
    marker: std::marker::PhantomData<T>,
}

impl<T: Topology> Default for OneWaySuperposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Topology> OneWaySuperposition<T> {
    /// Superposition with every edge undefined
    pub fn new() -> Self {
        Self {
            roles: vec![None; T::edge_count()],
            optional_one_ways: true,
            conflicting: false,
            marker: std::marker::PhantomData,
        }
    }

    /// Role fixed for an edge, `None` while undefined
    pub fn role(&self, edge: T::Edge) -> Option<EdgeRole> {
        self.roles.get(T::edge_index(edge)).copied().flatten()
    }

    /// Fix edge roles from edge restrictions or disable optional one-ways
    ///
    /// Two different roles demanded for the same edge leave the
    /// superposition with no option. Once no completion remains the
    /// superposition stays exhausted until [`Self::reset`]. Returns false
    /// for teleporter and category restrictions.
    pub fn apply_restriction(&mut self, restriction: &Restriction<T>) -> bool {
        if restriction.kind == RestrictionKind::NoOptionalOneWays {
            self.optional_one_ways = false;
        } else {
            let Some((edge, role)) = restriction.kind.edge_role() else {
                return false;
            };
            if let Some(slot) = self.roles.get_mut(T::edge_index(edge)) {
                match *slot {
                    None => *slot = Some(role),
                    Some(existing) if existing != role => self.conflicting = true,
                    Some(_) => {}
                }
            }
        }
        if self.entropy() == 0 {
            self.conflicting = true;
        }
        true
    }

    /// Forget every fixed role
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn undefined_roles(&self) -> &'static [EdgeRole] {
        if self.optional_one_ways {
            &ALL_ROLES
        } else {
            &PLAIN_ROLES
        }
    }

    /// Number of valid completions of the undefined edges
    pub fn entropy(&self) -> usize {
        if self.conflicting {
            return 0;
        }
        let undefined = self.roles.iter().filter(|role| role.is_none()).count();
        let fixed = || self.roles.iter().flatten();
        let has_entrance = fixed().any(|role| matches!(role, EdgeRole::Income | EdgeRole::Passage));
        let has_direction = fixed().any(|role| matches!(role, EdgeRole::Income | EdgeRole::Outgoing));

        // Completions lacking an entrance use only walls and outgoing edges;
        // completions lacking a direction use only walls and passages.
        let options = self.undefined_roles().len();
        let without_entrance = if self.optional_one_ways { 2 } else { 1 };
        let without_direction = 2;

        let mut total = saturating_power(options, undefined);
        if !has_entrance && !has_direction {
            total = total.saturating_add(1);
        }
        if !has_entrance {
            total = total.saturating_sub(saturating_power(without_entrance, undefined));
        }
        if !has_direction {
            total = total.saturating_sub(saturating_power(without_direction, undefined));
        }
        total
    }

    /// Pick one valid completion uniformly
    pub fn collapse(&self, selector: &mut RandomSelector) -> Option<Element<T>> {
        if self.entropy() == 0 {
            return None;
        }
        let undefined: Vec<usize> = self
            .roles
            .iter()
            .enumerate()
            .filter(|(_, role)| role.is_none())
            .map(|(index, _)| index)
            .collect();
        let choices = self.undefined_roles();

        let completions: Vec<Vec<EdgeRole>> = assignments(undefined.len(), choices.len())
            .into_iter()
            .filter_map(|assignment| {
                let mut roles: Vec<EdgeRole> = self
                    .roles
                    .iter()
                    .map(|role| role.unwrap_or(EdgeRole::Wall))
                    .collect();
                for (&index, &choice) in undefined.iter().zip(&assignment) {
                    let slot = roles.get_mut(index)?;
                    *slot = *choices.get(choice)?;
                }
                Self::is_valid(&roles).then_some(roles)
            })
            .collect();

        let roles = selector.choose(&completions)?;
        let mut income = Vec::new();
        let mut outgoing = Vec::new();
        let mut passages = Vec::new();
        for (&edge, role) in T::all_edges().iter().zip(roles) {
            match role {
                EdgeRole::Income => income.push(edge),
                EdgeRole::Outgoing => outgoing.push(edge),
                EdgeRole::Passage => passages.push(edge),
                EdgeRole::Wall => {}
            }
        }
        Some(Element::OneWay {
            income,
            outgoing,
            passages,
        })
    }

    fn is_valid(roles: &[EdgeRole]) -> bool {
        let has_entrance = roles
            .iter()
            .any(|role| matches!(role, EdgeRole::Income | EdgeRole::Passage));
        let has_direction = roles
            .iter()
            .any(|role| matches!(role, EdgeRole::Income | EdgeRole::Outgoing));
        has_entrance && has_direction
    }
}
