//! All kinds still possible at one point, plus the log that produced them

use tracing::trace;

use crate::element::{CategoryWeights, Element, ElementCategory};
use crate::restriction::{AppliedRestriction, ProviderId, Restriction, RestrictionKind, RestrictionLog};
use crate::superposition::cache::CombinatoricsCache;
use crate::superposition::element::{CollapseContext, ElementSuperposition};
use crate::topology::Topology;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Member<T: Topology> {
    superposition: ElementSuperposition<T>,
    available: bool,
}

/// Superposition of every registered kind at a point
///
/// The node remembers every restriction it received in order. Retracting a
/// provider rebuilds the members from scratch and replays what is left, so
/// the result never depends on the order restrictions were retracted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSuperposition<T: Topology> {
    point: T::Point,
    members: Vec<Member<T>>,
    log: RestrictionLog<T>,
}

impl<T: Topology> NodeSuperposition<T> {
    /// Unrestricted node holding one member per registered kind
    pub fn new(
        point: T::Point,
        categories: &[ElementCategory],
        cache: &mut CombinatoricsCache<T>,
    ) -> Self {
        let members = categories
            .iter()
            .map(|&category| Member {
                superposition: ElementSuperposition::new(category, cache),
                available: true,
            })
            .collect();
        Self {
            point,
            members,
            log: RestrictionLog::default(),
        }
    }

    /// Position of the node
    pub const fn point(&self) -> T::Point {
        self.point
    }

    /// Restrictions received so far, in order
    pub const fn restrictions(&self) -> &RestrictionLog<T> {
        &self.log
    }

    /// Sum of the entropies of available members
    pub fn entropy(&self) -> usize {
        self.members
            .iter()
            .filter(|member| member.available)
            .map(|member| member.superposition.entropy())
            .sum()
    }

    /// Entropy of one kind, zero when unavailable, `None` when unregistered
    pub fn category_entropy(&self, category: ElementCategory) -> Option<usize> {
        self.members
            .iter()
            .find(|member| member.superposition.category() == category)
            .map(|member| {
                if member.available {
                    member.superposition.entropy()
                } else {
                    0
                }
            })
    }

    /// Kinds with at least one remaining option
    pub fn possible_categories(&self) -> Vec<ElementCategory> {
        self.members
            .iter()
            .filter(|member| member.available && member.superposition.entropy() > 0)
            .map(|member| member.superposition.category())
            .collect()
    }

    /// Record a restriction and narrow every member by it
    pub fn apply_restriction(
        &mut self,
        restriction: Restriction<T>,
        provider: ProviderId<T::Point>,
        onetime: bool,
    ) {
        Self::narrow(&mut self.members, self.point, &restriction);
        self.log.push(AppliedRestriction {
            restriction,
            provider,
            onetime,
        });
    }

    fn narrow(members: &mut [Member<T>], point: T::Point, restriction: &Restriction<T>) {
        if let RestrictionKind::Category(filter) = &restriction.kind {
            for member in members.iter_mut() {
                if !filter.permits(member.superposition.category()) {
                    member.available = false;
                }
            }
            return;
        }
        for member in members.iter_mut() {
            let handled = member.superposition.apply_restriction(restriction, point);
            if !handled && !restriction.allow_unhandled {
                member.available = false;
            }
        }
    }

    fn replay(&mut self, cache: &mut CombinatoricsCache<T>) {
        for member in &mut self.members {
            member.superposition.reset(cache);
            member.available = true;
        }
        for entry in self.log.entries() {
            Self::narrow(&mut self.members, self.point, &entry.restriction);
        }
    }

    /// Retract every restriction of a provider, returning how many were removed
    pub fn reset_restrictions(
        &mut self,
        provider: ProviderId<T::Point>,
        cache: &mut CombinatoricsCache<T>,
    ) -> usize {
        let removed = self.log.remove_provider(provider);
        if removed > 0 {
            self.replay(cache);
        }
        removed
    }

    /// Whether a placed teleporter already demands pairing with this node
    pub fn has_required_teleporter_target(&self) -> bool {
        self.members.iter().any(|member| {
            member.available && member.superposition.required_teleporter_target().is_some()
        })
    }

    /// Whether collapsing may draw a free teleporter target
    pub fn may_pick_teleporter_target(&self) -> bool {
        self.members.iter().any(|member| {
            member.available
                && member.superposition.category() == ElementCategory::Teleporter
                && member.superposition.entropy() > 0
                && member.superposition.required_teleporter_target().is_none()
        })
    }

    /// Weighted draw of a kind followed by a draw inside it
    ///
    /// A kind whose draw fails is excluded and the draw repeated among the
    /// rest. On success one-time restrictions are dropped from the log.
    pub fn wave_function_collapse(
        &mut self,
        weights: &CategoryWeights,
        context: &mut CollapseContext<'_, T>,
        cache: &mut CombinatoricsCache<T>,
    ) -> Option<Element<T>> {
        let mut candidates: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.available && member.superposition.entropy() > 0)
            .map(|(index, _)| index)
            .collect();

        while !candidates.is_empty() {
            let candidate_weights: Vec<f64> = candidates
                .iter()
                .filter_map(|&index| self.members.get(index))
                .map(|member| weights.get(member.superposition.category()))
                .collect();
            let pick = context
                .selector
                .weighted_choice(&candidate_weights)
                .min(candidates.len() - 1);
            let index = candidates.remove(pick);

            let Some(member) = self.members.get(index) else {
                continue;
            };
            match member.superposition.collapse(context) {
                Some(element) => {
                    if self.log.remove_onetime() > 0 {
                        self.replay(cache);
                    }
                    return Some(element);
                }
                None => trace!(
                    point = ?self.point,
                    category = %member.superposition.category(),
                    "kind failed to collapse"
                ),
            }
        }
        None
    }
}
