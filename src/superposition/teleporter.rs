//! Teleporter cells: one entrance edge plus a jump to a paired point

use crate::element::{Element, TeleporterDirection};
use crate::math::random::RandomSelector;
use crate::restriction::{Restriction, RestrictionKind};
use crate::superposition::bitset::EdgeBitset;
use crate::topology::Topology;

const OPTIONAL_DIRECTIONS: [TeleporterDirection; 2] =
    [TeleporterDirection::Bidirectional, TeleporterDirection::Outgoing];

/// Remaining entrances and pairing demands of a teleporter cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleporterSuperposition<T: Topology> {
    entrances: EdgeBitset,
    required: Vec<(T::Point, TeleporterDirection)>,
    prevented: Vec<T::Point>,
    optional_one_ways: bool,
    self_targeted: bool,
}

impl<T: Topology> Default for TeleporterSuperposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Topology> TeleporterSuperposition<T> {
    /// Superposition with every entrance open and no pairing demand
    pub fn new() -> Self {
        Self {
            entrances: EdgeBitset::all(T::edge_count()),
            required: Vec::new(),
            prevented: Vec::new(),
            optional_one_ways: true,
            self_targeted: false,
        }
    }

    /// Pairing demanded by an already placed teleporter
    pub fn required_target(&self) -> Option<(T::Point, TeleporterDirection)> {
        self.required.first().copied()
    }

    /// Narrow entrances and record pairing demands
    ///
    /// One-way demands are left to other kinds and return false.
    pub fn apply_restriction(&mut self, restriction: &Restriction<T>, point: T::Point) -> bool {
        match &restriction.kind {
            RestrictionKind::Wall(edge) => {
                self.entrances.remove(T::edge_index(*edge));
                true
            }
            RestrictionKind::Passage(edge) => {
                let index = T::edge_index(*edge);
                let keep = self.entrances.contains(index);
                self.entrances = EdgeBitset::new(T::edge_count());
                if keep {
                    self.entrances.insert(index);
                }
                true
            }
            RestrictionKind::TeleporterTarget { target, direction } => {
                if *target == point {
                    self.self_targeted = true;
                } else if !self.required.contains(&(*target, *direction)) {
                    self.required.push((*target, *direction));
                }
                true
            }
            RestrictionKind::PreventTeleporterTarget(target) => {
                if !self.prevented.contains(target) {
                    self.prevented.push(*target);
                }
                true
            }
            RestrictionKind::NoOptionalOneWays => {
                self.optional_one_ways = false;
                true
            }
            RestrictionKind::OneWayIncome(_)
            | RestrictionKind::OneWayOutgoing(_)
            | RestrictionKind::Category(_) => false,
        }
    }

    /// Forget every restriction
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn free_directions(&self) -> &'static [TeleporterDirection] {
        if self.optional_one_ways {
            &OPTIONAL_DIRECTIONS
        } else {
            &[TeleporterDirection::Bidirectional]
        }
    }

    /// Entrances times direction choices, zero on conflicting pairings
    ///
    /// Free target choice does not contribute: the candidate set is only
    /// known at collapse time.
    pub fn entropy(&self) -> usize {
        if self.self_targeted || self.required.len() > 1 {
            return 0;
        }
        let directions = match self.required.first() {
            Some((target, _)) if self.prevented.contains(target) => return 0,
            Some(_) => 1,
            None => self.free_directions().len(),
        };
        self.entrances.count() * directions
    }

    /// Pick an entrance, then honour the pairing demand or draw a free target
    pub fn collapse(
        &self,
        point: T::Point,
        candidates: &[T::Point],
        selector: &mut RandomSelector,
    ) -> Option<Element<T>> {
        if self.entropy() == 0 {
            return None;
        }
        let entrances = self.entrances.edges::<T>();
        let entrance = *selector.choose(&entrances)?;

        let (target, direction) = match self.required_target() {
            Some(required) => required,
            None => {
                let targets: Vec<T::Point> = candidates
                    .iter()
                    .copied()
                    .filter(|candidate| *candidate != point && !self.prevented.contains(candidate))
                    .collect();
                let target = *selector.choose(&targets)?;
                let direction = *selector.choose(self.free_directions())?;
                (target, direction)
            }
        };
        Some(Element::Teleporter {
            entrance,
            target,
            direction,
        })
    }
}
