//! Provenance of restrictions and the per-node log that replays them

use crate::restriction::Restriction;
use crate::topology::Topology;

/// Origin of a restriction, used to retract everything it imposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderId<P> {
    /// Walls closing the outer boundary of the field
    Border,
    /// Outcome of the element determined at a point
    Element(P),
    /// A repair strategy, identified by a constant
    Strategy(u32),
}

/// A restriction as recorded by the node that received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRestriction<T: Topology> {
    /// The recorded restriction
    pub restriction: Restriction<T>,
    /// Who imposed it
    pub provider: ProviderId<T::Point>,
    /// Dropped as soon as the node collapses
    pub onetime: bool,
}

/// Ordered history of restrictions applied to one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionLog<T: Topology> {
    entries: Vec<AppliedRestriction<T>>,
}

impl<T: Topology> Default for RestrictionLog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Topology> RestrictionLog<T> {
    /// Append an entry to the end of the log
    pub fn push(&mut self, entry: AppliedRestriction<T>) {
        self.entries.push(entry);
    }

    /// Entries in application order
    pub fn entries(&self) -> &[AppliedRestriction<T>] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry of a provider, returning how many were removed
    pub fn remove_provider(&mut self, provider: ProviderId<T::Point>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.provider != provider);
        before - self.entries.len()
    }

    /// Drop every one-time entry, returning how many were removed
    pub fn remove_onetime(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.onetime);
        before - self.entries.len()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether a provider has at least one entry
    pub fn has_provider(&self, provider: ProviderId<T::Point>) -> bool {
        self.entries.iter().any(|entry| entry.provider == provider)
    }
}
