//! Restrictions narrow node superpositions and remember who imposed them

/// Restriction kinds and constructors
pub mod fact;
/// Restriction providers and per-node application logs
pub mod provider;

pub use fact::{CategoryFilter, Restriction, RestrictionKind};
pub use provider::{AppliedRestriction, ProviderId, RestrictionLog};
