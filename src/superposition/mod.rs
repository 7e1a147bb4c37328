//! Superpositions: what each node may still become

/// Element kinds without openings
pub mod availability;
/// Edge-indexed bitset
pub mod bitset;
/// Bridge layout availability
pub mod bridge;
/// Memoized edge-subset enumeration
pub mod cache;
/// Plain passage kinds
pub mod edge_set;
/// Dispatch over per-kind superpositions
pub mod element;
/// Node superposition with restriction log and weighted collapse
pub mod node;
/// One-way cells
pub mod one_way;
/// Registered element kinds
pub mod registry;
/// Teleporter cells
pub mod teleporter;

pub use cache::{ArityRule, CacheStats, CombinatoricsCache};
pub use element::{CollapseContext, ElementSuperposition};
pub use node::NodeSuperposition;
pub use registry::SuperpositionRegistry;
