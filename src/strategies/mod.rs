//! Repair strategies run by the generation pipeline

/// Remove redundant edges at random
pub mod edge_cutting;
/// Break cycles shorter than a minimum length
pub mod min_length_cycle;
/// Merge areas with one-way links
pub mod one_way_merge;
/// Merge areas by opening passages
pub mod random_merge;
/// Helpers shared by every strategy
pub mod support;
/// Merge areas with teleporter pairs
pub mod teleporter_merge;

pub use edge_cutting::RedundantEdgeCutting;
pub use min_length_cycle::MinLengthCycleStrategy;
pub use one_way_merge::OneWayMergeStrategy;
pub use random_merge::RandomMergeStrategy;
pub use teleporter_merge::TeleporterMergeStrategy;
