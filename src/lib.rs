//! Wave function collapse generator for labyrinths with graph-based repair
//!
//! Every cell holds a superposition of element kinds narrowed by restrictions
//! from its neighbours. Once the field is collapsed a compacted paths graph
//! and its strongly connected areas are derived, and pluggable strategies
//! regenerate small groups of cells to connect areas and shape cycles.

#![forbid(unsafe_code)]

/// Element kinds, collapsed elements and their connections
pub mod element;
/// Collapse loop, regenerate transactions and the repair pipeline
pub mod generation;
/// Generic directed multigraph with searches and compaction
pub mod graph;
/// Command line, configuration, errors and progress output
pub mod io;
/// Combinatorics and seeded random selection
pub mod math;
/// Paths graph and areas graph derived from a collapsed field
pub mod paths;
/// Restriction facts and provider bookkeeping
pub mod restriction;
/// Repair strategies for isolated areas, short cycles and redundant edges
pub mod strategies;
/// Per-node superpositions of element kinds
pub mod superposition;
/// Topology contract, square grid and field storage
pub mod topology;

pub use io::error::{LabyrinthError, Result};
