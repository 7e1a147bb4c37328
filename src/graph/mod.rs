//! Generic directed multigraph with reversal-aware search and compaction

/// Merging of pass-through vertices
pub mod compaction;
/// Directed multigraph storage
pub mod multigraph;
/// Breadth-first and shortest path search
pub mod search;

pub use compaction::{CompactableEdge, Compaction, compact_vertices};
pub use multigraph::{EdgeId, Graph, GraphEdge};
pub use search::{GraphPath, SearchOptions, first_path, shortest_path};
