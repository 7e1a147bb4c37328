//! Connectivity of a determined field: paths graph and areas graph

/// Area identifiers, subgraphs and inter-area links
pub mod area;
/// Partition of the paths graph into areas
pub mod areas_graph;
/// Cycle and mutual-reachability grouping of areas
pub mod grouping;
/// Movement graph derived from determined elements
pub mod paths_graph;

pub use area::{AreaEdge, AreaId, PathsGraphArea};
pub use areas_graph::AreasGraph;
pub use paths_graph::{PathsEdgeKind, PathsGraph, PathsGraphEdge, PathsGraphVertex, PathsPatch};
