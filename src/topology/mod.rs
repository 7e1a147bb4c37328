//! Topology contract shared by every generic component
//!
//! A topology is a type: its edges, points and adjacency rules are fixed at
//! compile time and exposed as associated functions. The size of a concrete
//! field is carried separately by [`Topology::Size`].

/// Field storage bounded by a topology size
pub mod field;
/// Square grid topology
pub mod square;

pub use field::Field;
pub use square::{SquareEdge, SquarePoint, SquareSize, SquareTopology};

use std::fmt::Debug;
use std::hash::Hash;

/// Abstract adjacency model every labyrinth component is generic over
///
/// Implementations must keep `next_point` total over the edge set and, for
/// symmetric topologies, satisfy `adapt_to_next_point(adapt_to_next_point(e)) == e`.
pub trait Topology: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + 'static {
    /// Position of a cell
    type Point: Copy + Debug + Eq + Hash + Ord;
    /// Direction leaving a cell
    type Edge: Copy + Debug + Eq + Hash + Ord;
    /// Shape descriptor bounding a field
    type Size: Copy + Debug + Eq;

    /// Every edge of the topology in a fixed order
    fn all_edges() -> &'static [Self::Edge];

    /// Position of an edge inside [`Topology::all_edges`]
    fn edge_index(edge: Self::Edge) -> usize;

    /// Edge pointing the opposite way, if the topology defines one
    fn opposite(edge: Self::Edge) -> Option<Self::Edge>;

    /// Neighbouring point reached by leaving `point` through `edge`
    fn next_point(point: Self::Point, edge: Self::Edge) -> Self::Point;

    /// The same edge as seen from the neighbouring point
    fn adapt_to_next_point(edge: Self::Edge) -> Self::Edge;

    /// Topological distance between two points
    fn distance(from: Self::Point, to: Self::Point) -> usize;

    /// Minimal edge subset whose repeated application reaches every point
    ///
    /// Walking each point along these edges enumerates every neighbouring
    /// pair exactly once.
    fn coverage_flow_edges() -> Vec<Self::Edge>;

    /// Every point of a field of the given size, in storage order
    fn all_points(size: Self::Size) -> Vec<Self::Point>;

    /// Storage index of a point, `None` when it lies outside the field
    fn point_index(size: Self::Size, point: Self::Point) -> Option<usize>;

    /// Whether a point lies inside a field of the given size
    fn contains(size: Self::Size, point: Self::Point) -> bool {
        Self::point_index(size, point).is_some()
    }

    /// Number of edges in the topology
    fn edge_count() -> usize {
        Self::all_edges().len()
    }

    /// Edge leading from `from` to the adjacent point `to`
    fn edge_between(from: Self::Point, to: Self::Point) -> Option<Self::Edge> {
        Self::all_edges()
            .iter()
            .copied()
            .find(|&edge| Self::next_point(from, edge) == to)
    }
}
