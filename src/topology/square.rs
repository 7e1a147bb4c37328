//! Rectangular grid with four edges per cell

use crate::topology::Topology;

/// Direction leaving a square cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SquareEdge {
    /// Towards decreasing `y`
    Top,
    /// Towards decreasing `x`
    Left,
    /// Towards increasing `x`
    Right,
    /// Towards increasing `y`
    Bottom,
}

/// Cell coordinates; points outside the field are representable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquarePoint {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl SquarePoint {
    /// Create a point from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Field dimensions in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareSize {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl SquareSize {
    /// Create a size from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Square grid topology
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareTopology;

const SQUARE_EDGES: [SquareEdge; 4] = [
    SquareEdge::Top,
    SquareEdge::Left,
    SquareEdge::Right,
    SquareEdge::Bottom,
];

impl Topology for SquareTopology {
    type Point = SquarePoint;
    type Edge = SquareEdge;
    type Size = SquareSize;

    fn all_edges() -> &'static [SquareEdge] {
        &SQUARE_EDGES
    }

    fn edge_index(edge: SquareEdge) -> usize {
        match edge {
            SquareEdge::Top => 0,
            SquareEdge::Left => 1,
            SquareEdge::Right => 2,
            SquareEdge::Bottom => 3,
        }
    }

    fn opposite(edge: SquareEdge) -> Option<SquareEdge> {
        Some(match edge {
            SquareEdge::Top => SquareEdge::Bottom,
            SquareEdge::Left => SquareEdge::Right,
            SquareEdge::Right => SquareEdge::Left,
            SquareEdge::Bottom => SquareEdge::Top,
        })
    }

    fn next_point(point: SquarePoint, edge: SquareEdge) -> SquarePoint {
        match edge {
            SquareEdge::Top => SquarePoint::new(point.x, point.y - 1),
            SquareEdge::Left => SquarePoint::new(point.x - 1, point.y),
            SquareEdge::Right => SquarePoint::new(point.x + 1, point.y),
            SquareEdge::Bottom => SquarePoint::new(point.x, point.y + 1),
        }
    }

    fn adapt_to_next_point(edge: SquareEdge) -> SquareEdge {
        Self::opposite(edge).unwrap_or(edge)
    }

    fn distance(from: SquarePoint, to: SquarePoint) -> usize {
        (from.x.abs_diff(to.x) + from.y.abs_diff(to.y)) as usize
    }

    fn coverage_flow_edges() -> Vec<SquareEdge> {
        vec![SquareEdge::Right, SquareEdge::Bottom]
    }

    fn all_points(size: SquareSize) -> Vec<SquarePoint> {
        let mut points = Vec::with_capacity(size.width * size.height);
        for y in 0..size.height {
            for x in 0..size.width {
                points.push(SquarePoint::new(x as i32, y as i32));
            }
        }
        points
    }

    fn point_index(size: SquareSize, point: SquarePoint) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        (x < size.width && y < size.height).then_some(y * size.width + x)
    }
}
