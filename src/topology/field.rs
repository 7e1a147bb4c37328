//! Dense storage of determined elements over a topology-bounded field

use crate::element::Element;
use crate::topology::Topology;

/// Mapping from every point of a field to an optional determined element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<T: Topology> {
    size: T::Size,
    points: Vec<T::Point>,
    elements: Vec<Option<Element<T>>>,
}

impl<T: Topology> Field<T> {
    /// Create a field where every point is undetermined
    pub fn new(size: T::Size) -> Self {
        let points = T::all_points(size);
        let elements = vec![None; points.len()];
        Self {
            size,
            points,
            elements,
        }
    }

    /// Shape of the field
    pub const fn size(&self) -> T::Size {
        self.size
    }

    /// Every point in storage order
    pub fn points(&self) -> &[T::Point] {
        &self.points
    }

    /// Number of points in the field
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the field has no points at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether a point lies inside the field
    pub fn contains(&self, point: T::Point) -> bool {
        T::contains(self.size, point)
    }

    /// Storage index of a point inside the field
    pub fn index_of(&self, point: T::Point) -> Option<usize> {
        T::point_index(self.size, point)
    }

    /// Element determined at a point, `None` when undetermined or outside
    pub fn get(&self, point: T::Point) -> Option<&Element<T>> {
        self.index_of(point)
            .and_then(|index| self.elements.get(index))
            .and_then(Option::as_ref)
    }

    /// Replace the element at a point, returning the previous one
    ///
    /// Points outside the field are ignored.
    pub fn set(&mut self, point: T::Point, element: Option<Element<T>>) -> Option<Element<T>> {
        let index = self.index_of(point)?;
        let slot = self.elements.get_mut(index)?;
        std::mem::replace(slot, element)
    }

    /// Whether an element has been determined at a point
    pub fn is_determined(&self, point: T::Point) -> bool {
        self.get(point).is_some()
    }

    /// Points without a determined element
    pub fn undetermined_points(&self) -> Vec<T::Point> {
        self.points
            .iter()
            .zip(&self.elements)
            .filter(|(_, element)| element.is_none())
            .map(|(&point, _)| point)
            .collect()
    }

    /// Number of determined points
    pub fn determined_count(&self) -> usize {
        self.elements.iter().filter(|element| element.is_some()).count()
    }

    /// Whether every point holds an element
    pub fn is_complete(&self) -> bool {
        self.elements.iter().all(Option::is_some)
    }

    /// Determined elements with their points
    pub fn elements(&self) -> impl Iterator<Item = (T::Point, &Element<T>)> + '_ {
        self.points
            .iter()
            .zip(&self.elements)
            .filter_map(|(&point, element)| element.as_ref().map(|element| (point, element)))
    }
}
