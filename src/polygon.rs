//! Ordered control polygons from which curves are defined by affine
//! combination, not interpolation.

use crate::PointN;

/// An ordered sequence of control points, optionally closed.
///
/// When `closed` is set, index arithmetic wraps modulo the point count; the
/// subdivision stencils in [`crate::subdivision`] rely on this. A polygon is a
/// value type: refinement returns a fresh polygon and never edits ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon<const D: usize> {
    points: Vec<PointN<D>>,
    closed: bool,
}

impl<const D: usize> ControlPolygon<D> {
    /// Build a polygon from its vertices.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    pub fn new(points: Vec<PointN<D>>, closed: bool) -> Self {
        assert!(!points.is_empty(), "a control polygon needs at least one point");
        ControlPolygon { points, closed }
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// The vertices in order.
    pub fn points(&self) -> &[PointN<D>] {
        &self.points
    }

    /// Vertex at a possibly negative or out-of-range index, wrapped modulo the
    /// point count.
    pub fn wrap(&self, index: isize) -> &PointN<D> {
        let n = self.points.len() as isize;
        &self.points[index.rem_euclid(n) as usize]
    }
}
