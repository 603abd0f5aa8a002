//! Tensor-product control nets for surface evaluation and refinement.

use crate::PointN;

/// A dense row-major `(rows, cols)` grid of control points.
///
/// Rows run along the `u` parametric direction, columns along `v`. Each
/// direction carries its own closed flag: a closed direction is indexed
/// modulo its extent, an open one is clamped (the refinement loops shorten
/// their range instead of wrapping).
#[derive(Debug, Clone, PartialEq)]
pub struct ControlNet<const D: usize> {
    points: Vec<PointN<D>>,
    rows: usize,
    cols: usize,
    u_closed: bool,
    v_closed: bool,
}

impl<const D: usize> ControlNet<D> {
    /// Build a net from a flat row-major point list.
    ///
    /// # Panics
    /// Panics if `points.len() != rows * cols` or either extent is zero.
    pub fn from_points(
        points: Vec<PointN<D>>,
        rows: usize,
        cols: usize,
        u_closed: bool,
        v_closed: bool,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "a control net needs at least one point per direction");
        assert_eq!(points.len(), rows * cols, "flat point list does not match net extents");
        ControlNet { points, rows, cols, u_closed, v_closed }
    }

    /// Extent in the `u` direction.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Extent in the `v` direction.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn u_closed(&self) -> bool {
        self.u_closed
    }

    pub const fn v_closed(&self) -> bool {
        self.v_closed
    }

    /// Point at grid position `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> &PointN<D> {
        &self.points[i * self.cols + j]
    }

    /// The points of column `j`, in row order (the order the `u`-direction de
    /// Boor recurrence consumes them).
    pub fn column(&self, j: usize) -> impl Iterator<Item = &PointN<D>> {
        (0..self.rows).map(move |i| self.get(i, j))
    }

    /// The flat row-major point list.
    pub fn points(&self) -> &[PointN<D>] {
        &self.points
    }

    /// Copy of the net with the seam duplicated: row 0 appended after the
    /// last row when closed in `u`, column 0 appended when closed in `v`.
    ///
    /// Refinement always returns the minimal non-redundant net; rendering a
    /// periodic surface wants the seam drawn, which is what this produces.
    /// The duplicated directions are marked open in the result.
    pub fn periodic_extension(&self) -> Self {
        let out_rows = if self.u_closed { self.rows + 1 } else { self.rows };
        let out_cols = if self.v_closed { self.cols + 1 } else { self.cols };
        let mut points = Vec::with_capacity(out_rows * out_cols);
        for i in 0..out_rows {
            for j in 0..out_cols {
                points.push(*self.get(i % self.rows, j % self.cols));
            }
        }
        ControlNet {
            points,
            rows: out_rows,
            cols: out_cols,
            u_closed: false,
            v_closed: false,
        }
    }
}

impl ControlNet<4> {
    /// Homogeneous net with `(x, y, z)` multiplied through by the weight
    /// channel, ready for rational (NURBS) evaluation.
    pub fn premultiplied(&self) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| PointN::<4>::new(p[0] * p[3], p[1] * p[3], p[2] * p[3], p[3]))
            .collect();
        ControlNet {
            points,
            rows: self.rows,
            cols: self.cols,
            u_closed: self.u_closed,
            v_closed: self.v_closed,
        }
    }
}
