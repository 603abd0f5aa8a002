//! Uniform B-spline subdivision (bicubic corner cutting) of control nets.

use crate::PointN;
use crate::net::ControlNet;
use log::debug;

impl<const D: usize> ControlNet<D> {
    /// One uniform B-spline corner-cutting step.
    ///
    /// Every quad `A B / C D` of the net produces four new points with the
    /// masks `9A+3B+3C+D`, `3A+9B+C+3D`, `3A+B+9C+3D`, `A+3B+3C+9D`, each
    /// scaled by 1/16. A closed direction wraps its last quad around the
    /// seam and doubles its extent; an open direction has one quad fewer
    /// than points and ends up with extent `2·(len-1)`.
    pub fn subdivide(&self) -> Self {
        let (m, n) = (self.rows(), self.cols());
        let quads_u = if self.u_closed() { m } else { m - 1 };
        let quads_v = if self.v_closed() { n } else { n - 1 };
        let out_rows = 2 * quads_u;
        let out_cols = 2 * quads_v;

        let mut out = vec![PointN::<D>::zeros(); out_rows * out_cols];
        for i in 0..quads_u {
            for j in 0..quads_v {
                // the wrap is a no-op for open directions thanks to the
                // shortened quad range
                let a = *self.get(i, j);
                let b = *self.get((i + 1) % m, j);
                let c = *self.get(i, (j + 1) % n);
                let d = *self.get((i + 1) % m, (j + 1) % n);

                out[(2 * i) * out_cols + 2 * j] =
                    (a * 9.0 + b * 3.0 + c * 3.0 + d) / 16.0;
                out[(2 * i + 1) * out_cols + 2 * j] =
                    (a * 3.0 + b * 9.0 + c + d * 3.0) / 16.0;
                out[(2 * i) * out_cols + 2 * j + 1] =
                    (a * 3.0 + b + c * 9.0 + d * 3.0) / 16.0;
                out[(2 * i + 1) * out_cols + 2 * j + 1] =
                    (a + b * 3.0 + c * 3.0 + d * 9.0) / 16.0;
            }
        }

        ControlNet::from_points(out, out_rows, out_cols, self.u_closed(), self.v_closed())
    }

    /// `depth` subdivision steps, threading each output into the next call.
    /// The input net is left untouched; depth 0 returns a clone.
    pub fn subdivide_iter(&self, depth: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..depth {
            current = current.subdivide();
        }
        debug!(
            "subdivided {}x{} -> {}x{} net (depth {})",
            self.rows(),
            self.cols(),
            current.rows(),
            current.cols(),
            depth
        );
        current
    }
}
