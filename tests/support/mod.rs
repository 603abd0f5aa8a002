//! Test support library
//! Provides various helper functions & utilities for tests.

use subspline::PointN;
use subspline::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Componentwise [`approx_eq`] over points.
#[allow(dead_code)]
pub fn approx_point_eq<const D: usize>(a: &PointN<D>, b: &PointN<D>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Whether `p` lies inside (or on) the convex polygon `hull`, given in
/// counter-clockwise order.
#[allow(dead_code)]
pub fn inside_convex_hull(p: &PointN<2>, hull: &[PointN<2>], eps: Real) -> bool {
    let n = hull.len();
    (0..n).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        let cross = (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0]);
        cross >= -eps
    })
}
