//! Bezier curve evaluation via the de Casteljau algorithm.
//!
//! Both a bottom-up iterative form and a top-down recursive form are provided;
//! they evaluate the identical expression tree (`b·(1-t) + b'·t` at every
//! node) and therefore agree bit-for-bit, which the tests rely on as a
//! cross-check.

use crate::PointN;
use crate::float_types::Real;
use smallvec::SmallVec;

/// Evaluate the point `b_0^degree` on the Bezier curve defined by `points`
/// at parameter `t`, using the bottom-up triangle with a scratch buffer.
///
/// `t` outside `[0, 1]` is accepted (extrapolation) but not clamped. The
/// degree is implicit: `points.len() - 1`.
///
/// # Panics
/// Panics if `points` is empty.
pub fn de_casteljau<const D: usize>(points: &[PointN<D>], t: Real) -> PointN<D> {
    assert!(!points.is_empty(), "de Casteljau needs at least one control point");
    let mut tri: SmallVec<[PointN<D>; 8]> = SmallVec::from_slice(points);
    let n = tri.len();
    for k in 1..n {
        for i in 0..(n - k) {
            tri[i] = tri[i] * (1.0 - t) + tri[i + 1] * t;
        }
    }
    tri[0]
}

/// Evaluate the intermediate point `b_i^k` of the de Casteljau triangle by
/// direct recursion. `de_casteljau_recursive(points, degree, 0, t)` is the
/// curve point itself.
///
/// # Panics
/// Panics if `i + k >= points.len()`.
pub fn de_casteljau_recursive<const D: usize>(
    points: &[PointN<D>],
    k: usize,
    i: usize,
    t: Real,
) -> PointN<D> {
    if k == 0 {
        points[i]
    } else {
        de_casteljau_recursive(points, k - 1, i, t) * (1.0 - t)
            + de_casteljau_recursive(points, k - 1, i + 1, t) * t
    }
}

/// `samples` uniformly spaced curve points for `t` in `[0, 1]`.
///
/// A single sample lands on `t = 0`.
#[cfg(not(feature = "parallel"))]
pub fn sample<const D: usize>(points: &[PointN<D>], samples: usize) -> Vec<PointN<D>> {
    (0..samples)
        .map(|s| de_casteljau(points, parameter(s, samples)))
        .collect()
}

/// `samples` uniformly spaced curve points for `t` in `[0, 1]`, distributed
/// across threads.
///
/// A single sample lands on `t = 0`.
#[cfg(feature = "parallel")]
pub fn sample<const D: usize>(points: &[PointN<D>], samples: usize) -> Vec<PointN<D>> {
    use rayon::prelude::*;
    (0..samples)
        .into_par_iter()
        .map(|s| de_casteljau(points, parameter(s, samples)))
        .collect()
}

fn parameter(s: usize, samples: usize) -> Real {
    if samples <= 1 {
        0.0
    } else {
        s as Real / (samples - 1) as Real
    }
}

/// The shrinking intermediate polygons `b^1 .. b^degree` of the de Casteljau
/// triangle at parameter `t`; the last one is the single curve point.
pub fn intermediate_polygons<const D: usize>(
    points: &[PointN<D>],
    t: Real,
) -> Vec<Vec<PointN<D>>> {
    let mut rows = Vec::new();
    let mut current = points.to_vec();
    while current.len() > 1 {
        let next: Vec<PointN<D>> = (0..current.len() - 1)
            .map(|i| current[i] * (1.0 - t) + current[i + 1] * t)
            .collect();
        rows.push(next.clone());
        current = next;
    }
    rows
}
