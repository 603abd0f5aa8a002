//! Bezier-spline interpolation through data points with C1 or C2 continuity.
//!
//! Both solvers return the flat Bezier control-point array of the whole
//! spline; consecutive segments share their junction points, so segment `s`
//! of a degree-`d` spline is the slice `[s*d ..= s*d + d]`.

use crate::PointN;
use crate::errors::SplineError;
use crate::float_types::Real;
use log::debug;
use nalgebra::DMatrix;

/// Control points of a C1 quadratic Bezier spline interpolating `data`.
///
/// The result has `2n + 1` points for `n + 1` data points, the data at even
/// indices. The first inner point is the midpoint of its neighbouring data
/// points; every following inner point is forced by the tangent-continuity
/// reflection `b_{i+2} = 2·b_{i+1} - b_i`. A direct recurrence, no solve.
pub fn interpolate_c1<const D: usize>(
    data: &[PointN<D>],
) -> Result<Vec<PointN<D>>, SplineError> {
    let n = segment_count(data)?;

    let mut bezier = vec![PointN::<D>::zeros(); 2 * n + 1];
    for (i, p) in data.iter().enumerate() {
        bezier[2 * i] = *p;
    }

    bezier[1] = (bezier[0] + bezier[2]) * 0.5;
    for i in (1..2 * n - 1).step_by(2) {
        bezier[i + 2] = bezier[i + 1] * 2.0 - bezier[i];
    }

    Ok(bezier)
}

/// Control points of a C2 cubic Bezier spline interpolating `data`, with
/// natural boundaries (zero second derivative at both curve ends).
///
/// Assembles one labeled equation per row of a `(3n+1)²` system: `n+1`
/// positional rows, `n-1` first-derivative rows (`[1, -2, 1]` across each
/// junction), `n-1` second-derivative rows (`[1, -2, 0, 2, -1]` over five
/// consecutive points) and 2 natural-boundary rows, then solves it once by
/// LU. Fails with [`SplineError::SingularSystem`] when the factorization has
/// no unique solution; the system is never regularized, since perturbing it
/// would silently change the interpolant.
pub fn interpolate_c2<const D: usize>(
    data: &[PointN<D>],
) -> Result<Vec<PointN<D>>, SplineError> {
    let n = segment_count(data)?;
    let size = 3 * n + 1;
    debug!("assembling {}x{} C2 continuity system", size, size);

    let mut m = DMatrix::<Real>::zeros(size, size);

    // C0: data points pinned at every third column
    for i in 0..=n {
        m[(i, 3 * i)] = 1.0;
    }

    // C1: first-derivative continuity across each interior junction
    for s in 1..n {
        let row = n + s;
        let col = 3 * s - 1;
        m[(row, col)] = 1.0;
        m[(row, col + 1)] = -2.0;
        m[(row, col + 2)] = 1.0;
    }

    // C2: second-derivative continuity, five consecutive points per junction
    for s in 1..n {
        let row = 2 * n + s - 1;
        let col = 3 * s - 2;
        m[(row, col)] = 1.0;
        m[(row, col + 1)] = -2.0;
        m[(row, col + 3)] = 2.0;
        m[(row, col + 4)] = -1.0;
    }

    // natural boundary: zero second derivative at both curve ends
    for (row, col) in [(3 * n - 1, 0), (3 * n, 3 * n - 2)] {
        m[(row, col)] = 1.0;
        m[(row, col + 1)] = -2.0;
        m[(row, col + 2)] = 1.0;
    }

    // right-hand side: the data points in the first n+1 rows, zero elsewhere
    let mut rhs = DMatrix::<Real>::zeros(size, D);
    for (i, p) in data.iter().enumerate() {
        for c in 0..D {
            rhs[(i, c)] = p[c];
        }
    }

    let solution = m.lu().solve(&rhs).ok_or(SplineError::SingularSystem { size })?;

    Ok((0..size)
        .map(|i| PointN::<D>::from_fn(|c, _| solution[(i, c)]))
        .collect())
}

fn segment_count<const D: usize>(data: &[PointN<D>]) -> Result<usize, SplineError> {
    if data.len() < 2 {
        return Err(SplineError::InsufficientPoints { needed: 2, got: data.len() });
    }
    Ok(data.len() - 1)
}
