//! Subdivision of closed polygons: the corner-cutting family and the
//! generalized Lane-Riesenfeld schemes.

use crate::PointN;
use crate::errors::SplineError;
use crate::float_types::Real;
use crate::polygon::ControlPolygon;
use log::debug;
use std::str::FromStr;

/// The 4-point insertion/smoothing stencil, centred between `i` and `i+1`.
const FOUR_POINT: [(isize, Real); 4] = [
    (-1, -1.0 / 16.0),
    (0, 9.0 / 16.0),
    (1, 9.0 / 16.0),
    (2, -1.0 / 16.0),
];

/// The 6-point insertion/smoothing stencil, centred between `i` and `i+1`.
const SIX_POINT: [(isize, Real); 6] = [
    (-2, 3.0 / 256.0),
    (-1, -25.0 / 256.0),
    (0, 150.0 / 256.0),
    (1, 150.0 / 256.0),
    (2, -25.0 / 256.0),
    (3, 3.0 / 256.0),
];

/// The Lane-Riesenfeld averaging stencil.
const MIDPOINT: [(isize, Real); 2] = [(0, 0.5), (1, 0.5)];

/// A subdivision scheme for closed polygons.
///
/// One refinement step always doubles the point count. The corner-cutting
/// schemes finish after the upsampling pass; the Lane-Riesenfeld family runs
/// `degree` additional smoothing passes over the doubled sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scheme {
    /// Chaikin's corner cutting: new points at 1/4 and 3/4 of every edge.
    Chaikin,
    /// Corner cutting with free parameters: new points at `a` and `b` of
    /// every edge. `b = a + 1/2` yields a C1 limit curve, other choices only
    /// C0.
    CornerCutting { a: Real, b: Real },
    /// Lane-Riesenfeld: duplicate every point, then `degree` averaging
    /// passes. The limit curve is the uniform B-spline of that degree.
    LaneRiesenfeld { degree: usize },
    /// Interpolatory 4-point scheme, optionally smoothed `degree` times with
    /// the same stencil.
    FourPoint { degree: usize },
    /// 6-point variant of the Lane-Riesenfeld algorithm.
    SixPoint { degree: usize },
}

impl FromStr for Scheme {
    type Err = SplineError;

    /// Parse the historical two-letter scheme ids with their script-default
    /// parameters: `CH`, `CC` (a=0.1, b=0.5), `LR` (degree 2), `LR2`
    /// (Chaikin, the degree-2 Lane-Riesenfeld fused into the upsample), `FP`
    /// and `SP` (degree 2).
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "CH" | "LR2" => Ok(Scheme::Chaikin),
            "CC" => Ok(Scheme::CornerCutting { a: 0.1, b: 0.5 }),
            "LR" => Ok(Scheme::LaneRiesenfeld { degree: 2 }),
            "FP" => Ok(Scheme::FourPoint { degree: 2 }),
            "SP" => Ok(Scheme::SixPoint { degree: 2 }),
            other => Err(SplineError::InvalidScheme(other.to_string())),
        }
    }
}

impl<const D: usize> ControlPolygon<D> {
    /// One subdivision step: a polygon with exactly twice as many points.
    ///
    /// Indices wrap modulo the current length everywhere; the engine treats
    /// the polygon as closed (open polygons are not subdivided by this
    /// family).
    pub fn subdivide(&self, scheme: Scheme) -> Self {
        let n = self.len();
        let mut out = Vec::with_capacity(2 * n);

        match scheme {
            Scheme::Chaikin => {
                for i in 0..n as isize {
                    out.push(*self.wrap(i) * 0.75 + *self.wrap(i + 1) * 0.25);
                    out.push(*self.wrap(i) * 0.25 + *self.wrap(i + 1) * 0.75);
                }
            },
            Scheme::CornerCutting { a, b } => {
                for i in 0..n as isize {
                    out.push(*self.wrap(i) * (1.0 - a) + *self.wrap(i + 1) * a);
                    out.push(*self.wrap(i) * (1.0 - b) + *self.wrap(i + 1) * b);
                }
            },
            Scheme::LaneRiesenfeld { degree } => {
                for p in self.points() {
                    out.push(*p);
                    out.push(*p);
                }
                for _ in 0..degree {
                    out = smooth_pass(&out, &MIDPOINT);
                }
            },
            Scheme::FourPoint { degree } => {
                for i in 0..n as isize {
                    out.push(*self.wrap(i));
                    out.push(stencil_at(self.points(), i, &FOUR_POINT));
                }
                for _ in 0..degree {
                    out = smooth_pass(&out, &FOUR_POINT);
                }
            },
            Scheme::SixPoint { degree } => {
                for i in 0..n as isize {
                    out.push(*self.wrap(i));
                    out.push(stencil_at(self.points(), i, &SIX_POINT));
                }
                for _ in 0..degree {
                    out = smooth_pass(&out, &SIX_POINT);
                }
            },
        }

        ControlPolygon::new(out, self.is_closed())
    }

    /// `depth` subdivision steps, each consuming the previous output. The
    /// input polygon is left untouched; depth 0 returns a clone.
    pub fn subdivide_iter(&self, scheme: Scheme, depth: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..depth {
            current = current.subdivide(scheme);
        }
        debug!(
            "subdivided {} -> {} points ({:?}, depth {})",
            self.len(),
            current.len(),
            scheme,
            depth
        );
        current
    }
}

/// Apply `stencil` to the wrapped neighbourhood of `center` in `points`.
fn stencil_at<const D: usize>(
    points: &[PointN<D>],
    center: isize,
    stencil: &[(isize, Real)],
) -> PointN<D> {
    let n = points.len() as isize;
    let mut acc = PointN::<D>::zeros();
    for &(offset, weight) in stencil {
        acc += points[(center + offset).rem_euclid(n) as usize] * weight;
    }
    acc
}

/// One smoothing pass: replace every point by the stencil applied at its own
/// index. Reads the previous sequence, writes a fresh one.
fn smooth_pass<const D: usize>(points: &[PointN<D>], stencil: &[(isize, Real)]) -> Vec<PointN<D>> {
    (0..points.len() as isize)
        .map(|i| stencil_at(points, i, stencil))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ControlPolygon<2> {
        ControlPolygon::new(
            vec![
                PointN::<2>::new(0.0, 0.0),
                PointN::<2>::new(1.0, 0.0),
                PointN::<2>::new(1.0, 1.0),
                PointN::<2>::new(0.0, 1.0),
            ],
            true,
        )
    }

    #[test]
    fn scheme_ids_parse() {
        assert_eq!("CH".parse::<Scheme>(), Ok(Scheme::Chaikin));
        assert_eq!("LR2".parse::<Scheme>(), Ok(Scheme::Chaikin));
        assert_eq!("LR".parse::<Scheme>(), Ok(Scheme::LaneRiesenfeld { degree: 2 }));
        assert_eq!(
            "XX".parse::<Scheme>(),
            Err(SplineError::InvalidScheme("XX".to_string()))
        );
    }

    #[test]
    fn chaikin_cuts_the_first_corner() {
        let refined = square().subdivide(Scheme::Chaikin);
        assert_eq!(refined.len(), 8);
        assert_eq!(refined.points()[0], PointN::<2>::new(0.25, 0.0));
        assert_eq!(refined.points()[1], PointN::<2>::new(0.75, 0.0));
    }

    #[test]
    fn four_point_interpolates_the_input() {
        let refined = square().subdivide(Scheme::FourPoint { degree: 0 });
        assert_eq!(refined.len(), 8);
        for (i, p) in square().points().iter().enumerate() {
            assert_eq!(&refined.points()[2 * i], p);
        }
    }
}
