//! B-spline (`.bspline`) and NURBS (`.nurbs`) surface readers.

use super::{IoError, Tokens};
use crate::knots::KnotVector;
use crate::net::ControlNet;
use std::path::Path;

/// Shared layout: `m n k l`, then `D·m·n` floats as the flattened net, then
/// `k` u-knots and `l` v-knots.
fn read_surface<const D: usize>(
    text: &str,
) -> Result<(ControlNet<D>, KnotVector, KnotVector), IoError> {
    let mut tokens = Tokens::new(text);
    let m = tokens.next_int()?;
    let n = tokens.next_int()?;
    let k = tokens.next_int()?;
    let l = tokens.next_int()?;
    if m == 0 || n == 0 {
        return Err(IoError::MalformedInput("surface net has a zero extent".into()));
    }

    let points = tokens.points::<D>(m * n)?;
    let knots_u = KnotVector::new(tokens.reals(k)?);
    let knots_v = KnotVector::new(tokens.reals(l)?);
    Ok((ControlNet::from_points(points, m, n, false, false), knots_u, knots_v))
}

/// Read a B-spline surface: three coordinates per control point.
pub fn read_bspline_surface(
    text: &str,
) -> Result<(ControlNet<3>, KnotVector, KnotVector), IoError> {
    read_surface::<3>(text)
}

/// Read a NURBS surface: four coordinates per control point, the fourth
/// being the weight. The net is returned as stored in the file; multiply the
/// weights through with [`ControlNet::premultiplied`] before rational
/// evaluation.
pub fn read_nurbs_surface(
    text: &str,
) -> Result<(ControlNet<4>, KnotVector, KnotVector), IoError> {
    read_surface::<4>(text)
}

/// [`read_bspline_surface`] over a file.
pub fn load_bspline_surface(
    path: impl AsRef<Path>,
) -> Result<(ControlNet<3>, KnotVector, KnotVector), IoError> {
    read_bspline_surface(&std::fs::read_to_string(path)?)
}

/// [`read_nurbs_surface`] over a file.
pub fn load_nurbs_surface(
    path: impl AsRef<Path>,
) -> Result<(ControlNet<4>, KnotVector, KnotVector), IoError> {
    read_nurbs_surface(&std::fs::read_to_string(path)?)
}
