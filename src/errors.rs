//! Structural validation errors

use std::fmt::Display;

/// All the ways a kernel operation can reject its input.
///
/// Evaluators and refinement engines are total over well-formed inputs and
/// fail only on structural inconsistency; nothing here is retried, the only
/// recovery is fixing the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplineError {
    /// (InsufficientPoints) Fewer data points than the operation requires
    InsufficientPoints { needed: usize, got: usize },
    /// (DegreeMismatch) Knot count and control-point count are inconsistent
    DegreeMismatch { knots: usize, control_points: usize },
    /// (SingularSystem) The continuity system has no unique solution
    SingularSystem { size: usize },
    /// (InvalidScheme) Unrecognized subdivision-scheme identifier
    InvalidScheme(String),
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::InsufficientPoints { needed, got } => write!(
                f,
                "(InsufficientPoints) Operation requires at least {} points, got {}",
                needed, got
            ),
            SplineError::DegreeMismatch { knots, control_points } => write!(
                f,
                "(DegreeMismatch) {} knots cannot define a spline over {} control points",
                knots, control_points
            ),
            SplineError::SingularSystem { size } => write!(
                f,
                "(SingularSystem) The {}x{} continuity system has no unique solution",
                size, size
            ),
            SplineError::InvalidScheme(id) => {
                write!(f, "(InvalidScheme) Unrecognized subdivision scheme '{}'", id)
            },
        }
    }
}
