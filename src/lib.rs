//! Evaluation, interpolation and refinement of **piecewise-polynomial curves and
//! surfaces**: Bezier curves via de Casteljau, B-spline/NURBS curves and
//! tensor-product surfaces via de Boor, C1/C2 Bezier-spline interpolation, and
//! the corner-cutting / Lane-Riesenfeld family of subdivision schemes.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to distribute uniform sampling loops
//!
//! All kernel entry points are pure functions over immutable inputs: refinement
//! and interpolation always allocate fresh output, never edit their arguments.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod polygon;
pub mod net;
pub mod bezier;
pub mod knots;
pub mod bspline;
pub mod interpolate;
pub mod subdivision;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

use crate::float_types::Real;

/// A control point with `D` coordinates (2 for planar curves, 3 for surface
/// nets, 4 for homogeneous NURBS data).
pub type PointN<const D: usize> = nalgebra::SVector<Real, D>;

pub use bspline::{BsplineCurve, BsplineSurface, NurbsCurve, NurbsSurface};
pub use knots::KnotVector;
pub use net::ControlNet;
pub use polygon::ControlPolygon;
pub use subdivision::Scheme;
