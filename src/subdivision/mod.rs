//! Corner-cutting and Lane-Riesenfeld subdivision for closed polygons and
//! tensor-product control nets.
//!
//! Every scheme shares one shape: an upsampling pass doubling the point
//! count, optionally followed by repeated smoothing passes convolving the
//! sequence with a fixed symmetric stencil. The curve engine keeps one
//! canonical, table-driven implementation selected by [`Scheme`]; the surface
//! engine keeps the single uniform B-spline corner-cutting step.

mod curve;
mod surface;

pub use curve::Scheme;
