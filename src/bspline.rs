//! B-spline and NURBS evaluation via the de Boor recurrence.
//!
//! Evaluation is span-local: a caller enumerates the non-degenerate knot
//! spans (for surfaces, span pairs) and evaluates with parameters inside the
//! chosen span's interval. The rational (`<4>`) variants carry a weight in
//! the fourth coordinate through the same recurrence and divide it out at the
//! end; they expect the weight already multiplied through the first three
//! coordinates ([`ControlNet::premultiplied`]).

use crate::PointN;
use crate::errors::SplineError;
use crate::float_types::Real;
use crate::knots::KnotVector;
use crate::net::ControlNet;
use smallvec::SmallVec;

/// `d_j^r` of the de Boor recurrence:
/// `d_j^r = (1 - w)·d_{j-1}^{r-1} + w·d_j^{r-1}` with
/// `w = w(j, degree - r + 1, t)`.
fn de_boor<const D: usize>(
    control: &[PointN<D>],
    knots: &KnotVector,
    degree: usize,
    r: usize,
    j: usize,
    t: Real,
) -> PointN<D> {
    if r == 0 {
        control[j]
    } else {
        let w = knots.ratio(j, degree - r + 1, t);
        de_boor(control, knots, degree, r - 1, j - 1, t) * (1.0 - w)
            + de_boor(control, knots, degree, r - 1, j, t) * w
    }
}

/// A B-spline curve: control points plus a knot vector.
#[derive(Debug, Clone, PartialEq)]
pub struct BsplineCurve<const D: usize> {
    control: Vec<PointN<D>>,
    knots: KnotVector,
    degree: usize,
}

/// A B-spline curve with homogeneous (weighted) control points.
pub type NurbsCurve = BsplineCurve<4>;

impl<const D: usize> BsplineCurve<D> {
    /// Build a curve, deriving the degree from
    /// `knots.len() - control.len() - 1`.
    ///
    /// Fails with [`SplineError::DegreeMismatch`] when the counts are
    /// inconsistent.
    pub fn new(control: Vec<PointN<D>>, knots: KnotVector) -> Result<Self, SplineError> {
        let degree = knots.degree_for(control.len())?;
        Ok(BsplineCurve { control, knots, degree })
    }

    pub const fn degree(&self) -> usize {
        self.degree
    }

    pub fn control(&self) -> &[PointN<D>] {
        &self.control
    }

    pub const fn knots(&self) -> &KnotVector {
        &self.knots
    }

    /// Indices of the non-degenerate spans the curve is defined over.
    pub fn spans(&self) -> impl Iterator<Item = usize> + '_ {
        self.knots.spans(self.degree)
    }

    /// Curve point `d_span^degree` for `t` inside span `span`.
    pub fn point_in_span(&self, span: usize, t: Real) -> PointN<D> {
        de_boor(&self.control, &self.knots, self.degree, self.degree, span, t)
    }

    /// `samples` uniformly spaced points over the parameter interval of
    /// `span`, endpoints included.
    pub fn sample_span(&self, span: usize, samples: usize) -> Vec<PointN<D>> {
        let (lo, hi) = self.knots.span_domain(span);
        (0..samples)
            .map(|s| self.point_in_span(span, lerp(lo, hi, s, samples)))
            .collect()
    }
}

impl NurbsCurve {
    /// Rational curve point: homogeneous evaluation divided by the weight.
    pub fn rational_point_in_span(&self, span: usize, t: Real) -> PointN<3> {
        let p = self.point_in_span(span, t);
        PointN::<3>::new(p[0], p[1], p[2]) / p[3]
    }
}

/// A tensor-product B-spline surface: control net plus independent `u`/`v`
/// knot vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct BsplineSurface<const D: usize> {
    net: ControlNet<D>,
    knots_u: KnotVector,
    knots_v: KnotVector,
    degree_u: usize,
    degree_v: usize,
}

/// A B-spline surface with homogeneous (weighted) control points.
pub type NurbsSurface = BsplineSurface<4>;

impl<const D: usize> BsplineSurface<D> {
    /// Build a surface, deriving each direction's degree from its knot and
    /// extent counts.
    pub fn new(
        net: ControlNet<D>,
        knots_u: KnotVector,
        knots_v: KnotVector,
    ) -> Result<Self, SplineError> {
        let degree_u = knots_u.degree_for(net.rows())?;
        let degree_v = knots_v.degree_for(net.cols())?;
        Ok(BsplineSurface { net, knots_u, knots_v, degree_u, degree_v })
    }

    pub const fn degree_u(&self) -> usize {
        self.degree_u
    }

    pub const fn degree_v(&self) -> usize {
        self.degree_v
    }

    pub const fn net(&self) -> &ControlNet<D> {
        &self.net
    }

    /// Non-degenerate `(span_u, span_v)` pairs enumerating the surface
    /// patches.
    pub fn patches(&self) -> Vec<(usize, usize)> {
        let spans_v: Vec<usize> = self.knots_v.spans(self.degree_v).collect();
        self.knots_u
            .spans(self.degree_u)
            .flat_map(|su| spans_v.iter().map(move |&sv| (su, sv)))
            .collect()
    }

    /// The parameter rectangle `[u_i, u_{i+1}] × [v_j, v_{j+1}]` of a patch.
    pub fn patch_domain(&self, patch: (usize, usize)) -> ((Real, Real), (Real, Real)) {
        (self.knots_u.span_domain(patch.0), self.knots_v.span_domain(patch.1))
    }

    /// Surface point for `(u, v)` inside the patch `(span_u, span_v)`: the
    /// curve recurrence along `u` once per net column, then once more along
    /// `v` over the intermediate points.
    pub fn point_in_span(&self, span_u: usize, span_v: usize, u: Real, v: Real) -> PointN<D> {
        let mut intermediate: SmallVec<[PointN<D>; 8]> = SmallVec::new();
        let mut column: SmallVec<[PointN<D>; 8]> = SmallVec::new();
        for j in 0..self.net.cols() {
            column.clear();
            column.extend(self.net.column(j).copied());
            intermediate.push(de_boor(&column, &self.knots_u, self.degree_u, self.degree_u, span_u, u));
        }
        de_boor(&intermediate, &self.knots_v, self.degree_v, self.degree_v, span_v, v)
    }

    /// A `samples × samples` grid over one patch, `u` varying along the outer
    /// index, patch corners included.
    pub fn sample_patch(&self, patch: (usize, usize), samples: usize) -> Vec<Vec<PointN<D>>> {
        let ((u_lo, u_hi), (v_lo, v_hi)) = self.patch_domain(patch);
        (0..samples)
            .map(|si| {
                let u = lerp(u_lo, u_hi, si, samples);
                (0..samples)
                    .map(|sj| {
                        let v = lerp(v_lo, v_hi, sj, samples);
                        self.point_in_span(patch.0, patch.1, u, v)
                    })
                    .collect()
            })
            .collect()
    }
}

impl NurbsSurface {
    /// Rational surface point: homogeneous evaluation divided by the weight.
    pub fn rational_point_in_span(
        &self,
        span_u: usize,
        span_v: usize,
        u: Real,
        v: Real,
    ) -> PointN<3> {
        let p = self.point_in_span(span_u, span_v, u, v);
        PointN::<3>::new(p[0], p[1], p[2]) / p[3]
    }

    /// A `samples × samples` grid of rational points over one patch.
    pub fn sample_patch_rational(
        &self,
        patch: (usize, usize),
        samples: usize,
    ) -> Vec<Vec<PointN<3>>> {
        let ((u_lo, u_hi), (v_lo, v_hi)) = self.patch_domain(patch);
        (0..samples)
            .map(|si| {
                let u = lerp(u_lo, u_hi, si, samples);
                (0..samples)
                    .map(|sj| {
                        let v = lerp(v_lo, v_hi, sj, samples);
                        self.rational_point_in_span(patch.0, patch.1, u, v)
                    })
                    .collect()
            })
            .collect()
    }
}

fn lerp(lo: Real, hi: Real, s: usize, samples: usize) -> Real {
    if samples <= 1 {
        lo
    } else {
        lo + (hi - lo) * (s as Real / (samples - 1) as Real)
    }
}
