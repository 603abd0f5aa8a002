mod support;

use subspline::float_types::{EPSILON, Real};
use subspline::{ControlNet, ControlPolygon, PointN, Scheme};

fn unit_square() -> ControlPolygon<2> {
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

fn hepta() -> ControlPolygon<2> {
    use subspline::float_types::TAU;
    let points = (0..7)
        .map(|k| {
            let angle = TAU * k as Real / 7.0;
            PointN::<2>::new(angle.cos(), angle.sin())
        })
        .collect();
    ControlPolygon::new(points, true)
}

#[test]
fn every_scheme_doubles_the_point_count() {
    let polygon = hepta();
    let schemes = [
        Scheme::Chaikin,
        Scheme::CornerCutting { a: 0.1, b: 0.6 },
        Scheme::LaneRiesenfeld { degree: 3 },
        Scheme::FourPoint { degree: 2 },
        Scheme::SixPoint { degree: 2 },
    ];
    for scheme in schemes {
        assert_eq!(polygon.subdivide(scheme).len(), 14, "{scheme:?}");
    }
}

#[test]
fn iteration_multiplies_by_powers_of_two() {
    let polygon = hepta();
    for depth in 0..5 {
        let refined = polygon.subdivide_iter(Scheme::Chaikin, depth);
        assert_eq!(refined.len(), 7 << depth);
    }
    // depth 0 is a plain copy and the input is never mutated
    assert_eq!(polygon.subdivide_iter(Scheme::Chaikin, 0), polygon);
    assert_eq!(polygon.len(), 7);
}

#[test]
fn chaikin_contracts_into_the_hull() {
    let square = unit_square();
    let hull: Vec<PointN<2>> = square.points().to_vec();
    let center = PointN::<2>::new(0.5, 0.5);

    let mut previous_spread = (2.0 as Real).sqrt() / 2.0;
    let mut current = square;
    for _ in 0..5 {
        current = current.subdivide(Scheme::Chaikin);
        let spread = current
            .points()
            .iter()
            .map(|p| (p - center).norm())
            .fold(0.0 as Real, Real::max);
        for p in current.points() {
            assert!(support::inside_convex_hull(p, &hull, EPSILON));
        }
        assert!(spread < previous_spread, "corners stopped contracting");
        previous_spread = spread;
    }
}

#[test]
fn lane_riesenfeld_degree_two_is_chaikin() {
    let polygon = hepta();
    let lr = polygon.subdivide(Scheme::LaneRiesenfeld { degree: 2 });
    let chaikin = polygon.subdivide(Scheme::Chaikin);
    assert_eq!(lr.len(), chaikin.len());
    for (a, b) in lr.points().iter().zip(chaikin.points()) {
        assert!(support::approx_point_eq(a, b, 1e-12));
    }
}

#[test]
fn interpolating_schemes_keep_the_input_points() {
    let polygon = hepta();
    for scheme in [Scheme::FourPoint { degree: 0 }, Scheme::SixPoint { degree: 0 }] {
        let refined = polygon.subdivide(scheme);
        for (i, p) in polygon.points().iter().enumerate() {
            assert_eq!(&refined.points()[2 * i], p, "{scheme:?}");
        }
    }
}

// ---------------------------------------------------------------- surfaces

fn flat_net(rows: usize, cols: usize, u_closed: bool, v_closed: bool) -> ControlNet<3> {
    let points = (0..rows * cols)
        .map(|q| {
            let (i, j) = (q / cols, q % cols);
            PointN::<3>::new(i as Real, j as Real, 0.0)
        })
        .collect();
    ControlNet::from_points(points, rows, cols, u_closed, v_closed)
}

#[test]
fn open_open_three_by_three_refines_to_four_by_four() {
    let refined = flat_net(3, 3, false, false).subdivide();
    assert_eq!((refined.rows(), refined.cols()), (4, 4));
}

#[test]
fn closed_closed_three_by_three_refines_to_six_by_six() {
    let refined = flat_net(3, 3, true, true).subdivide();
    assert_eq!((refined.rows(), refined.cols()), (6, 6));
}

#[test]
fn unit_square_masks_match_hand_computed_values() {
    let points = vec![
        PointN::<3>::new(0.0, 0.0, 0.0),
        PointN::<3>::new(0.0, 1.0, 0.0),
        PointN::<3>::new(1.0, 0.0, 0.0),
        PointN::<3>::new(1.0, 1.0, 0.0),
    ];
    let net = ControlNet::from_points(points, 2, 2, false, false);
    let refined = net.subdivide();
    assert_eq!((refined.rows(), refined.cols()), (2, 2));

    let expected = [
        ((0, 0), PointN::<3>::new(0.25, 0.25, 0.0)),
        ((1, 0), PointN::<3>::new(0.75, 0.25, 0.0)),
        ((0, 1), PointN::<3>::new(0.25, 0.75, 0.0)),
        ((1, 1), PointN::<3>::new(0.75, 0.75, 0.0)),
    ];
    for ((i, j), want) in expected {
        assert!(
            support::approx_point_eq(refined.get(i, j), &want, EPSILON),
            "mask at ({i}, {j}): {} != {want}",
            refined.get(i, j)
        );
    }
}

#[test]
fn surface_iteration_threads_extents() {
    let refined = flat_net(4, 4, true, false).subdivide_iter(2);
    // closed u: 4 -> 8 -> 16; open v: 4 -> 6 -> 10
    assert_eq!((refined.rows(), refined.cols()), (16, 10));
}

#[test]
fn periodic_extension_duplicates_the_seam() {
    let net = flat_net(3, 4, true, true);
    let ext = net.periodic_extension();
    assert_eq!((ext.rows(), ext.cols()), (4, 5));
    assert_eq!(ext.get(3, 0), net.get(0, 0));
    assert_eq!(ext.get(0, 4), net.get(0, 0));
    assert_eq!(ext.get(3, 4), net.get(0, 0));
}

#[test]
fn closed_torus_like_net_keeps_uniform_spacing_symmetry() {
    // a ring in the plane, closed in u only: refinement must wrap the seam
    // rather than clamping it
    use subspline::float_types::TAU;
    let rows = 6;
    let points: Vec<PointN<3>> = (0..rows)
        .flat_map(|i| {
            let angle = TAU * i as Real / rows as Real;
            [
                PointN::<3>::new(angle.cos(), angle.sin(), 0.0),
                PointN::<3>::new(angle.cos(), angle.sin(), 1.0),
            ]
        })
        .collect();
    let net = ControlNet::from_points(points, rows, 2, true, false);
    let refined = net.subdivide();
    assert_eq!((refined.rows(), refined.cols()), (12, 2));

    // every refined ring point keeps the same distance from the axis
    let radius = refined.get(0, 0).fixed_rows::<2>(0).norm();
    for i in 0..refined.rows() {
        for j in 0..refined.cols() {
            let r = refined.get(i, j).fixed_rows::<2>(0).norm();
            assert!(support::approx_eq(r, radius, EPSILON));
        }
    }
}
