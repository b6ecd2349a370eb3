//! Randomised checks of the evaluation properties over many curves.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use polycurve_rs::{ContourCollection, PathStream, Point, PolyCurve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

const TRIALS: usize = 200;

fn random_point(rng: &mut StdRng, dist: &Normal<f64>) -> Point {
    Point::new(rng.sample(dist), rng.sample(dist))
}

/// Reference evaluation in Bernstein form.
fn de_casteljau(points: &[Point], t: f64) -> Point {
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
        }
    }
    work[0]
}

fn assert_close(a: Point, b: Point) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-8);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-8);
}

#[test]
fn test_segments_interpolate_their_end_points() {
    let mut rng = StdRng::seed_from_u64(7);
    let dist = Normal::new(0.0, 50.0).unwrap();

    for _ in 0..TRIALS {
        let pts: Vec<Point> = (0..4).map(|_| random_point(&mut rng, &dist)).collect();

        let mut path = PathStream::new();
        match rng.gen_range(1..=3) {
            1 => path.move_to(pts[0]).line_to(pts[3]),
            2 => path.move_to(pts[0]).quad_to(pts[1], pts[3]),
            _ => path.move_to(pts[0]).cubic_to(pts[1], pts[2], pts[3]),
        };

        let contours = ContourCollection::try_from(&path).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 1);

        let curve = &contours[0][0];
        assert_close(curve.at(0.0), pts[0]);
        assert_close(curve.at(1.0), pts[3]);
    }
}

#[test]
fn test_monomial_form_matches_bernstein_form() {
    let mut rng = StdRng::seed_from_u64(11);
    let dist = Normal::new(0.0, 10.0).unwrap();

    for _ in 0..TRIALS {
        let n = rng.gen_range(2..=7);
        let pts: Vec<Point> = (0..n).map(|_| random_point(&mut rng, &dist)).collect();
        let curve = PolyCurve::from_control_points(&pts).unwrap();
        assert_eq!(curve.degree(), n - 1);

        for _ in 0..5 {
            let t: f64 = rng.gen_range(0.0..=1.0);
            assert_close(curve.at(t), de_casteljau(&pts, t));
        }
    }
}

#[test]
fn test_tangent_and_normal_are_orthonormal() {
    let mut rng = StdRng::seed_from_u64(23);
    let dist = Normal::new(0.0, 50.0).unwrap();

    for _ in 0..TRIALS {
        let curve = PolyCurve::cubic(
            random_point(&mut rng, &dist),
            random_point(&mut rng, &dist),
            random_point(&mut rng, &dist),
            random_point(&mut rng, &dist),
        );
        let t: f64 = rng.gen_range(0.0..=1.0);
        if curve.derivative_at(t).magnitude() < 1e-6 {
            continue;
        }

        let tangent = curve.tangent(t);
        let normal = curve.normal(t);
        assert_relative_eq!(tangent.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tangent.dot(&normal), 0.0, epsilon = 1e-12);

        // normal points to the left of the direction of travel
        let cross = tangent.x * normal.y - tangent.y * normal.x;
        assert_relative_eq!(cross, 1.0, epsilon = 1e-12);
    }
}
