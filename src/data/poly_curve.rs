//! Polynomial curve: a Bezier curve stored in power (monomial) basis.

use crate::data::point::Point;
use crate::error::{ContourError, ContourResult, GeometryFault};
use crate::modules::basis::monomial_coefficients;
use std::ops::Index;

/// A curve B(t) = c0 + c1*t + ... + cn*t^n of degree n >= 1.
///
/// The coefficients are fixed at construction. Storage is a boxed slice so
/// the degree cannot change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyCurve {
    coefficients: Box<[Point]>,
}

impl PolyCurve {
    /// A curve of the given degree with all coefficients at the origin.
    ///
    /// Degree 0 never comes out of the contour scan and is bumped to 1.
    pub fn new(degree: usize) -> Self {
        debug_assert!(degree >= 1, "a curve needs degree >= 1");
        Self {
            coefficients: vec![Point::default(); degree.max(1) + 1].into_boxed_slice(),
        }
    }

    /// Build from monomial coefficients c0..cn.
    pub fn from_coefficients(coefficients: Vec<Point>) -> ContourResult<Self> {
        if coefficients.len() < 2 {
            return Err(ContourError::curve(GeometryFault::TooFewCoefficients));
        }
        Ok(Self {
            coefficients: coefficients.into_boxed_slice(),
        })
    }

    /// Build from Bezier control points of any degree.
    pub fn from_control_points(control_points: &[Point]) -> ContourResult<Self> {
        Self::from_coefficients(monomial_coefficients(control_points))
    }

    /// Straight line from `p0` to `p1`.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self {
            coefficients: Box::new([p0, p1 - p0]),
        }
    }

    /// Quadratic Bezier with control points `p0`, `p1`, `p2`.
    pub fn quadratic(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            coefficients: Box::new([p0, (p1 - p0) * 2.0, p0 - p1 * 2.0 + p2]),
        }
    }

    /// Cubic Bezier with control points `p0`..`p3`.
    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            coefficients: Box::new([
                p0,
                (p1 - p0) * 3.0,
                p0 * 3.0 - p1 * 6.0 + p2 * 3.0,
                -p0 + p1 * 3.0 - p2 * 3.0 + p3,
            ]),
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[Point] {
        &self.coefficients
    }

    /// B(0)
    pub fn start(&self) -> Point {
        self.coefficients[0]
    }

    /// B(1), the sum of all coefficients.
    pub fn end(&self) -> Point {
        self.coefficients
            .iter()
            .fold(Point::default(), |acc, &c| acc + c)
    }

    /// Evaluate B(t).
    ///
    /// `t` is normally in [0, 1]; values outside extrapolate the polynomial.
    pub fn at(&self, t: f64) -> Point {
        let mut b = self.coefficients[0];
        let mut tj = t;
        for &c in &self.coefficients[1..] {
            b += c * tj;
            tj *= t;
        }
        b
    }

    /// Evaluate B'(t) without normalizing.
    pub fn derivative_at(&self, t: f64) -> Point {
        let mut d = self.coefficients[1];
        let mut tj = t;
        for (j, &c) in self.coefficients.iter().enumerate().skip(2) {
            d += c * (j as f64 * tj);
            tj *= t;
        }
        d
    }

    /// Unit tangent at `t`. NaN if B'(t) is the zero vector.
    pub fn tangent(&self, t: f64) -> Point {
        self.derivative_at(t).normalize()
    }

    /// Unit normal at `t`: the tangent rotated by +90 degrees, so it points
    /// to the left of the direction of travel.
    pub fn normal(&self, t: f64) -> Point {
        self.tangent(t).perpendicular()
    }

    /// Evaluate the curve at `num_points` evenly spaced parameters in [0, 1].
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => (0..num_points)
                .map(|i| self.at(i as f64 / (num_points - 1) as f64))
                .collect(),
        }
    }
}

impl Index<usize> for PolyCurve {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.coefficients[index]
    }
}
