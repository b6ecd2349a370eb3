//! Bernstein to monomial basis conversion for curves of any degree.
//!
//! A Bezier curve of degree n with control points P0..Pn can be rewritten as
//! B(t) = sum_j c_j t^j with
//!
//! ```text
//! c_j = sum_{i<=j} (-1)^(j-i) * C(n, j) * C(j, i) * P_i
//! ```
//!
//! which is the lower-triangular matrix used below. For n = 3 it is the
//! familiar
//!
//! ```text
//!  1  0  0  0
//! -3  3  0  0
//!  3 -6  3  0
//! -1  3 -3  1
//! ```

use crate::data::Point;
use nalgebra::DMatrix;

fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// The (n+1) x (n+1) matrix mapping Bernstein control points to monomial
/// coefficients for a curve of degree `n`.
pub fn bernstein_to_monomial_matrix(degree: usize) -> DMatrix<f64> {
    let size = degree + 1;
    DMatrix::from_fn(size, size, |j, i| {
        if i > j {
            return 0.0;
        }
        let sign = if (j - i) % 2 == 0 { 1.0 } else { -1.0 };
        sign * binomial(degree, j) * binomial(j, i)
    })
}

/// Monomial coefficients c_0..c_n of the Bezier curve with the given control
/// points. Returns an empty vector for empty input.
pub fn monomial_coefficients(control_points: &[Point]) -> Vec<Point> {
    if control_points.is_empty() {
        return Vec::new();
    }
    let degree = control_points.len() - 1;
    let m = bernstein_to_monomial_matrix(degree);

    // one row per control point, columns are x and y
    let p = DMatrix::from_fn(control_points.len(), 2, |row, col| match col {
        0 => control_points[row].x,
        _ => control_points[row].y,
    });
    let c = m * p;

    (0..c.nrows())
        .map(|row| Point::new(c[(row, 0)], c[(row, 1)]))
        .collect()
}
