//! This module provides convenient macros for creating points and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a polynomial curve from Bezier control points
///
/// Two, three and four points give a line, quadratic and cubic; more points
/// go through the general basis conversion.
#[macro_export]
macro_rules! bezier {
    ([$(($x:expr, $y:expr)),+ $(,)?]) => {{
        let points = [$($crate::pt!($x, $y)),+];
        match &points[..] {
            &[p0, p1] => $crate::data::PolyCurve::line(p0, p1),
            &[p0, p1, p2] => $crate::data::PolyCurve::quadratic(p0, p1, p2),
            &[p0, p1, p2, p3] => $crate::data::PolyCurve::cubic(p0, p1, p2, p3),
            points => $crate::data::PolyCurve::from_control_points(points)
                .expect("Bezier curve requires at least 2 points"),
        }
    }};
}
