//! Core data structures: points, polynomial curves, contours and the path
//! streams they are built from.

#[macro_use]
pub mod macros;
pub mod contour;
pub mod path;
pub mod point;
pub mod poly_curve;

pub use contour::{Contour, ContourCollection};
pub use path::{PathCommand, PathStream, PathView};
pub use point::Point;
pub use poly_curve::PolyCurve;
