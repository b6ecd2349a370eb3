// Module definitions
pub mod constants;
#[macro_use]
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::contour::{Contour, ContourCollection};
pub use data::path::{PathCommand, PathStream, PathView};
pub use data::point::Point;
pub use data::poly_curve::PolyCurve;
pub use error::{ContourError, ContourResult, GeometryFault};
pub use modules::parse::contours::FromPath;
