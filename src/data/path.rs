//! The path representation consumed by the contour scan.
//!
//! A path is a flat command stream paired slot-for-slot with a vertex stream.
//! Control points of quadratic and cubic segments occupy their own slots:
//!
//! | call                 | commands                     | vertices     |
//! |----------------------|------------------------------|--------------|
//! | `move_to(p)`         | `Move`                       | `p`          |
//! | `line_to(p)`         | `LineTo`                     | `p`          |
//! | `quad_to(c, p)`      | `QuadTo, LineTo`             | `c, p`       |
//! | `cubic_to(c1, c2, p)`| `CubicTo, CubicTo, LineTo`   | `c1, c2, p`  |
//! | `close()`            | `Close`                      | placeholder  |

use crate::constants::{CMD_CLOSE, CMD_CUBIC, CMD_MOVE, CMD_ON, CMD_QUAD};
use crate::data::point::Point;

/// One command slot of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    Move,
    /// On-curve point; on its own it draws a straight line.
    LineTo,
    QuadTo,
    CubicTo,
    Close,
    /// A command byte the scan does not handle.
    Unknown(u8),
}

impl PathCommand {
    /// The raw command code used by the host path format.
    pub fn raw(self) -> u8 {
        match self {
            Self::Move => CMD_MOVE,
            Self::LineTo => CMD_ON,
            Self::QuadTo => CMD_QUAD,
            Self::CubicTo => CMD_CUBIC,
            Self::Close => CMD_CLOSE,
            Self::Unknown(code) => code,
        }
    }
}

impl From<u8> for PathCommand {
    fn from(code: u8) -> Self {
        match code {
            CMD_MOVE => Self::Move,
            CMD_ON => Self::LineTo,
            CMD_QUAD => Self::QuadTo,
            CMD_CUBIC => Self::CubicTo,
            CMD_CLOSE => Self::Close,
            other => Self::Unknown(other),
        }
    }
}

/// Borrowed view of a path's command and vertex streams.
#[derive(Debug, Clone, Copy)]
pub struct PathView<'a> {
    pub commands: &'a [PathCommand],
    pub vertices: &'a [Point],
}

impl<'a> PathView<'a> {
    pub fn new(commands: &'a [PathCommand], vertices: &'a [Point]) -> Self {
        Self { commands, vertices }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Owned path that records drawing calls in the flattened slot layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStream {
    commands: Vec<PathCommand>,
    vertices: Vec<Point>,
}

impl PathStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw command codes and their vertices.
    pub fn from_raw(codes: &[u8], vertices: Vec<Point>) -> Self {
        Self {
            commands: codes.iter().map(|&c| PathCommand::from(c)).collect(),
            vertices,
        }
    }

    fn push(&mut self, command: PathCommand, vertex: Point) {
        self.commands.push(command);
        self.vertices.push(vertex);
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.push(PathCommand::Move, p);
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.push(PathCommand::LineTo, p);
        self
    }

    pub fn quad_to(&mut self, control: Point, p: Point) -> &mut Self {
        self.push(PathCommand::QuadTo, control);
        self.push(PathCommand::LineTo, p);
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, p: Point) -> &mut Self {
        self.push(PathCommand::CubicTo, control1);
        self.push(PathCommand::CubicTo, control2);
        self.push(PathCommand::LineTo, p);
        self
    }

    /// The close slot carries a NaN vertex; it is never read as geometry.
    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close, Point::new(f64::NAN, f64::NAN));
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn view(&self) -> PathView<'_> {
        PathView::new(&self.commands, &self.vertices)
    }
}
