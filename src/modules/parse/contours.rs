//! Split a command/vertex stream into contours of polynomial curves.
//!
//! The scan walks the command stream once. The first vertex of every segment
//! is the last vertex of the slot before it, so a segment of degree n
//! starting at command `i` reads vertices `i-1 ..= i+n-1` and the scan
//! resumes at `i+n`.
//!
//! Rules:
//! - an empty stream gives an empty collection;
//! - the first command must be a move;
//! - a drawing command needs a current point (set by a move, cleared by a
//!   close);
//! - a close adds a straight segment back to the sub-path start unless the
//!   current vertex is exactly that start, then finishes the contour;
//! - a trailing contour without a close is kept as an open contour.
//!
//! A move inside a contour only resets the start point; segments drawn so far
//! stay in the same contour until the next close or the end of the stream.
//!
//! Any structural error discards everything built so far.
//!
//! # Example
//!
//! ```rust
//! use polycurve_rs::{pt, ContourCollection, FromPath, PathStream};
//!
//! let mut path = PathStream::new();
//! path.move_to(pt!(0, 0))
//!     .quad_to(pt!(5, 5), pt!(10, 0))
//!     .close();
//!
//! let contours = ContourCollection::from_path(&path.view()).unwrap();
//! assert_eq!(contours.len(), 1);
//! assert_eq!(contours[0].len(), 2); // the quadratic plus the closing line
//! assert_eq!(contours[0][0].degree(), 2);
//! ```

use crate::data::{Contour, ContourCollection, PathCommand, PathStream, PathView, Point, PolyCurve};
use crate::error::{ContourError, ContourResult, GeometryFault};
use log::{debug, trace, warn};
use std::ops::Range;

/// Build a value from a path's command/vertex streams.
pub trait FromPath: Sized {
    fn from_path(path: &PathView<'_>) -> ContourResult<Self>;
}

impl FromPath for ContourCollection {
    fn from_path(path: &PathView<'_>) -> ContourResult<Self> {
        ContourScan::new(path.vertices).run(path.commands)
    }
}

impl TryFrom<&PathStream> for ContourCollection {
    type Error = ContourError;

    fn try_from(path: &PathStream) -> ContourResult<Self> {
        Self::from_path(&path.view())
    }
}

/// Vertices read by one segment and the command index that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSpan {
    pub vertices: Range<usize>,
    pub next: usize,
}

/// Span of a degree-`degree` segment whose command sits at `index`.
///
/// Returns `None` when the segment would start before the first vertex or
/// end past `vertex_count`.
pub fn segment_span(index: usize, degree: usize, vertex_count: usize) -> Option<SegmentSpan> {
    let first = index.checked_sub(1)?;
    let next = index.checked_add(degree)?;
    if next > vertex_count {
        return None;
    }
    Some(SegmentSpan {
        vertices: first..next,
        next,
    })
}

/// Segment shapes a drawing command can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Line,
    Quadratic,
    Cubic,
}

impl SegmentKind {
    fn degree(self) -> usize {
        match self {
            Self::Line => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
        }
    }
}

/// Scan state, local to one conversion.
struct ContourScan<'a> {
    vertices: &'a [Point],
    has_prev_vertex: bool,
    start_vertex: Point,
    contour: Contour,
    contours: ContourCollection,
}

impl<'a> ContourScan<'a> {
    fn new(vertices: &'a [Point]) -> Self {
        Self {
            vertices,
            has_prev_vertex: false,
            start_vertex: Point::default(),
            contour: Contour::default(),
            contours: ContourCollection::default(),
        }
    }

    fn run(mut self, commands: &[PathCommand]) -> ContourResult<ContourCollection> {
        match self.scan(commands) {
            Ok(()) => {
                self.finish_contour(false);
                debug!(
                    "built {} contours with {} segments",
                    self.contours.len(),
                    self.contours.segment_count()
                );
                Ok(self.contours)
            }
            Err(err) => {
                warn!(
                    "{err}; discarding {} contours and {} pending segments",
                    self.contours.len(),
                    self.contour.len()
                );
                Err(err)
            }
        }
    }

    fn scan(&mut self, commands: &[PathCommand]) -> ContourResult<()> {
        if commands.is_empty() {
            return Ok(());
        }
        if commands[0] != PathCommand::Move {
            return Err(ContourError::invalid(0, GeometryFault::MissingMove));
        }

        let mut i = 0;
        while i < commands.len() {
            i = match commands[i] {
                PathCommand::Move => {
                    self.start_vertex = self.vertex(i, i)?;
                    self.has_prev_vertex = true;
                    i + 1
                }
                PathCommand::LineTo => self.segment(i, SegmentKind::Line)?,
                PathCommand::QuadTo => self.segment(i, SegmentKind::Quadratic)?,
                PathCommand::CubicTo => self.segment(i, SegmentKind::Cubic)?,
                PathCommand::Close => {
                    self.close(i)?;
                    i + 1
                }
                PathCommand::Unknown(code) => {
                    return Err(ContourError::invalid(
                        i,
                        GeometryFault::UnknownCommand(code),
                    ));
                }
            };
        }
        Ok(())
    }

    /// Vertex `slot`, read on behalf of the command at `index`.
    fn vertex(&self, index: usize, slot: usize) -> ContourResult<Point> {
        self.vertices
            .get(slot)
            .copied()
            .ok_or_else(|| ContourError::invalid(index, GeometryFault::TruncatedPath))
    }

    /// Emit the segment whose command is at `index`; returns the next index.
    fn segment(&mut self, index: usize, kind: SegmentKind) -> ContourResult<usize> {
        if !self.has_prev_vertex {
            return Err(ContourError::invalid(index, GeometryFault::NoCurrentPoint));
        }
        let span = segment_span(index, kind.degree(), self.vertices.len())
            .ok_or_else(|| ContourError::invalid(index, GeometryFault::TruncatedPath))?;

        // the span holds exactly degree + 1 vertices
        let p = &self.vertices[span.vertices];
        let curve = match kind {
            SegmentKind::Line => PolyCurve::line(p[0], p[1]),
            SegmentKind::Quadratic => PolyCurve::quadratic(p[0], p[1], p[2]),
            SegmentKind::Cubic => PolyCurve::cubic(p[0], p[1], p[2], p[3]),
        };
        trace!("segment of degree {} at command {index}", curve.degree());
        self.contour.push(curve);
        Ok(span.next)
    }

    fn close(&mut self, index: usize) -> ContourResult<()> {
        // the first command is always a move, so index >= 1 here
        if self.has_prev_vertex {
            let current = self.vertex(index, index - 1)?;
            if current != self.start_vertex {
                trace!("closing line at command {index}");
                self.contour.push(PolyCurve::line(current, self.start_vertex));
            }
        }
        self.has_prev_vertex = false;
        self.finish_contour(true);
        Ok(())
    }

    fn finish_contour(&mut self, closed: bool) {
        if self.contour.is_empty() {
            return;
        }
        let mut contour = std::mem::take(&mut self.contour);
        contour.set_closed(closed);
        self.contours.push(contour);
    }
}
