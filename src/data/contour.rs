//! Contours: runs of connected curve segments, and the collection of all
//! contours of a path.

use crate::data::point::Point;
use crate::data::poly_curve::PolyCurve;
use std::ops::Index;

/// One continuous stroke of a path.
///
/// Consecutive segments meet end to start as long as the input did; this is
/// not checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    segments: Vec<PolyCurve>,
    closed: bool,
}

impl Contour {
    /// Create a new contour from a list of segments
    pub fn new(segments: Vec<PolyCurve>, closed: bool) -> Self {
        Self { segments, closed }
    }

    /// Create an open contour from a single segment
    pub fn from_segment(segment: PolyCurve) -> Self {
        Self {
            segments: vec![segment],
            closed: false,
        }
    }

    pub(crate) fn push(&mut self, segment: PolyCurve) {
        self.segments.push(segment);
    }

    pub(crate) fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn segments(&self) -> &[PolyCurve] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the stroke ended on an explicit close command.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PolyCurve> {
        self.segments.iter()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(PolyCurve::start)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(PolyCurve::end)
    }
}

impl Index<usize> for Contour {
    type Output = PolyCurve;

    fn index(&self, index: usize) -> &PolyCurve {
        &self.segments[index]
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a PolyCurve;
    type IntoIter = std::slice::Iter<'a, PolyCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for Contour {
    type Item = PolyCurve;
    type IntoIter = std::vec::IntoIter<PolyCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// All contours of a path, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContourCollection {
    contours: Vec<Contour>,
}

impl ContourCollection {
    /// Collect contours, skipping empty ones.
    pub fn new(contours: Vec<Contour>) -> Self {
        Self {
            contours: contours.into_iter().filter(|c| !c.is_empty()).collect(),
        }
    }

    pub(crate) fn push(&mut self, contour: Contour) {
        debug_assert!(!contour.is_empty(), "empty contours are never collected");
        self.contours.push(contour);
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    /// Total number of segments across all contours.
    pub fn segment_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    pub fn into_inner(self) -> Vec<Contour> {
        self.contours
    }
}

impl Index<usize> for ContourCollection {
    type Output = Contour;

    fn index(&self, index: usize) -> &Contour {
        &self.contours[index]
    }
}

impl<'a> IntoIterator for &'a ContourCollection {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

impl IntoIterator for ContourCollection {
    type Item = Contour;
    type IntoIter = std::vec::IntoIter<Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.into_iter()
    }
}
