//! Parsing module for contours
//!
//! Now supported input:
//! - Flattened command/vertex streams ([`PathView`](crate::data::PathView)),
//!   as produced by vector path builders. See the `contours` module for the
//!   slot layout and the scan rules.

pub mod contours;
