//! Raw command codes of the host path format.
//!
//! The host stores one command byte per vertex slot. Only the codes below are
//! understood by the contour scan; any other byte is reported as an unknown
//! command.

/// Starts a new sub-path at the vertex in the same slot.
pub const CMD_MOVE: u8 = 0;
/// On-curve point. Ends a line, or the last slot of a quadratic/cubic.
pub const CMD_ON: u8 = 1;
/// First control point of a quadratic segment.
pub const CMD_QUAD: u8 = 2;
/// Control point of a cubic segment.
pub const CMD_CUBIC: u8 = 3;
/// Closes the current sub-path. Its vertex slot carries no geometry.
pub const CMD_CLOSE: u8 = 4;
