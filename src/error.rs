//! Error type shared by the curve constructors and the contour scan.

use thiserror::Error;

/// What exactly was wrong with the input when geometry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFault {
    /// The stream does not begin with a MOVE command.
    MissingMove,
    /// A drawing command appeared while no current point was established.
    NoCurrentPoint,
    /// A command byte the scan does not understand.
    UnknownCommand(u8),
    /// A command reads a vertex past the end of the vertex stream.
    TruncatedPath,
    /// A curve needs at least two coefficients.
    TooFewCoefficients,
}

impl std::fmt::Display for GeometryFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMove => write!(f, "path does not start with a move"),
            Self::NoCurrentPoint => write!(f, "drawing command without a current point"),
            Self::UnknownCommand(code) => write!(f, "unknown command code {code}"),
            Self::TruncatedPath => write!(f, "command reads past the end of the vertex stream"),
            Self::TooFewCoefficients => write!(f, "curve needs at least two coefficients"),
        }
    }
}

fn location(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" at command {index}"),
        None => String::new(),
    }
}

/// Errors produced while building curves and contours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContourError {
    /// The input cannot be read as valid path geometry.
    ///
    /// `index` is the offending command slot, or `None` when a curve was
    /// built directly rather than from a path.
    #[error("invalid geometry{}: {fault}", location(.index))]
    InvalidGeometry {
        index: Option<usize>,
        fault: GeometryFault,
    },
}

impl ContourError {
    /// Error raised by the command at `index` of a path.
    pub fn invalid(index: usize, fault: GeometryFault) -> Self {
        Self::InvalidGeometry {
            index: Some(index),
            fault,
        }
    }

    /// Error raised while building a single curve.
    pub fn curve(fault: GeometryFault) -> Self {
        Self::InvalidGeometry { index: None, fault }
    }

    /// The underlying cause.
    pub fn fault(&self) -> GeometryFault {
        match self {
            Self::InvalidGeometry { fault, .. } => *fault,
        }
    }
}

pub type ContourResult<T> = Result<T, ContourError>;
