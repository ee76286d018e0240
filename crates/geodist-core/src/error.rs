//! Error types for grid construction and buffer validation.

use std::error::Error;
use std::fmt;

use crate::shape::GridShape;

/// Errors arising from grid shape construction or view validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis has zero extent.
    EmptyExtent {
        /// Caller-facing axis index (0 is the slowest-varying axis).
        axis: usize,
    },
    /// The product of all extents does not fit in `usize`.
    SizeOverflow,
    /// Only 2D and 3D grids are supported.
    UnsupportedRank {
        /// The requested number of dimensions.
        ndim: usize,
    },
    /// A buffer length does not match the cell count of its shape.
    LengthMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// Two grids that must agree in shape do not.
    ShapeMismatch {
        /// Shape of the reference grid (the intensity image).
        left: GridShape,
        /// Shape of the disagreeing grid.
        right: GridShape,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { axis } => write!(f, "axis {axis} has zero extent"),
            Self::SizeOverflow => write!(f, "grid cell count overflows usize"),
            Self::UnsupportedRank { ndim } => {
                write!(f, "unsupported grid rank {ndim}, expected 2 or 3")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer has {actual} elements, shape requires {expected}")
            }
            Self::ShapeMismatch { left, right } => {
                write!(f, "shape mismatch: {left} vs {right}")
            }
        }
    }
}

impl Error for GridError {}
