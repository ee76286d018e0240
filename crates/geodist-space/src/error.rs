//! Error types for neighbourhood construction.

use crate::connectivity::Connectivity;
use std::fmt;

/// Errors arising from connectivity or spacing configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum SpaceError {
    /// The connectivity is defined for a different grid rank.
    ConnectivityMismatch {
        /// The requested connectivity.
        connectivity: Connectivity,
        /// Rank of the grid it was applied to.
        ndim: usize,
    },
    /// A spacing component is not finite and positive.
    InvalidSpacing {
        /// Caller-facing axis index.
        axis: usize,
        /// The offending value.
        value: f32,
    },
    /// The spacing was declared for a different grid rank.
    SpacingRankMismatch {
        /// Rank the spacing was declared for.
        spacing: usize,
        /// Rank of the grid it was applied to.
        ndim: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectivityMismatch { connectivity, ndim } => write!(
                f,
                "{connectivity} connectivity is {}D, grid is {ndim}D",
                connectivity.ndim()
            ),
            Self::InvalidSpacing { axis, value } => {
                write!(f, "spacing on axis {axis} must be finite and positive, got {value}")
            }
            Self::SpacingRankMismatch { spacing, ndim } => {
                write!(f, "spacing is {spacing}D, grid is {ndim}D")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
