//! Error types for distance transforms.

use std::error::Error;
use std::fmt;

use geodist_core::GridError;
use geodist_space::SpaceError;

use crate::config::ConfigError;

/// Errors returned by [`GeodesicTransform`](crate::GeodesicTransform)
/// implementations and the free-function entry points.
///
/// Every variant is detected before the first cell is written, except
/// [`AllocationFailed`](Self::AllocationFailed), which leaves the output
/// buffer initialised but unpropagated.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// Image, seed mask and output disagree in shape, or a buffer does not
    /// match its declared dimensions.
    Grid(GridError),
    /// The engine's connectivity or spacing does not fit the grid's rank.
    Space(SpaceError),
    /// Engine parameters are invalid.
    Config(ConfigError),
    /// Working storage for the transform could not be allocated.
    AllocationFailed {
        /// Cell count the allocation was sized for.
        cells: usize,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Space(e) => write!(f, "neighbourhood: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::AllocationFailed { cells } => {
                write!(f, "failed to allocate working storage for {cells} cells")
            }
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::AllocationFailed { .. } => None,
        }
    }
}

impl From<GridError> for TransformError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SpaceError> for TransformError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ConfigError> for TransformError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
