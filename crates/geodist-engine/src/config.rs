//! Engine configuration, validation, and error types.
//!
//! Both engines share a [`Neighbourhood`]: an optional connectivity and an
//! optional per-axis spacing. Unset values are resolved against the grid
//! at transform time, so one engine instance serves 2D and 3D inputs.
//! Engine-specific parameters live on the builders in
//! [`fast_marching`](crate::fast_marching) and
//! [`raster_scan`](crate::raster_scan).

use std::error::Error;
use std::fmt;

use geodist_core::GridShape;
use geodist_space::{Connectivity, NeighbourTable, ResolvedNeighbours, SpaceError, Spacing};

use crate::cost::CostModel;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building an engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `lambda` is NaN, infinite, negative, or above 1 for the convex model.
    InvalidLambda {
        /// Cost model the value was checked against.
        model: CostModel,
        /// The invalid value.
        value: f32,
    },
    /// Raster Scan needs at least one iteration.
    ZeroIterations,
    /// Connectivity and spacing disagree.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLambda { model, value } => match model {
                CostModel::Geodesic => {
                    write!(f, "lambda must be finite and non-negative, got {value}")
                }
                CostModel::Convex => {
                    write!(f, "lambda must be in [0.0, 1.0] for the {model} model, got {value}")
                }
            },
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
            Self::Space(e) => write!(f, "neighbourhood: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── Neighbourhood ──────────────────────────────────────────────────

/// Connectivity and spacing shared by both engines.
///
/// `None` means "choose from the grid": the rank's default connectivity
/// ([`Connectivity::default_for`]) and unit spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighbourhood {
    /// Neighbour connectivity. Default: 8 in 2D, 26 in 3D.
    pub connectivity: Option<Connectivity>,
    /// Per-axis spacing. Default: unit spacing.
    pub spacing: Option<Spacing>,
}

impl Neighbourhood {
    /// Check that an explicit connectivity and spacing agree in rank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(c), Some(s)) = (self.connectivity, self.spacing) {
            NeighbourTable::new(c, s)?;
        }
        Ok(())
    }

    /// Build the neighbour table for a grid of the given shape.
    pub fn table_for(&self, shape: &GridShape) -> Result<NeighbourTable, SpaceError> {
        let ndim = shape.ndim();
        // GridShape only admits ranks 2 and 3.
        let connectivity = self
            .connectivity
            .or_else(|| Connectivity::default_for(ndim))
            .unwrap_or(Connectivity::TwentySix);
        if connectivity.ndim() != ndim {
            return Err(SpaceError::ConnectivityMismatch { connectivity, ndim });
        }
        let spacing = self
            .spacing
            .unwrap_or_else(|| Spacing::unit_for(connectivity));
        if spacing.ndim() != ndim {
            return Err(SpaceError::SpacingRankMismatch {
                spacing: spacing.ndim(),
                ndim,
            });
        }
        NeighbourTable::new(connectivity, spacing)
    }

    /// Build and resolve the neighbour table for `shape`.
    pub fn resolve(&self, shape: &GridShape) -> Result<ResolvedNeighbours, SpaceError> {
        let table = self.table_for(shape)?;
        ResolvedNeighbours::for_shape(&table, shape)
    }
}
