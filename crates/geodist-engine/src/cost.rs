//! Local edge cost between adjacent cells.
//!
//! Both engines price a step from `p` to a neighbour `q` by blending the
//! step's spatial length with the intensity difference across it:
//!
//! ```text
//! Geodesic: cost = sqrt(d^2 + lambda^2 * (I(p) - I(q))^2)
//! Convex:   cost = sqrt((1 - lambda) * d^2 + lambda * (I(p) - I(q))^2)
//! ```
//!
//! The cost is non-negative and symmetric in `p` and `q` for both models.

use std::fmt;

use crate::config::ConfigError;

/// How the spatial and intensity terms are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CostModel {
    /// `sqrt(d^2 + lambda^2 * dI^2)`. Any finite, non-negative lambda.
    #[default]
    Geodesic,
    /// `sqrt((1 - lambda) * d^2 + lambda * dI^2)` with lambda in `[0, 1]`.
    ///
    /// `lambda = 0` gives the plain spatial distance and `lambda = 1` a
    /// purely intensity-driven distance.
    Convex,
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geodesic => write!(f, "geodesic"),
            Self::Convex => write!(f, "convex"),
        }
    }
}

/// A validated edge-cost function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCost {
    model: CostModel,
    lambda: f32,
    /// Weight on `d^2`.
    spatial_weight: f32,
    /// Weight on `dI^2`.
    intensity_weight: f32,
}

impl EdgeCost {
    /// Build a cost function, validating `lambda` for the model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLambda`] if `lambda` is not finite, is
    /// negative, or exceeds 1 under [`CostModel::Convex`].
    pub fn new(model: CostModel, lambda: f32) -> Result<Self, ConfigError> {
        let in_range = match model {
            CostModel::Geodesic => lambda >= 0.0,
            CostModel::Convex => (0.0..=1.0).contains(&lambda),
        };
        if !lambda.is_finite() || !in_range {
            return Err(ConfigError::InvalidLambda { model, value: lambda });
        }
        let (spatial_weight, intensity_weight) = match model {
            CostModel::Geodesic => (1.0, lambda * lambda),
            CostModel::Convex => (1.0 - lambda, lambda),
        };
        Ok(Self {
            model,
            lambda,
            spatial_weight,
            intensity_weight,
        })
    }

    /// The cost model.
    pub fn model(&self) -> CostModel {
        self.model
    }

    /// The intensity weighting.
    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    /// Cost of a step of spatial length `spatial` between cells with
    /// intensities `ip` and `iq`.
    #[inline]
    pub fn cost(&self, spatial: f32, ip: f32, iq: f32) -> f32 {
        let di = ip - iq;
        (self.spatial_weight * spatial * spatial + self.intensity_weight * di * di).sqrt()
    }
}

impl Default for EdgeCost {
    /// Geodesic model with `lambda = 1`.
    fn default() -> Self {
        Self {
            model: CostModel::Geodesic,
            lambda: 1.0,
            spatial_weight: 1.0,
            intensity_weight: 1.0,
        }
    }
}
