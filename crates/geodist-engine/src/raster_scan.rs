//! Raster Scan geodesic distance engine.
//!
//! Approximates the geodesic distance with repeated pairs of raster sweeps
//! instead of a priority queue. The forward sweep visits cells in
//! ascending row-major order and pulls distances from the neighbours that
//! precede each cell; the backward sweep does the same in descending order
//! with the opposite half of the neighbourhood. Updates are made in place,
//! so a cell sees values already lowered earlier in the same sweep.
//!
//! More iterations never raise a distance, and every distance stays at or
//! above the Fast Marching result for the same cost and neighbourhood.
//!
//! Constructed via the builder pattern: [`RasterScan::builder`].

use std::time::Instant;

use geodist_core::{GridViewMut, ImageView, SeedView};
use geodist_space::{Connectivity, ResolvedNeighbours, ResolvedOffset, Spacing};

use crate::config::{ConfigError, Neighbourhood};
use crate::cost::{CostModel, EdgeCost};
use crate::error::TransformError;
use crate::metrics::TransformMetrics;
use crate::transform::{finish, prepare, GeodesicTransform};

/// Default intensity weighting.
pub const DEFAULT_LAMBDA: f32 = 1.0;

/// Default number of forward/backward sweep pairs.
pub const DEFAULT_ITERATIONS: u32 = 4;

/// Sweep-based approximate geodesic distance transform.
///
/// Each iteration costs two `O(N)` passes over the grid. The result is
/// exact whenever every shortest path can be decomposed into runs that
/// the sweep order follows; otherwise it converges toward the exact
/// distance as `iterations` grows.
///
/// # Construction
///
/// ```
/// use geodist_engine::{CostModel, RasterScan};
///
/// let engine = RasterScan::builder()
///     .lambda(0.5)
///     .iterations(8)
///     .build()
///     .unwrap();
/// assert_eq!(engine.iterations(), 8);
///
/// // The convex model requires lambda in [0, 1].
/// assert!(RasterScan::builder()
///     .cost_model(CostModel::Convex)
///     .lambda(2.0)
///     .build()
///     .is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RasterScan {
    neighbourhood: Neighbourhood,
    cost: EdgeCost,
    iterations: u32,
    stop_when_converged: bool,
}

/// Builder for [`RasterScan`].
///
/// Every field is optional.
#[derive(Clone, Debug)]
pub struct RasterScanBuilder {
    neighbourhood: Neighbourhood,
    model: CostModel,
    lambda: f32,
    iterations: u32,
    stop_when_converged: bool,
}

impl Default for RasterScan {
    /// `lambda = 1.0`, 4 iterations, geodesic cost, rank-default
    /// connectivity, unit spacing.
    fn default() -> Self {
        Self {
            neighbourhood: Neighbourhood::default(),
            cost: EdgeCost::default(),
            iterations: DEFAULT_ITERATIONS,
            stop_when_converged: false,
        }
    }
}

impl RasterScan {
    /// Create a new builder for configuring a `RasterScan` engine.
    pub fn builder() -> RasterScanBuilder {
        RasterScanBuilder {
            neighbourhood: Neighbourhood::default(),
            model: CostModel::Geodesic,
            lambda: DEFAULT_LAMBDA,
            iterations: DEFAULT_ITERATIONS,
            stop_when_converged: false,
        }
    }

    /// The edge cost in use.
    pub fn cost(&self) -> &EdgeCost {
        &self.cost
    }

    /// The configured neighbourhood.
    pub fn neighbourhood(&self) -> &Neighbourhood {
        &self.neighbourhood
    }

    /// Maximum number of forward/backward sweep pairs.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run one directional sweep, returning `true` if any cell was lowered.
    fn sweep(
        &self,
        image: &[f32],
        dist: &mut [f32],
        neighbours: &ResolvedNeighbours,
        ascending: bool,
        metrics: &mut TransformMetrics,
    ) -> bool {
        let shape = *neighbours.shape();
        let [depth, rows, cols] = shape.volume();
        let causal: &[ResolvedOffset] = if ascending {
            neighbours.backward()
        } else {
            neighbours.forward()
        };
        let order = |i: usize, len: usize| if ascending { i } else { len - 1 - i };

        let mut changed = false;
        for zi in 0..depth {
            let z = order(zi, depth);
            for yi in 0..rows {
                let y = order(yi, rows);
                for xi in 0..cols {
                    let x = order(xi, cols);
                    let v = [z, y, x];
                    let cell = shape.volume_index(v);
                    let current = dist[cell];
                    if current == 0.0 {
                        continue;
                    }
                    let ip = image[cell];
                    let mut best = current;
                    for o in causal {
                        let Some(q) = o.apply(&shape, v, cell) else {
                            continue;
                        };
                        let dq = dist[q];
                        if dq == f32::INFINITY {
                            continue;
                        }
                        metrics.relaxations += 1;
                        let candidate = dq + self.cost.cost(o.distance, ip, image[q]);
                        if candidate < best {
                            best = candidate;
                        }
                    }
                    if best < current {
                        dist[cell] = best;
                        metrics.updates += 1;
                        changed = true;
                    }
                }
            }
        }
        metrics.sweeps += 1;
        changed
    }
}

impl RasterScanBuilder {
    /// Set the neighbour connectivity. Default: 8 in 2D, 26 in 3D.
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.neighbourhood.connectivity = Some(connectivity);
        self
    }

    /// Set per-axis grid spacing. Default: unit spacing.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.neighbourhood.spacing = Some(spacing);
        self
    }

    /// Set the intensity weighting. Default: `1.0`.
    pub fn lambda(mut self, lambda: f32) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the cost model. Default: [`CostModel::Geodesic`].
    pub fn cost_model(mut self, model: CostModel) -> Self {
        self.model = model;
        self
    }

    /// Set the number of forward/backward sweep pairs. Default: 4.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Stop before `iterations` once a full iteration lowers no cell.
    /// The output is identical either way. Default: `false`.
    pub fn stop_when_converged(mut self, stop: bool) -> Self {
        self.stop_when_converged = stop;
        self
    }

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `iterations` is zero
    /// - `lambda` is invalid for the cost model
    /// - an explicit connectivity and spacing disagree in rank
    pub fn build(self) -> Result<RasterScan, ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        self.neighbourhood.validate()?;
        let cost = EdgeCost::new(self.model, self.lambda)?;
        Ok(RasterScan {
            neighbourhood: self.neighbourhood,
            cost,
            iterations: self.iterations,
            stop_when_converged: self.stop_when_converged,
        })
    }
}

impl GeodesicTransform for RasterScan {
    fn name(&self) -> &str {
        "RasterScan"
    }

    fn transform_into(
        &self,
        image: &ImageView<'_>,
        seeds: &SeedView<'_>,
        out: &mut GridViewMut<'_, f32>,
    ) -> Result<TransformMetrics, TransformError> {
        let start = Instant::now();
        let (neighbours, mut metrics) = prepare(&self.neighbourhood, image, seeds, out)?;

        if metrics.seeds > 0 {
            let image = image.as_slice();
            let dist = out.as_mut_slice();
            for _ in 0..self.iterations {
                let fwd = self.sweep(image, dist, &neighbours, true, &mut metrics);
                let bwd = self.sweep(image, dist, &neighbours, false, &mut metrics);
                if self.stop_when_converged && !fwd && !bwd {
                    break;
                }
            }
        }

        finish(&mut metrics, out.as_slice(), start);
        Ok(metrics)
    }
}
