//! Fast Marching geodesic distance engine.
//!
//! Propagates a wavefront outward from the seeds in order of increasing
//! distance. Each cell moves `Unvisited -> Trial -> Frozen`; once frozen its
//! distance is final, because every edge cost is non-negative and every
//! cell still on the front has a tentative distance no smaller than the
//! one just frozen.
//!
//! Constructed via the builder pattern: [`FastMarching::builder`].

use std::time::Instant;

use geodist_core::{GridViewMut, ImageView, SeedView};
use geodist_space::{Connectivity, ResolvedNeighbours, Spacing};

use crate::config::{ConfigError, Neighbourhood};
use crate::cost::{CostModel, EdgeCost};
use crate::error::TransformError;
use crate::heap::{HeapUpdate, IndexedHeap};
use crate::metrics::TransformMetrics;
use crate::state::{try_state_array, CellState};
use crate::transform::{finish, prepare, GeodesicTransform};

/// Exact (up to lattice discretisation) geodesic distance transform.
///
/// A Dijkstra-style relaxation over the grid graph using an
/// [`IndexedHeap`] with decrease-key. `O(N log N)` for `N` cells.
///
/// The edge cost defaults to the geodesic model with `lambda = 1`,
/// weighting space and intensity equally.
///
/// # Construction
///
/// ```
/// use geodist_engine::FastMarching;
/// use geodist_space::Connectivity;
///
/// let engine = FastMarching::builder()
///     .connectivity(Connectivity::Four)
///     .build()
///     .unwrap();
/// assert_eq!(engine.cost().lambda(), 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FastMarching {
    neighbourhood: Neighbourhood,
    cost: EdgeCost,
}

/// Builder for [`FastMarching`].
///
/// Every field is optional.
#[derive(Clone, Debug)]
pub struct FastMarchingBuilder {
    neighbourhood: Neighbourhood,
    model: CostModel,
    lambda: f32,
}

impl FastMarching {
    /// Create a new builder for configuring a `FastMarching` engine.
    pub fn builder() -> FastMarchingBuilder {
        FastMarchingBuilder {
            neighbourhood: Neighbourhood::default(),
            model: CostModel::Geodesic,
            lambda: 1.0,
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
}

impl FastMarchingBuilder {
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

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `lambda` is invalid for the cost model
    /// - an explicit connectivity and spacing disagree in rank
    pub fn build(self) -> Result<FastMarching, ConfigError> {
        self.neighbourhood.validate()?;
        let cost = EdgeCost::new(self.model, self.lambda)?;
        Ok(FastMarching {
            neighbourhood: self.neighbourhood,
            cost,
        })
    }
}

/// Working state for one Fast Marching run.
struct Front<'a> {
    image: &'a [f32],
    dist: &'a mut [f32],
    state: Vec<CellState>,
    heap: IndexedHeap,
    neighbours: &'a ResolvedNeighbours,
    cost: EdgeCost,
    metrics: &'a mut TransformMetrics,
}

impl Front<'_> {
    /// Relax every non-frozen neighbour of the frozen cell `cell`.
    fn relax_from(&mut self, cell: usize) {
        let shape = *self.neighbours.shape();
        let v = shape.volume_coord(cell);
        let base = self.dist[cell];
        let ip = self.image[cell];

        for o in self.neighbours.all() {
            let Some(q) = o.apply(&shape, v, cell) else {
                continue;
            };
            if self.state[q] == CellState::Frozen {
                continue;
            }
            self.metrics.relaxations += 1;
            let candidate = base + self.cost.cost(o.distance, ip, self.image[q]);
            if candidate < self.dist[q] {
                self.dist[q] = candidate;
                self.state[q] = CellState::Trial;
                self.metrics.updates += 1;
                match self.heap.push_or_decrease(q, candidate) {
                    HeapUpdate::Inserted => self.metrics.heap_pushes += 1,
                    HeapUpdate::Decreased => self.metrics.decrease_keys += 1,
                    HeapUpdate::Unchanged => {}
                }
            }
        }
    }

    fn run(&mut self) {
        // Seeds (distance 0 after `prepare`) are frozen up front and form
        // the initial frontier.
        for cell in 0..self.dist.len() {
            if self.dist[cell] == 0.0 {
                self.state[cell] = CellState::Frozen;
                self.metrics.frozen += 1;
            }
        }
        for cell in 0..self.dist.len() {
            if self.state[cell] == CellState::Frozen {
                self.relax_from(cell);
            }
        }

        while let Some((cell, _)) = self.heap.pop_min() {
            self.state[cell] = CellState::Frozen;
            self.metrics.frozen += 1;
            self.relax_from(cell);
        }
    }
}

impl GeodesicTransform for FastMarching {
    fn name(&self) -> &str {
        "FastMarching"
    }

    fn transform_into(
        &self,
        image: &ImageView<'_>,
        seeds: &SeedView<'_>,
        out: &mut GridViewMut<'_, f32>,
    ) -> Result<TransformMetrics, TransformError> {
        let start = Instant::now();
        let (neighbours, mut metrics) = prepare(&self.neighbourhood, image, seeds, out)?;

        let cells = image.len();
        let alloc_failed = |_| TransformError::AllocationFailed { cells };
        let state = try_state_array(cells).map_err(alloc_failed)?;
        let heap = IndexedHeap::try_with_cells(cells).map_err(alloc_failed)?;

        let mut front = Front {
            image: image.as_slice(),
            dist: out.as_mut_slice(),
            state,
            heap,
            neighbours: &neighbours,
            cost: self.cost,
            metrics: &mut metrics,
        };
        front.run();

        finish(&mut metrics, out.as_slice(), start);
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodist_core::{DistanceMap, GridShape, GridView};

    fn run_2d(
        engine: &FastMarching,
        rows: usize,
        cols: usize,
        image: &[f32],
        seeds: &[u8],
    ) -> (DistanceMap, TransformMetrics) {
        let shape = GridShape::new_2d(rows, cols).unwrap();
        let image = GridView::new(image, shape).unwrap();
        let seeds = GridView::new(seeds, shape).unwrap();
        engine.transform(&image, &seeds).unwrap()
    }

    fn corner_seed(n: usize) -> Vec<u8> {
        let mut s = vec![0u8; n];
        s[0] = 1;
        s
    }

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn builder_defaults() {
        let e = FastMarching::builder().build().unwrap();
        assert_eq!(e, FastMarching::default());
        assert_eq!(e.name(), "FastMarching");
        assert_eq!(e.cost().model(), CostModel::Geodesic);
        assert_eq!(e.neighbourhood().connectivity, None);
    }

    #[test]
    fn builder_rejects_bad_lambda() {
        let r = FastMarching::builder().lambda(f32::NAN).build();
        assert!(matches!(r, Err(ConfigError::InvalidLambda { .. })));
    }

    #[test]
    fn builder_rejects_conflicting_neighbourhood() {
        let r = FastMarching::builder()
            .connectivity(Connectivity::Eight)
            .spacing(Spacing::new_3d(1.0, 1.0, 1.0).unwrap())
            .build();
        assert!(matches!(r, Err(ConfigError::Space(_))));
    }

    // ---------------------------------------------------------------
    // Propagation tests
    // ---------------------------------------------------------------

    #[test]
    fn five_by_five_corner_seed_eight_connected() {
        let (map, m) = run_2d(&FastMarching::default(), 5, 5, &[1.0; 25], &corner_seed(25));
        let diag = 4.0 * 2f32.sqrt();
        assert!((map.get(&[4, 4]).unwrap() - diag).abs() < 1e-5);
        // (0, 4): four straight steps.
        assert!((map.get(&[0, 4]).unwrap() - 4.0).abs() < 1e-6);
        // (2, 4): two diagonal plus two straight steps.
        let expected = 2.0 * 2f32.sqrt() + 2.0;
        assert!((map.get(&[2, 4]).unwrap() - expected).abs() < 1e-5);
        assert_eq!(m.frozen, 25);
        assert_eq!(m.reached, 25);
        assert_eq!(m.seeds, 1);
    }

    #[test]
    fn four_connected_constant_grid_is_manhattan() {
        let e = FastMarching::builder()
            .connectivity(Connectivity::Four)
            .build()
            .unwrap();
        let (map, _) = run_2d(&e, 4, 6, &[3.0; 24], &corner_seed(24));
        for r in 0..4 {
            for c in 0..6 {
                assert_eq!(map.get(&[r, c]), Some((r + c) as f32));
            }
        }
    }

    #[test]
    fn no_seeds_leaves_everything_unreached() {
        let (map, m) = run_2d(&FastMarching::default(), 3, 3, &[0.0; 9], &[0; 9]);
        assert!(map.as_slice().iter().all(|d| *d == f32::INFINITY));
        assert_eq!(m.frozen, 0);
        assert_eq!(m.reached, 0);
        assert_eq!(m.heap_pushes, 0);
    }

    #[test]
    fn intensity_step_adds_cost() {
        // One row: seed at col 0, intensity jumps by 3 between col 1 and 2.
        let image = [0.0, 0.0, 3.0, 3.0];
        let (map, _) = run_2d(&FastMarching::default(), 1, 4, &image, &[1, 0, 0, 0]);
        let jump = (1.0f32 + 9.0).sqrt();
        assert_eq!(map.get(&[0, 1]), Some(1.0));
        assert!((map.get(&[0, 2]).unwrap() - (1.0 + jump)).abs() < 1e-6);
        assert!((map.get(&[0, 3]).unwrap() - (2.0 + jump)).abs() < 1e-6);
    }

    #[test]
    fn all_seeds_all_zero() {
        let (map, m) = run_2d(&FastMarching::default(), 2, 3, &[5.0; 6], &[1; 6]);
        assert!(map.as_slice().iter().all(|d| *d == 0.0));
        assert_eq!(m.seeds, 6);
        assert_eq!(m.relaxations, 0);
    }

    #[test]
    fn three_d_six_connected_is_manhattan() {
        let e = FastMarching::builder()
            .connectivity(Connectivity::Six)
            .build()
            .unwrap();
        let shape = GridShape::new_3d(3, 3, 3).unwrap();
        let image = vec![0.0f32; 27];
        let seeds = corner_seed(27);
        let image = GridView::new(&image[..], shape).unwrap();
        let seeds = GridView::new(&seeds[..], shape).unwrap();
        let (map, _) = e.transform(&image, &seeds).unwrap();
        assert_eq!(map.get(&[2, 2, 2]), Some(6.0));
        assert_eq!(map.get(&[1, 0, 2]), Some(3.0));
    }

    #[test]
    fn three_d_default_uses_corner_steps() {
        let shape = GridShape::new_3d(3, 3, 3).unwrap();
        let image = vec![0.0f32; 27];
        let seeds = corner_seed(27);
        let image = GridView::new(&image[..], shape).unwrap();
        let seeds = GridView::new(&seeds[..], shape).unwrap();
        let (map, _) = FastMarching::default().transform(&image, &seeds).unwrap();
        let corner = 2.0 * 3f32.sqrt();
        assert!((map.get(&[2, 2, 2]).unwrap() - corner).abs() < 1e-5);
    }

    #[test]
    fn rejects_shape_mismatch() {
        let a = GridShape::new_2d(2, 2).unwrap();
        let b = GridShape::new_2d(1, 4).unwrap();
        let image = [0.0f32; 4];
        let seeds = [0u8; 4];
        let image = GridView::new(&image[..], a).unwrap();
        let seeds = GridView::new(&seeds[..], b).unwrap();
        let r = FastMarching::default().transform(&image, &seeds);
        assert!(matches!(r, Err(TransformError::Grid(_))));
    }

    #[test]
    fn rejects_connectivity_for_wrong_rank() {
        let e = FastMarching::builder()
            .connectivity(Connectivity::Four)
            .build()
            .unwrap();
        let shape = GridShape::new_3d(2, 2, 2).unwrap();
        let image = [0.0f32; 8];
        let seeds = [1u8; 8];
        let image = GridView::new(&image[..], shape).unwrap();
        let seeds = GridView::new(&seeds[..], shape).unwrap();
        let r = e.transform(&image, &seeds);
        assert!(matches!(r, Err(TransformError::Space(_))));
    }
}
