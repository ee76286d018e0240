//! Reusable grid fixtures.
//!
//! Every fixture is an intensity image plus a seed mask sharing one
//! [`GridShape`]:
//!
//! - [`FixtureBuilder::constant`]: uniform intensity.
//! - [`FixtureBuilder::ramp`]: intensity increasing along the column axis.
//! - [`FixtureBuilder::wall`]: uniform background split by a bright wall
//!   with a single gap.
//! - [`FixtureBuilder::ring`]: a bright annulus on a dark background
//!   (2D only).
//! - [`FixtureBuilder::random`]: uniform noise from a seeded ChaCha RNG.

use geodist_core::{GridShape, GridView, ImageView, SeedView};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// An intensity image and seed mask of one shape.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub shape: GridShape,
    pub image: Vec<f32>,
    pub seeds: Vec<u8>,
}

impl Fixture {
    /// Borrow the image as a view.
    pub fn image_view(&self) -> ImageView<'_> {
        GridView::new(&self.image, self.shape).expect("fixture image matches shape")
    }

    /// Borrow the seed mask as a view.
    pub fn seed_view(&self) -> SeedView<'_> {
        GridView::new(&self.seeds, self.shape).expect("fixture seeds match shape")
    }

    /// Mark the cell at `coord` as a seed.
    pub fn with_seed(mut self, coord: &[usize]) -> Self {
        let i = self.shape.index_of(coord).expect("seed coordinate in bounds");
        self.seeds[i] = 1;
        self
    }

    /// Clear every seed.
    pub fn without_seeds(mut self) -> Self {
        self.seeds.fill(0);
        self
    }

    /// Flat index of a coordinate.
    pub fn index(&self, coord: &[usize]) -> usize {
        self.shape.index_of(coord).expect("coordinate in bounds")
    }
}

/// Entry point for building fixtures of a given shape.
pub struct FixtureBuilder {
    shape: GridShape,
}

impl FixtureBuilder {
    pub fn new_2d(rows: usize, cols: usize) -> Self {
        Self {
            shape: GridShape::new_2d(rows, cols).expect("valid fixture shape"),
        }
    }

    pub fn new_3d(depth: usize, rows: usize, cols: usize) -> Self {
        Self {
            shape: GridShape::new_3d(depth, rows, cols).expect("valid fixture shape"),
        }
    }

    fn with_image(&self, image: Vec<f32>) -> Fixture {
        Fixture {
            shape: self.shape,
            seeds: vec![0; image.len()],
            image,
        }
    }

    /// Uniform intensity `value`.
    pub fn constant(&self, value: f32) -> Fixture {
        self.with_image(vec![value; self.shape.cell_count()])
    }

    /// Intensity `slope * col`.
    pub fn ramp(&self, slope: f32) -> Fixture {
        let image = (0..self.shape.cell_count())
            .map(|i| slope * self.shape.volume_coord(i)[2] as f32)
            .collect();
        self.with_image(image)
    }

    /// Background `0.0` with a column of intensity `height` at `wall_col`,
    /// open only at row `gap_row` (in every slice).
    pub fn wall(&self, wall_col: usize, gap_row: usize, height: f32) -> Fixture {
        let image = (0..self.shape.cell_count())
            .map(|i| {
                let [_, y, x] = self.shape.volume_coord(i);
                if x == wall_col && y != gap_row {
                    height
                } else {
                    0.0
                }
            })
            .collect();
        self.with_image(image)
    }

    /// Bright annulus (`1.0`) between `inner` and `outer` radius around
    /// the grid centre, dark (`0.0`) elsewhere.
    pub fn ring(&self, inner: f32, outer: f32) -> Fixture {
        let cy = (self.shape.rows() as f32 - 1.0) / 2.0;
        let cx = (self.shape.cols() as f32 - 1.0) / 2.0;
        let image = (0..self.shape.cell_count())
            .map(|i| {
                let [_, y, x] = self.shape.volume_coord(i);
                let r = ((y as f32 - cy).powi(2) + (x as f32 - cx).powi(2)).sqrt();
                if r >= inner && r <= outer {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        self.with_image(image)
    }

    /// Uniform noise in `[0, scale)` with `seed_count` random seeds.
    pub fn random(&self, rng_seed: u64, scale: f32, seed_count: usize) -> Fixture {
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let n = self.shape.cell_count();
        let image = (0..n).map(|_| rng.random::<f32>() * scale).collect();
        let mut fixture = self.with_image(image);
        for _ in 0..seed_count {
            let i = rng.random_range(0..n);
            fixture.seeds[i] = 1;
        }
        fixture
    }
}
