//! Flat-buffer entry points for the four transforms.
//!
//! These take dense row-major buffers plus dimensions, check that the
//! buffers agree with the dimensions, and return a newly allocated
//! distance buffer of the same shape. They use the rank's default
//! connectivity (8 in 2D, 26 in 3D) and unit spacing; build a
//! [`FastMarching`] or [`RasterScan`] directly for anything else.

use geodist_core::{GridShape, GridView};

use crate::error::TransformError;
use crate::fast_marching::FastMarching;
use crate::raster_scan::RasterScan;
use crate::transform::GeodesicTransform;

fn run(
    engine: &dyn GeodesicTransform,
    image: &[f32],
    seeds: &[u8],
    shape: GridShape,
) -> Result<Vec<f32>, TransformError> {
    let image = GridView::new(image, shape)?;
    let seeds = GridView::new(seeds, shape)?;
    let (map, _) = engine.transform(&image, &seeds)?;
    Ok(map.into_vec())
}

/// Fast Marching over an `rows x cols` grid with `lambda = 1`.
///
/// ```
/// let image = [1.0f32; 25];
/// let mut seeds = [0u8; 25];
/// seeds[0] = 1;
/// let d = geodist_engine::geodesic2d_fast_marching(&image, &seeds, 5, 5).unwrap();
/// assert!((d[24] - 4.0 * 2f32.sqrt()).abs() < 1e-5);
/// ```
pub fn geodesic2d_fast_marching(
    image: &[f32],
    seeds: &[u8],
    rows: usize,
    cols: usize,
) -> Result<Vec<f32>, TransformError> {
    run(
        &FastMarching::default(),
        image,
        seeds,
        GridShape::new_2d(rows, cols)?,
    )
}

/// Raster Scan over an `rows x cols` grid.
pub fn geodesic2d_raster_scan(
    image: &[f32],
    seeds: &[u8],
    rows: usize,
    cols: usize,
    lambda: f32,
    iterations: u32,
) -> Result<Vec<f32>, TransformError> {
    let engine = RasterScan::builder()
        .lambda(lambda)
        .iterations(iterations)
        .build()?;
    run(&engine, image, seeds, GridShape::new_2d(rows, cols)?)
}

/// Fast Marching over a `depth x rows x cols` grid with `lambda = 1`.
pub fn geodesic3d_fast_marching(
    image: &[f32],
    seeds: &[u8],
    depth: usize,
    rows: usize,
    cols: usize,
) -> Result<Vec<f32>, TransformError> {
    run(
        &FastMarching::default(),
        image,
        seeds,
        GridShape::new_3d(depth, rows, cols)?,
    )
}

/// Raster Scan over a `depth x rows x cols` grid.
pub fn geodesic3d_raster_scan(
    image: &[f32],
    seeds: &[u8],
    depth: usize,
    rows: usize,
    cols: usize,
    lambda: f32,
    iterations: u32,
) -> Result<Vec<f32>, TransformError> {
    let engine = RasterScan::builder()
        .lambda(lambda)
        .iterations(iterations)
        .build()?;
    run(&engine, image, seeds, GridShape::new_3d(depth, rows, cols)?)
}
