//! The [`GeodesicTransform`] trait.
//!
//! Engines are stateless configured operators: the same instance can be
//! applied to any number of grids, of either rank, from any thread.

use std::time::Instant;

use geodist_core::{count_seeds, is_seed, DistanceMap, GridViewMut, ImageView, SeedView};
use geodist_space::ResolvedNeighbours;

use crate::config::Neighbourhood;
use crate::error::TransformError;
use crate::metrics::TransformMetrics;

/// A distance transform from a seed mask over an intensity image.
///
/// # Contract
///
/// - `transform_into()` MUST be deterministic: identical inputs produce
///   bit-identical outputs.
/// - Every seed cell ends at exactly `0.0`; every other cell ends at a
///   finite non-negative distance or `f32::INFINITY` if unreachable.
/// - `&self`: engines hold configuration only, no per-call state.
///
/// # Object safety
///
/// This trait is object-safe; callers may hold engines as
/// `Box<dyn GeodesicTransform>` to switch algorithms at runtime.
///
/// # Examples
///
/// ```
/// use geodist_core::{GridShape, GridView};
/// use geodist_engine::{FastMarching, GeodesicTransform, RasterScan};
///
/// let shape = GridShape::new_2d(3, 3).unwrap();
/// let image = [1.0f32; 9];
/// let mut seeds = [0u8; 9];
/// seeds[4] = 1;
/// let image = GridView::new(&image[..], shape).unwrap();
/// let seeds = GridView::new(&seeds[..], shape).unwrap();
///
/// let engines: Vec<Box<dyn GeodesicTransform>> =
///     vec![Box::new(FastMarching::default()), Box::new(RasterScan::default())];
/// for engine in &engines {
///     let (map, _) = engine.transform(&image, &seeds).unwrap();
///     assert_eq!(map.get(&[1, 1]), Some(0.0));
///     assert_eq!(map.get(&[1, 2]), Some(1.0));
/// }
/// ```
pub trait GeodesicTransform: Send + Sync {
    /// Human-readable engine name for reporting.
    fn name(&self) -> &str;

    /// Compute distances into a caller-owned output buffer.
    ///
    /// `image`, `seeds` and `out` must share one shape.
    fn transform_into(
        &self,
        image: &ImageView<'_>,
        seeds: &SeedView<'_>,
        out: &mut GridViewMut<'_, f32>,
    ) -> Result<TransformMetrics, TransformError>;

    /// Compute distances into a freshly allocated [`DistanceMap`].
    fn transform(
        &self,
        image: &ImageView<'_>,
        seeds: &SeedView<'_>,
    ) -> Result<(DistanceMap, TransformMetrics), TransformError> {
        let mut map = DistanceMap::unreached(*image.shape());
        let metrics = self.transform_into(image, seeds, &mut map.view_mut())?;
        Ok((map, metrics))
    }
}

/// Shared prologue for both engines: check shapes, resolve neighbours and
/// initialise the output to `0` at seeds and `+inf` elsewhere.
pub(crate) fn prepare(
    neighbourhood: &Neighbourhood,
    image: &ImageView<'_>,
    seeds: &SeedView<'_>,
    out: &mut GridViewMut<'_, f32>,
) -> Result<(ResolvedNeighbours, TransformMetrics), TransformError> {
    image.ensure_same_shape(seeds.shape())?;
    image.ensure_same_shape(out.shape())?;
    let neighbours = neighbourhood.resolve(image.shape())?;

    for (d, &s) in out.as_mut_slice().iter_mut().zip(seeds.as_slice()) {
        *d = if is_seed(s) { 0.0 } else { f32::INFINITY };
    }

    let metrics = TransformMetrics {
        cells: image.len(),
        seeds: count_seeds(seeds),
        ..TransformMetrics::default()
    };
    Ok((neighbours, metrics))
}

/// Shared epilogue: count reached cells and record elapsed time.
pub(crate) fn finish(metrics: &mut TransformMetrics, out: &[f32], start: Instant) {
    metrics.reached = out.iter().filter(|d| d.is_finite()).count();
    metrics.elapsed_us = start.elapsed().as_micros() as u64;
}
