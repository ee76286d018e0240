//! Geodesic distance engines.
//!
//! Given an intensity image and a seed mask, compute for every cell the
//! minimal accumulated edge cost to the nearest seed, where a step's cost
//! blends its spatial length with the intensity difference it crosses
//! (see [`cost`]). Two algorithms are provided, each serving 2D and 3D
//! grids through one implementation:
//!
//! - [`FastMarching`]: wavefront propagation with an indexed heap. Exact
//!   on the lattice.
//! - [`RasterScan`]: alternating forward/backward raster sweeps for a
//!   fixed number of iterations. Approximate, never below the exact value.
//!
//! Both implement [`GeodesicTransform`]. The flat-buffer functions in
//! [`ops`] mirror the four classic entry points.
//!
//! All engines are single-threaded, synchronous and hold no global
//! state; working storage lives only for the duration of one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cost;
pub mod error;
pub mod fast_marching;
pub mod heap;
pub mod metrics;
pub mod ops;
pub mod raster_scan;
pub mod state;
pub mod transform;

pub use config::{ConfigError, Neighbourhood};
pub use cost::{CostModel, EdgeCost};
pub use error::TransformError;
pub use fast_marching::{FastMarching, FastMarchingBuilder};
pub use heap::{HeapUpdate, IndexedHeap};
pub use metrics::TransformMetrics;
pub use ops::{
    geodesic2d_fast_marching, geodesic2d_raster_scan, geodesic3d_fast_marching,
    geodesic3d_raster_scan,
};
pub use raster_scan::{RasterScan, RasterScanBuilder};
pub use state::CellState;
pub use transform::GeodesicTransform;
