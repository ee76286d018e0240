//! Geodist: geodesic distance transforms over 2D and 3D intensity grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! geodist sub-crates. For most users, adding `geodist` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use geodist::prelude::*;
//!
//! // A 5x5 uniform image with a single seed in the top-left corner.
//! let shape = GridShape::new_2d(5, 5).unwrap();
//! let image = vec![1.0f32; 25];
//! let mut seeds = vec![0u8; 25];
//! seeds[0] = 1;
//!
//! let image = GridView::new(&image[..], shape).unwrap();
//! let seeds = GridView::new(&seeds[..], shape).unwrap();
//!
//! let engine = FastMarching::builder()
//!     .connectivity(Connectivity::Eight)
//!     .lambda(1.0)
//!     .build()
//!     .unwrap();
//! let (map, metrics) = engine.transform(&image, &seeds).unwrap();
//!
//! let corner = map.get(&[4, 4]).unwrap();
//! assert!((corner - 4.0 * std::f32::consts::SQRT_2).abs() < 1e-5);
//! assert_eq!(metrics.reached, 25);
//! ```
//!
//! The flat-buffer entry points are available too:
//!
//! ```rust
//! let image = [0.0f32; 6];
//! let seeds = [1u8, 0, 0, 0, 0, 0];
//! let d = geodist::geodesic2d_raster_scan(&image, &seeds, 2, 3, 1.0, 4).unwrap();
//! assert_eq!(d[2], 2.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `geodist-core` | Shapes, grid views, distance maps |
//! | [`space`] | `geodist-space` | Connectivity, spacing, neighbour tables |
//! | [`engine`] | `geodist-engine` | Cost models, engines, flat-buffer entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid shapes, borrowed views and distance maps (`geodist-core`).
pub use geodist_core as types;

/// Neighbourhoods and physical spacing (`geodist-space`).
///
/// Provides [`space::Connectivity`], [`space::Spacing`] and the
/// [`space::NeighbourTable`] both engines consume.
pub use geodist_space as space;

/// Distance engines (`geodist-engine`).
///
/// [`engine::FastMarching`] for exact lattice distances,
/// [`engine::RasterScan`] for iterative sweeps.
pub use geodist_engine as engine;

pub use geodist_engine::{
    geodesic2d_fast_marching, geodesic2d_raster_scan, geodesic3d_fast_marching,
    geodesic3d_raster_scan,
};

/// Common imports for typical geodist usage.
///
/// ```rust
/// use geodist::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use geodist_core::{DistanceMap, GridShape, GridView, GridViewMut, ImageView, SeedView};

    // Space
    pub use geodist_space::{Connectivity, Spacing};

    // Engines
    pub use geodist_engine::{
        CostModel, EdgeCost, FastMarching, GeodesicTransform, RasterScan, TransformMetrics,
    };

    // Errors
    pub use geodist_core::GridError;
    pub use geodist_engine::{ConfigError, TransformError};
    pub use geodist_space::SpaceError;
}
