//! Core types for the geodist workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! dense, row-major grid abstractions every distance engine works over:
//! shapes and index mapping, borrowed views for the intensity image, seed
//! mask and output buffer, the owned [`DistanceMap`], and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance_map;
pub mod error;
pub mod shape;
pub mod view;

pub use distance_map::DistanceMap;
pub use error::GridError;
pub use shape::{Coord, GridShape, MAX_NDIM};
pub use view::{count_seeds, is_seed, GridView, GridViewMut, ImageView, SeedView};
