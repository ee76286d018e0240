//! Lattice connectivity for geodist distance engines.
//!
//! This crate turns a dimensionality and connectivity choice into a
//! [`NeighbourTable`]: the fixed list of neighbour offsets, each with its
//! spatial step length under an optional per-axis [`Spacing`]. The table
//! is split into two causal halves for raster sweeps and can be resolved
//! against a concrete [`GridShape`](geodist_core::GridShape) into flat
//! index deltas with [`ResolvedNeighbours`].
//!
//! # Connectivities
//!
//! - 2D: [`Connectivity::Four`], [`Connectivity::Eight`]
//! - 3D: [`Connectivity::Six`], [`Connectivity::Eighteen`],
//!   [`Connectivity::TwentySix`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod error;
pub mod neighbour;
pub mod spacing;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::Connectivity;
pub use error::SpaceError;
pub use neighbour::{NeighbourOffset, NeighbourTable, ResolvedNeighbours, ResolvedOffset};
pub use spacing::Spacing;
