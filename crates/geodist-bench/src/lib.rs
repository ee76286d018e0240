//! Benchmark profiles for the geodist distance engines.
//!
//! Provides pre-built fixtures for benchmarking:
//!
//! - [`reference_profile_2d`]: 256x256 noise image (64K cells), 8 seeds
//! - [`reference_profile_3d`]: 64x64x64 noise volume (256K cells), 8 seeds
//! - [`stress_profile_2d`]: 1024x1024 noise image (1M cells), 32 seeds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geodist_engine::{FastMarching, RasterScan};
use geodist_test_utils::{Fixture, FixtureBuilder};

/// Build a reference 2D benchmark fixture: 256x256 grid (64K cells).
pub fn reference_profile_2d(seed: u64) -> Fixture {
    FixtureBuilder::new_2d(256, 256).random(seed, 10.0, 8)
}

/// Build a reference 3D benchmark fixture: 64x64x64 grid (256K cells).
pub fn reference_profile_3d(seed: u64) -> Fixture {
    FixtureBuilder::new_3d(64, 64, 64).random(seed, 10.0, 8)
}

/// Build a stress 2D benchmark fixture: 1024x1024 grid (~1M cells).
///
/// Same noise as [`reference_profile_2d`] at 16x the cell count.
pub fn stress_profile_2d(seed: u64) -> Fixture {
    FixtureBuilder::new_2d(1024, 1024).random(seed, 10.0, 32)
}

/// The engine pair every benchmark compares, with default settings.
pub fn default_engines() -> (FastMarching, RasterScan) {
    (FastMarching::default(), RasterScan::default())
}
