//! Test utilities for geodist development.
//!
//! Provides fixture grids ([`fixtures`]) and a brute-force reference
//! shortest-path solver ([`reference`]) that tests compare the engines
//! against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{Fixture, FixtureBuilder};
pub use reference::reference_distances;

/// Assert two distance buffers agree within `tol`, treating matching
/// infinities as equal.
pub fn assert_distances_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        if a.is_infinite() || e.is_infinite() {
            assert_eq!(a, e, "cell {i}: got {a}, expected {e}");
            continue;
        }
        assert!(
            (a - e).abs() <= tol * e.abs().max(1.0),
            "cell {i}: got {a}, expected {e} (tol {tol})"
        );
    }
}
