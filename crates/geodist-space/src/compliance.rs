//! Neighbour-table compliance test helpers.
//!
//! These functions verify that a [`NeighbourTable`] satisfies the
//! invariants the distance engines rely on. Reused across every
//! connectivity in the test modules.

use crate::neighbour::NeighbourTable;
use indexmap::IndexSet;

/// Assert that no offset appears twice and none is the zero offset.
pub fn assert_offsets_unique(table: &NeighbourTable) {
    let mut seen = IndexSet::new();
    for o in table.offsets() {
        assert_ne!(o.delta, [0, 0, 0], "zero offset in {}", table.connectivity());
        assert!(
            seen.insert(o.delta),
            "duplicate offset {:?} in {}",
            o.delta,
            table.connectivity()
        );
    }
    assert_eq!(seen.len(), table.connectivity().degree());
}

/// Assert that every offset has its negation in the table with the same
/// step length.
pub fn assert_offsets_symmetric(table: &NeighbourTable) {
    for o in table.offsets() {
        let neg = [-o.delta[0], -o.delta[1], -o.delta[2]];
        let twin = table
            .offsets()
            .iter()
            .find(|t| t.delta == neg)
            .unwrap_or_else(|| panic!("offset {:?} has no opposite", o.delta));
        assert!(
            (twin.distance - o.distance).abs() < f32::EPSILON,
            "asymmetric step length for {:?}",
            o.delta
        );
    }
}

/// Assert that the causal halves partition the table evenly and that each
/// half holds exactly the opposites of the other.
pub fn assert_causal_halves_partition(table: &NeighbourTable) {
    let back: IndexSet<[isize; 3]> = table.causal_backward().map(|o| o.delta).collect();
    let fwd: IndexSet<[isize; 3]> = table.causal_forward().map(|o| o.delta).collect();
    assert_eq!(back.len() + fwd.len(), table.len());
    assert_eq!(back.len(), fwd.len());
    for d in &back {
        assert!(fwd.contains(&[-d[0], -d[1], -d[2]]));
    }
}

/// Assert that step lengths are positive and equal the Euclidean norm for
/// unit spacing.
pub fn assert_step_lengths_positive(table: &NeighbourTable) {
    for o in table.offsets() {
        assert!(o.distance > 0.0, "non-positive step for {:?}", o.delta);
        assert!(o.distance.is_finite());
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(table: &NeighbourTable) {
    assert_offsets_unique(table);
    assert_offsets_symmetric(table);
    assert_causal_halves_partition(table);
    assert_step_lengths_positive(table);
}
