//! Brute-force reference shortest-path solver.
//!
//! A textbook lazy-deletion Dijkstra over `std::collections::BinaryHeap`,
//! sharing nothing with the engines except the neighbour table. Used as an
//! oracle: Fast Marching must match it, Raster Scan must never undercut it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use geodist_core::GridShape;
use geodist_space::{NeighbourTable, ResolvedNeighbours};

/// An f32 wrapper ordered with `total_cmp`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrdF32(f32);

impl Eq for OrdF32 {}

impl PartialOrd for OrdF32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF32 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shortest accumulated edge cost from every cell to the nearest seed.
///
/// `edge_cost(step_length, i_p, i_q)` prices a single step.
pub fn reference_distances(
    shape: &GridShape,
    table: &NeighbourTable,
    image: &[f32],
    seeds: &[u8],
    edge_cost: impl Fn(f32, f32, f32) -> f32,
) -> Vec<f32> {
    let neighbours = ResolvedNeighbours::for_shape(table, shape).expect("table fits shape");
    let mut dist = vec![f32::INFINITY; shape.cell_count()];
    let mut heap = BinaryHeap::new();
    for (i, &s) in seeds.iter().enumerate() {
        if s != 0 {
            dist[i] = 0.0;
            heap.push(Reverse((OrdF32(0.0), i)));
        }
    }
    while let Some(Reverse((OrdF32(d), p))) = heap.pop() {
        if d > dist[p] {
            continue;
        }
        for (q, step) in neighbours.neighbours_of(p) {
            let candidate = d + edge_cost(step, image[p], image[q]);
            if candidate < dist[q] {
                dist[q] = candidate;
                heap.push(Reverse((OrdF32(candidate), q)));
            }
        }
    }
    dist
}
