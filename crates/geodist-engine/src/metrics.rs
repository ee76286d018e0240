//! Per-call metrics for distance transforms.
//!
//! [`TransformMetrics`] captures timing and work counters for a single
//! transform, for profiling and for comparing the two engines.

/// Timing and work counters collected during a single transform.
///
/// Counters that do not apply to an engine stay at zero: Raster Scan never
/// touches the heap and Fast Marching never sweeps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformMetrics {
    /// Wall-clock time for the whole transform, in microseconds.
    pub elapsed_us: u64,
    /// Number of cells in the grid.
    pub cells: usize,
    /// Number of seed cells.
    pub seeds: usize,
    /// Number of cells with a finite final distance.
    pub reached: usize,
    /// Cells frozen by Fast Marching (seeds included).
    pub frozen: usize,
    /// Fast Marching heap insertions.
    pub heap_pushes: u64,
    /// Fast Marching in-place key decreases.
    pub decrease_keys: u64,
    /// Raster Scan sweeps executed (two per iteration).
    pub sweeps: u64,
    /// Candidate distances evaluated across all neighbours.
    pub relaxations: u64,
    /// Times a cell's distance was lowered.
    pub updates: u64,
}
