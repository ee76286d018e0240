//! Per-cell Fast Marching state.

use std::collections::TryReserveError;

/// Lifecycle of a cell during Fast Marching.
///
/// `Unvisited -> Trial -> Frozen`; `Frozen` is terminal. Seeds start
/// `Frozen`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum CellState {
    /// Not yet reached by the wavefront; distance is `+inf`.
    #[default]
    Unvisited,
    /// On the wavefront with a tentative distance.
    Trial,
    /// Distance is final.
    Frozen,
}

/// Allocate a flat state array with every cell [`CellState::Unvisited`].
pub fn try_state_array(cells: usize) -> Result<Vec<CellState>, TryReserveError> {
    let mut states = Vec::new();
    states.try_reserve_exact(cells)?;
    states.resize(cells, CellState::Unvisited);
    Ok(states)
}
