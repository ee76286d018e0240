//! Owned distance-map output.

use crate::error::GridError;
use crate::shape::GridShape;
use crate::view::GridViewMut;

/// A dense distance map owned by the caller.
///
/// Cells that no seed can reach hold `f32::INFINITY`; seed cells hold
/// exactly `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMap {
    shape: GridShape,
    data: Vec<f32>,
}

impl DistanceMap {
    /// Allocate a map of the given shape with every cell unreached.
    pub fn unreached(shape: GridShape) -> Self {
        Self {
            data: vec![f32::INFINITY; shape.cell_count()],
            shape,
        }
    }

    /// Take ownership of an existing buffer.
    pub fn from_vec(data: Vec<f32>, shape: GridShape) -> Result<Self, GridError> {
        if data.len() != shape.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: shape.cell_count(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// The map's shape.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Distance at a caller-facing coordinate.
    pub fn get(&self, coord: &[usize]) -> Option<f32> {
        self.shape.index_of(coord).map(|i| self.data[i])
    }

    /// Row-major distances.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Writable view for handing the map to an engine.
    pub fn view_mut(&mut self) -> GridViewMut<'_, f32> {
        GridViewMut::from_checked(&mut self.data, self.shape)
    }

    /// Consume the map, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Number of cells with a finite distance.
    pub fn reached_count(&self) -> usize {
        self.data.iter().filter(|d| d.is_finite()).count()
    }

    /// Largest finite distance, or `None` if nothing was reached.
    pub fn max_finite(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f32| m.max(d))))
    }
}
