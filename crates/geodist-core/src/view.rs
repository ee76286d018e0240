//! Borrowed views over dense, row-major grid buffers.
//!
//! The distance engines never own their inputs: the intensity image and
//! seed mask arrive as [`GridView`]s and the output as a [`GridViewMut`].
//! Construction checks that the buffer length matches the shape, which is
//! the only validation the engines rely on.

use crate::error::GridError;
use crate::shape::GridShape;

/// Read-only view over a caller-owned grid buffer.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a, T> {
    data: &'a [T],
    shape: GridShape,
}

/// Read-only view over an `f32` intensity image.
pub type ImageView<'a> = GridView<'a, f32>;

/// Read-only view over a seed mask; any nonzero byte marks a seed.
pub type SeedView<'a> = GridView<'a, u8>;

impl<'a, T: Copy> GridView<'a, T> {
    /// Wrap `data` as a grid of the given shape.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `data.len()` differs from
    /// `shape.cell_count()`.
    pub fn new(data: &'a [T], shape: GridShape) -> Result<Self, GridError> {
        check_len(data.len(), &shape)?;
        Ok(Self { data, shape })
    }

    /// The grid's shape.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: shapes reject zero extents.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at a caller-facing coordinate.
    pub fn get(&self, coord: &[usize]) -> Option<T> {
        self.shape.index_of(coord).map(|i| self.data[i])
    }

    /// Check that `other` has exactly this view's shape.
    pub fn ensure_same_shape(&self, other: &GridShape) -> Result<(), GridError> {
        if &self.shape == other {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                left: self.shape,
                right: *other,
            })
        }
    }
}

/// Mutable view over a caller-owned output buffer.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    data: &'a mut [T],
    shape: GridShape,
}

impl<'a, T: Copy> GridViewMut<'a, T> {
    /// Wrap `data` as a writable grid of the given shape.
    pub fn new(data: &'a mut [T], shape: GridShape) -> Result<Self, GridError> {
        check_len(data.len(), &shape)?;
        Ok(Self { data, shape })
    }

    /// Wrap a buffer whose length is already known to match `shape`.
    pub(crate) fn from_checked(data: &'a mut [T], shape: GridShape) -> Self {
        debug_assert_eq!(data.len(), shape.cell_count());
        Self { data, shape }
    }

    /// The grid's shape.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Read access to the buffer.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// Write access to the buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Value at a caller-facing coordinate.
    pub fn get(&self, coord: &[usize]) -> Option<T> {
        self.shape.index_of(coord).map(|i| self.data[i])
    }
}

fn check_len(len: usize, shape: &GridShape) -> Result<(), GridError> {
    let expected = shape.cell_count();
    if len != expected {
        return Err(GridError::LengthMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Whether a seed-mask byte marks a zero-distance source.
#[inline]
pub fn is_seed(v: u8) -> bool {
    v != 0
}

/// Number of seed cells in a mask.
pub fn count_seeds(seeds: &SeedView<'_>) -> usize {
    seeds.as_slice().iter().filter(|&&v| is_seed(v)).count()
}
