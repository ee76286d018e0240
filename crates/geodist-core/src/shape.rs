//! Grid shapes and row-major index mapping.
//!
//! A [`GridShape`] describes a dense 2D `(rows, cols)` or 3D
//! `(depth, rows, cols)` grid. Internally every shape is stored as a
//! volume `[depth, rows, cols]`, with `depth == 1` for 2D grids, so that a
//! single engine can walk both dimensionalities with the same index
//! arithmetic. Caller-facing accessors ([`extents`](GridShape::extents),
//! [`index_of`](GridShape::index_of), [`coord_of`](GridShape::coord_of))
//! speak in the grid's own rank.

use smallvec::SmallVec;
use std::fmt;

use crate::error::GridError;

/// Highest supported grid rank.
pub const MAX_NDIM: usize = 3;

/// Multi-index into a grid, in caller-facing axis order.
///
/// `[row, col]` for 2D grids and `[slice, row, col]` for 3D grids.
pub type Coord = SmallVec<[usize; MAX_NDIM]>;

/// Dimensions of a dense, row-major 2D or 3D grid.
///
/// # Examples
///
/// ```
/// use geodist_core::GridShape;
///
/// let shape = GridShape::new_2d(4, 5).unwrap();
/// assert_eq!(shape.cell_count(), 20);
/// assert_eq!(shape.index_of(&[1, 2]), Some(7));
/// assert_eq!(shape.coord_of(7).unwrap().as_slice(), &[1, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    ndim: usize,
    /// Always `[depth, rows, cols]`; `depth == 1` for 2D grids.
    volume: [usize; MAX_NDIM],
}

impl GridShape {
    /// Create a 2D shape with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyExtent)` if either extent is zero and
    /// `Err(GridError::SizeOverflow)` if the cell count overflows.
    pub fn new_2d(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_extents(&[rows, cols])
    }

    /// Create a 3D shape with `depth * rows * cols` cells.
    pub fn new_3d(depth: usize, rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_extents(&[depth, rows, cols])
    }

    /// Create a shape from caller-facing extents (2 or 3 values).
    pub fn from_extents(extents: &[usize]) -> Result<Self, GridError> {
        let ndim = extents.len();
        if ndim != 2 && ndim != 3 {
            return Err(GridError::UnsupportedRank { ndim });
        }
        if let Some(axis) = extents.iter().position(|&e| e == 0) {
            return Err(GridError::EmptyExtent { axis });
        }
        extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or(GridError::SizeOverflow)?;

        let mut volume = [1usize; MAX_NDIM];
        volume[MAX_NDIM - ndim..].copy_from_slice(extents);
        Ok(Self { ndim, volume })
    }

    /// Number of dimensions (2 or 3).
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Caller-facing extents: `[rows, cols]` or `[depth, rows, cols]`.
    pub fn extents(&self) -> &[usize] {
        &self.volume[MAX_NDIM - self.ndim..]
    }

    /// Extents padded to a volume: `[depth, rows, cols]`.
    pub fn volume(&self) -> [usize; MAX_NDIM] {
        self.volume
    }

    /// Number of slices along the slowest axis (1 for 2D grids).
    pub fn depth(&self) -> usize {
        self.volume[0]
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.volume[1]
    }

    /// Number of columns (fastest-varying axis).
    pub fn cols(&self) -> usize {
        self.volume[2]
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.volume.iter().product()
    }

    /// Row-major strides of the padded volume, in cells.
    pub fn strides(&self) -> [usize; MAX_NDIM] {
        let [_, rows, cols] = self.volume;
        [rows * cols, cols, 1]
    }

    /// Flat index of a caller-facing coordinate, or `None` if the
    /// coordinate has the wrong rank or lies outside the grid.
    pub fn index_of(&self, coord: &[usize]) -> Option<usize> {
        if coord.len() != self.ndim {
            return None;
        }
        let mut v = [0usize; MAX_NDIM];
        v[MAX_NDIM - self.ndim..].copy_from_slice(coord);
        if v.iter().zip(self.volume.iter()).any(|(&c, &e)| c >= e) {
            return None;
        }
        Some(self.volume_index(v))
    }

    /// Caller-facing coordinate of a flat index, or `None` if out of range.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        let v = self.volume_coord(index);
        Some(v[MAX_NDIM - self.ndim..].iter().copied().collect())
    }

    /// Flat index of an in-bounds volume coordinate `[z, y, x]`.
    #[inline]
    pub fn volume_index(&self, v: [usize; MAX_NDIM]) -> usize {
        let [_, rows, cols] = self.volume;
        (v[0] * rows + v[1]) * cols + v[2]
    }

    /// Volume coordinate `[z, y, x]` of an in-range flat index.
    #[inline]
    pub fn volume_coord(&self, index: usize) -> [usize; MAX_NDIM] {
        let [_, rows, cols] = self.volume;
        let x = index % cols;
        let yz = index / cols;
        [yz / rows, yz % rows, x]
    }

    /// Whether a signed volume coordinate lies inside the grid.
    #[inline]
    pub fn contains_signed(&self, v: [isize; MAX_NDIM]) -> bool {
        v.iter()
            .zip(self.volume.iter())
            .all(|(&c, &e)| c >= 0 && (c as usize) < e)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in self.extents() {
            if !first {
                write!(f, "x")?;
            }
            write!(f, "{e}")?;
            first = false;
        }
        Ok(())
    }
}
