//! Neighbour offset tables and their resolution against a grid shape.

use geodist_core::GridShape;
use smallvec::SmallVec;

use crate::connectivity::Connectivity;
use crate::error::SpaceError;
use crate::spacing::Spacing;

/// One neighbour direction and the spatial length of a step along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighbourOffset {
    /// Offset as `[dz, dy, dx]`; `dz == 0` for 2D connectivities.
    pub delta: [isize; 3],
    /// Euclidean step length, scaled by the grid spacing.
    pub distance: f32,
}

impl NeighbourOffset {
    /// Whether the neighbour precedes the centre cell in row-major order.
    pub fn is_backward(&self) -> bool {
        self.delta
            .iter()
            .find(|&&d| d != 0)
            .is_some_and(|&d| d < 0)
    }
}

/// Neighbour offsets for one connectivity and spacing.
///
/// Built once per transform and shared by every cell. Offsets are kept in
/// ascending lexicographic `[dz, dy, dx]` order, so iteration order (and
/// therefore every engine's floating-point evaluation order) is fixed.
///
/// # Examples
///
/// ```
/// use geodist_space::{Connectivity, NeighbourTable, Spacing};
///
/// let table = NeighbourTable::new(Connectivity::Eight, Spacing::unit_2d()).unwrap();
/// assert_eq!(table.len(), 8);
/// assert_eq!(table.causal_backward().count(), 4);
/// assert_eq!(table.causal_forward().count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NeighbourTable {
    connectivity: Connectivity,
    spacing: Spacing,
    offsets: SmallVec<[NeighbourOffset; 26]>,
}

impl NeighbourTable {
    /// Build the table, checking that `spacing` has the connectivity's rank.
    pub fn new(connectivity: Connectivity, spacing: Spacing) -> Result<Self, SpaceError> {
        if spacing.ndim() != connectivity.ndim() {
            return Err(SpaceError::SpacingRankMismatch {
                spacing: spacing.ndim(),
                ndim: connectivity.ndim(),
            });
        }
        let offsets = connectivity
            .offsets()
            .into_iter()
            .map(|delta| NeighbourOffset {
                delta,
                distance: spacing.step_length(delta),
            })
            .collect();
        Ok(Self {
            connectivity,
            spacing,
            offsets,
        })
    }

    /// The connectivity the table was built for.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// The spacing the step lengths were scaled by.
    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: every connectivity has neighbours.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// All offsets.
    pub fn offsets(&self) -> &[NeighbourOffset] {
        &self.offsets
    }

    /// Offsets to cells visited earlier in a forward raster sweep.
    pub fn causal_backward(&self) -> impl Iterator<Item = &NeighbourOffset> + '_ {
        self.offsets.iter().filter(|o| o.is_backward())
    }

    /// Offsets to cells visited earlier in a backward raster sweep.
    pub fn causal_forward(&self) -> impl Iterator<Item = &NeighbourOffset> + '_ {
        self.offsets.iter().filter(|o| !o.is_backward())
    }

    /// Check the table against a grid of the given shape.
    pub fn check_shape(&self, shape: &GridShape) -> Result<(), SpaceError> {
        if shape.ndim() != self.connectivity.ndim() {
            return Err(SpaceError::ConnectivityMismatch {
                connectivity: self.connectivity,
                ndim: shape.ndim(),
            });
        }
        Ok(())
    }
}

/// A neighbour offset bound to a concrete grid shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedOffset {
    /// Offset as `[dz, dy, dx]`.
    pub delta: [isize; 3],
    /// Change in flat row-major index.
    pub flat: isize,
    /// Spatial step length.
    pub distance: f32,
}

impl ResolvedOffset {
    /// Flat index of the neighbour of the cell at volume coordinate `v`
    /// (flat index `index`), or `None` when the step leaves the grid.
    #[inline]
    pub fn apply(&self, shape: &GridShape, v: [usize; 3], index: usize) -> Option<usize> {
        let ext = shape.volume();
        for axis in 0..3 {
            let c = v[axis] as isize + self.delta[axis];
            if c < 0 || c as usize >= ext[axis] {
                return None;
            }
        }
        Some((index as isize + self.flat) as usize)
    }
}

/// A [`NeighbourTable`] resolved into flat index deltas for one shape,
/// split into the two causal halves used by raster sweeps.
#[derive(Clone, Debug)]
pub struct ResolvedNeighbours {
    shape: GridShape,
    all: SmallVec<[ResolvedOffset; 26]>,
    backward: SmallVec<[ResolvedOffset; 13]>,
    forward: SmallVec<[ResolvedOffset; 13]>,
}

impl ResolvedNeighbours {
    /// Resolve `table` against `shape`.
    ///
    /// Returns `Err(SpaceError::ConnectivityMismatch)` if the table's
    /// connectivity does not have the shape's rank.
    pub fn for_shape(table: &NeighbourTable, shape: &GridShape) -> Result<Self, SpaceError> {
        table.check_shape(shape)?;
        let strides = shape.strides();
        let resolve = |o: &NeighbourOffset| ResolvedOffset {
            delta: o.delta,
            flat: o
                .delta
                .iter()
                .zip(strides.iter())
                .map(|(&d, &s)| d * s as isize)
                .sum(),
            distance: o.distance,
        };
        Ok(Self {
            shape: *shape,
            all: table.offsets().iter().map(resolve).collect(),
            backward: table.causal_backward().map(resolve).collect(),
            forward: table.causal_forward().map(resolve).collect(),
        })
    }

    /// Shape the offsets were resolved for.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Every offset.
    pub fn all(&self) -> &[ResolvedOffset] {
        &self.all
    }

    /// Offsets with negative flat delta (forward-sweep causal half).
    pub fn backward(&self) -> &[ResolvedOffset] {
        &self.backward
    }

    /// Offsets with positive flat delta (backward-sweep causal half).
    pub fn forward(&self) -> &[ResolvedOffset] {
        &self.forward
    }

    /// In-bounds neighbours of a cell as `(flat_index, step_length)`.
    pub fn neighbours_of(&self, index: usize) -> SmallVec<[(usize, f32); 26]> {
        let v = self.shape.volume_coord(index);
        self.all
            .iter()
            .filter_map(|o| o.apply(&self.shape, v, index).map(|n| (n, o.distance)))
            .collect()
    }
}
