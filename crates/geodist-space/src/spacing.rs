//! Per-axis physical grid spacing.

use crate::connectivity::Connectivity;
use crate::error::SpaceError;

/// Physical distance between adjacent cells along each axis.
///
/// Stored padded to a volume `[sz, sy, sx]`; 2D spacings carry `sz = 1`,
/// which is never used because planar offsets do not move along `z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    ndim: usize,
    volume: [f32; 3],
}

impl Spacing {
    /// Unit spacing for a 2D grid.
    pub fn unit_2d() -> Self {
        Self {
            ndim: 2,
            volume: [1.0; 3],
        }
    }

    /// Unit spacing for a 3D grid.
    pub fn unit_3d() -> Self {
        Self {
            ndim: 3,
            volume: [1.0; 3],
        }
    }

    /// Unit spacing matching the rank of `connectivity`.
    pub fn unit_for(connectivity: Connectivity) -> Self {
        match connectivity.ndim() {
            2 => Self::unit_2d(),
            _ => Self::unit_3d(),
        }
    }

    /// Spacing for a 2D grid: `(row_spacing, col_spacing)`.
    pub fn new_2d(sy: f32, sx: f32) -> Result<Self, SpaceError> {
        Self::from_axes(&[sy, sx])
    }

    /// Spacing for a 3D grid: `(slice_spacing, row_spacing, col_spacing)`.
    pub fn new_3d(sz: f32, sy: f32, sx: f32) -> Result<Self, SpaceError> {
        Self::from_axes(&[sz, sy, sx])
    }

    fn from_axes(axes: &[f32]) -> Result<Self, SpaceError> {
        for (axis, &value) in axes.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpaceError::InvalidSpacing { axis, value });
            }
        }
        let mut volume = [1.0f32; 3];
        volume[3 - axes.len()..].copy_from_slice(axes);
        Ok(Self {
            ndim: axes.len(),
            volume,
        })
    }

    /// Grid rank the spacing was declared for.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Caller-facing spacing values.
    pub fn axes(&self) -> &[f32] {
        &self.volume[3 - self.ndim..]
    }

    /// Euclidean length of a `[dz, dy, dx]` step under this spacing.
    pub fn step_length(&self, delta: [isize; 3]) -> f32 {
        delta
            .iter()
            .zip(self.volume.iter())
            .map(|(&d, &s)| {
                let v = d as f32 * s;
                v * v
            })
            .sum::<f32>()
            .sqrt()
    }
}
