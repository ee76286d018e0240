//! Neighbourhood connectivity choices.

use smallvec::SmallVec;
use std::fmt;

/// Which lattice neighbours a cell exchanges distance with.
///
/// Every offset has components in `{-1, 0, 1}`. The connectivities differ
/// in how many axes an offset may move along at once: face neighbours
/// only, face and edge neighbours, or all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// 2D, cardinal neighbours only.
    Four,
    /// 2D, cardinal plus diagonal neighbours.
    Eight,
    /// 3D, face neighbours only.
    Six,
    /// 3D, face and edge neighbours.
    Eighteen,
    /// 3D, face, edge and corner neighbours.
    TwentySix,
}

impl Connectivity {
    /// Default connectivity for a grid rank: [`Eight`](Self::Eight) in 2D,
    /// [`TwentySix`](Self::TwentySix) in 3D. `None` for other ranks.
    pub fn default_for(ndim: usize) -> Option<Self> {
        match ndim {
            2 => Some(Self::Eight),
            3 => Some(Self::TwentySix),
            _ => None,
        }
    }

    /// Grid rank this connectivity applies to.
    pub fn ndim(self) -> usize {
        match self {
            Self::Four | Self::Eight => 2,
            Self::Six | Self::Eighteen | Self::TwentySix => 3,
        }
    }

    /// Number of neighbours of an interior cell.
    pub fn degree(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Six => 6,
            Self::Eighteen => 18,
            Self::TwentySix => 26,
        }
    }

    /// Maximum number of axes a single offset may change.
    fn max_moving_axes(self) -> usize {
        match self {
            Self::Four | Self::Six => 1,
            Self::Eight | Self::Eighteen => 2,
            Self::TwentySix => 3,
        }
    }

    /// Offsets as `[dz, dy, dx]`, in ascending lexicographic order.
    ///
    /// 2D connectivities never move along `dz`. Because the order is
    /// lexicographic and the set is symmetric, the first half of the list
    /// points to cells that precede the centre in row-major order.
    pub(crate) fn offsets(self) -> SmallVec<[[isize; 3]; 26]> {
        let planar = self.ndim() == 2;
        let mut out = SmallVec::new();
        for dz in -1isize..=1 {
            if planar && dz != 0 {
                continue;
            }
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    let moving = [dz, dy, dx].iter().filter(|&&d| d != 0).count();
                    if moving == 0 || moving > self.max_moving_axes() {
                        continue;
                    }
                    out.push([dz, dy, dx]);
                }
            }
        }
        out
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connected", self.degree())
    }
}
