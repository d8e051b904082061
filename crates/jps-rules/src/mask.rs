//! 8-bit obstruction masks over the compass neighbours of a cell.

use std::fmt;

use crate::direction::Dir;

/// Blocked/open status of the eight neighbours of a grid cell.
///
/// Bit `i` set means the neighbour in direction `i` (see [`Dir::bit`]) is
/// blocked; clear means open. All 256 values are meaningful.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborMask(pub u8);

impl NeighborMask {
    /// No neighbour blocked.
    pub const EMPTY: Self = Self(0);

    /// Every neighbour blocked.
    pub const FULL: Self = Self(0xff);

    /// Mask blocking exactly the given directions.
    pub fn blocking(dirs: &[Dir]) -> Self {
        let mut bits = 0u8;
        for &dir in dirs {
            bits |= 1 << dir.bit();
        }
        Self(bits)
    }

    /// Raw bitfield.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the neighbour in `dir` is blocked.
    #[inline]
    pub const fn blocked(self, dir: Dir) -> bool {
        self.0 & (1 << dir.bit()) != 0
    }

    /// Whether the neighbour in `dir` is open.
    #[inline]
    pub const fn open(self, dir: Dir) -> bool {
        !self.blocked(dir)
    }

    /// All 256 masks in ascending order.
    pub fn all() -> impl Iterator<Item = NeighborMask> {
        (0..=u8::MAX).map(NeighborMask)
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}
