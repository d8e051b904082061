//! The single entry point: mask + arrival direction → successor set.

use crate::cardinal::cardinal_dir_set;
use crate::diagonal::diagonal_dir_set;
use crate::direction::Dir;
use crate::dirset::DirSet;
use crate::mask::NeighborMask;

/// Canonical successor directions for a node reached travelling `dir` with
/// neighbourhood `mask`.
///
/// Pure and total: every one of the 256 × 8 inputs has a defined result,
/// including the empty set for dead ends. Rule logic differs by direction
/// kind; see [`crate::cardinal`] and [`crate::diagonal`].
pub fn evaluate(mask: NeighborMask, dir: Dir) -> DirSet {
    if dir.is_cardinal() {
        cardinal_dir_set(mask, dir)
    } else {
        diagonal_dir_set(mask, dir)
    }
}
