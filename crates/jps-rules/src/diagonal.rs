//! Pruning rules for diagonal arrival directions.
//!
//! A diagonal expansion is simpler than a cardinal one: only the two
//! orthogonal component directions and the diagonal itself are candidates,
//! and the diagonal step is legal only when both components are open
//! (no corner cutting).

use crate::direction::{DiagonalFrame, Dir};
use crate::dirset::DirSet;
use crate::mask::NeighborMask;
use crate::pattern::DiagonalPattern;

/// The three boolean predicates of a diagonal expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagonalPredicates {
    /// The first component direction is open.
    pub first_open: bool,
    /// The second component direction is open.
    pub second_open: bool,
    /// Both components and the diagonal itself are open.
    pub straight: bool,
}

impl DiagonalPredicates {
    /// Evaluate the predicates for `mask` in the given frame.
    pub fn eval(mask: NeighborMask, frame: &DiagonalFrame) -> Self {
        let first_open = mask.open(frame.first);
        let second_open = mask.open(frame.second);
        let straight = first_open && second_open && mask.open(frame.diagonal);
        Self {
            first_open,
            second_open,
            straight,
        }
    }
}

/// Classification of a diagonal expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagonalCase {
    /// Only the first component open: continue along it.
    FirstOnly,
    /// Only the second component open.
    SecondOnly,
    /// Diagonal advance possible: both components plus the diagonal.
    FullFan,
    /// Both components open but the diagonal itself blocked: no diagonal
    /// step, continue along both components.
    Flanks,
    /// Both components blocked: no forced successor.
    DeadEnd,
}

impl DiagonalCase {
    /// All five cases, in classification priority order.
    pub const ALL: [DiagonalCase; 5] = [
        DiagonalCase::FirstOnly,
        DiagonalCase::SecondOnly,
        DiagonalCase::FullFan,
        DiagonalCase::Flanks,
        DiagonalCase::DeadEnd,
    ];

    /// Select the unique case matching `p`.
    pub fn classify(p: DiagonalPredicates) -> Self {
        let DiagonalPredicates {
            first_open,
            second_open,
            straight,
        } = p;

        if first_open && !second_open {
            DiagonalCase::FirstOnly
        } else if !first_open && second_open {
            DiagonalCase::SecondOnly
        } else if straight {
            DiagonalCase::FullFan
        } else if first_open && second_open {
            DiagonalCase::Flanks
        } else {
            DiagonalCase::DeadEnd
        }
    }

    /// Canonical successor directions for this case in `frame`.
    pub fn dir_set(self, frame: &DiagonalFrame) -> DirSet {
        let f = frame;
        match self {
            DiagonalCase::FirstOnly => DirSet::of(&[f.first]),
            DiagonalCase::SecondOnly => DirSet::of(&[f.second]),
            DiagonalCase::FullFan => DirSet::of(&[f.second, f.diagonal, f.first]),
            DiagonalCase::Flanks => DirSet::of(&[f.second, f.first]),
            DiagonalCase::DeadEnd => DirSet::EMPTY,
        }
    }

    /// Symbolic slot pattern for this case (`"012"` for
    /// [`DiagonalCase::FullFan`], and so on).
    pub fn pattern(self) -> DiagonalPattern {
        let slots = match self {
            DiagonalCase::FirstOnly => [true, false, false],
            DiagonalCase::SecondOnly => [false, false, true],
            DiagonalCase::FullFan => [true, true, true],
            DiagonalCase::Flanks => [true, false, true],
            DiagonalCase::DeadEnd => [false; 3],
        };
        DiagonalPattern::new(slots)
    }
}

/// Successor set for arriving at a node along diagonal `dir` with
/// neighbourhood `mask`.
pub fn diagonal_dir_set(mask: NeighborMask, dir: Dir) -> DirSet {
    let frame = DiagonalFrame::of(dir);
    DiagonalCase::classify(DiagonalPredicates::eval(mask, &frame)).dir_set(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_down_right(mask: NeighborMask) -> DiagonalCase {
        let frame = DiagonalFrame::of(Dir::DownRight);
        DiagonalCase::classify(DiagonalPredicates::eval(mask, &frame))
    }

    #[test]
    fn open_neighbourhood_fans_out() {
        assert_eq!(classify_down_right(NeighborMask::EMPTY), DiagonalCase::FullFan);
        assert_eq!(
            diagonal_dir_set(NeighborMask::EMPTY, Dir::DownRight).as_slice(),
            &[Dir::Down, Dir::DownRight, Dir::Right]
        );
    }

    #[test]
    fn one_component_blocked_keeps_the_other() {
        // Right blocked: only the Down component survives.
        let mask = NeighborMask::blocking(&[Dir::Right]);
        assert_eq!(classify_down_right(mask), DiagonalCase::SecondOnly);
        assert_eq!(
            diagonal_dir_set(mask, Dir::DownRight).as_slice(),
            &[Dir::Down]
        );

        let mask = NeighborMask::blocking(&[Dir::Down]);
        assert_eq!(classify_down_right(mask), DiagonalCase::FirstOnly);
        assert_eq!(
            diagonal_dir_set(mask, Dir::DownRight).as_slice(),
            &[Dir::Right]
        );
    }

    #[test]
    fn blocked_diagonal_drops_the_diagonal_step() {
        let mask = NeighborMask::blocking(&[Dir::DownRight]);
        assert_eq!(classify_down_right(mask), DiagonalCase::Flanks);
        assert_eq!(
            diagonal_dir_set(mask, Dir::DownRight).as_slice(),
            &[Dir::Down, Dir::Right]
        );
    }

    #[test]
    fn both_components_blocked_is_dead_end() {
        let mask = NeighborMask::blocking(&[Dir::Down, Dir::Right]);
        assert_eq!(classify_down_right(mask), DiagonalCase::DeadEnd);
        assert!(diagonal_dir_set(mask, Dir::DownRight).is_empty());
        assert!(diagonal_dir_set(NeighborMask::FULL, Dir::DownRight).is_empty());
    }

    /// The five cases, written as full conjunctions, cover every input
    /// exactly once.
    #[test]
    fn cases_exhaustive_and_exclusive() {
        for dir in Dir::DIAGONALS {
            let frame = DiagonalFrame::of(dir);
            for mask in NeighborMask::all() {
                let p = DiagonalPredicates::eval(mask, &frame);
                let (a, b, s) = (p.first_open, p.second_open, p.straight);
                let conjunctions = [
                    a && !b,
                    !a && b,
                    s,
                    a && b && !s,
                    !a && !b,
                ];
                let matched: Vec<usize> = (0..5).filter(|&i| conjunctions[i]).collect();
                assert_eq!(
                    matched.len(),
                    1,
                    "mask {mask} dir {dir}: cases {matched:?} matched"
                );
                assert_eq!(
                    DiagonalCase::ALL[matched[0]],
                    DiagonalCase::classify(p),
                    "mask {mask} dir {dir}"
                );
            }
        }
    }
}
