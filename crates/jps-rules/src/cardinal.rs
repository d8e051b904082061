//! Pruning rules for cardinal arrival directions.
//!
//! When the search reaches a node travelling Down, Right, Up or Left, up to
//! five successor directions can survive pruning: the orthogonal neighbour
//! on each side, the forward diagonal on each side, and the direction of
//! travel itself. Which of them survive is decided by five JPS
//! forced-neighbour predicates; the thirteen possible outcomes are the
//! variants of [`CardinalCase`].

use crate::direction::{CardinalFrame, Dir};
use crate::dirset::DirSet;
use crate::mask::NeighborMask;
use crate::pattern::CardinalPattern;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// The five boolean predicates of a cardinal expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardinalPredicates {
    /// The neighbour directly ahead is open.
    pub straight: bool,
    /// The diagonal behind-left is blocked and the left neighbour is open.
    pub left_forced: bool,
    /// The diagonal behind-right is blocked and the right neighbour is open.
    pub right_forced: bool,
    /// `left_forced`, and the detour is realizable as a diagonal step
    /// (straight and the forward-left diagonal are both open).
    pub left_diagonal: bool,
    /// Mirror of `left_diagonal` on the right side.
    pub right_diagonal: bool,
}

impl CardinalPredicates {
    /// Evaluate the predicates for `mask` in the given frame.
    pub fn eval(mask: NeighborMask, frame: &CardinalFrame) -> Self {
        let straight = mask.open(frame.ahead);
        let left_forced = mask.blocked(frame.behind_left) && mask.open(frame.left);
        let right_forced = mask.blocked(frame.behind_right) && mask.open(frame.right);
        let left_diagonal = left_forced && straight && mask.open(frame.ahead_left);
        let right_diagonal = right_forced && straight && mask.open(frame.ahead_right);
        Self {
            straight,
            left_forced,
            right_forced,
            left_diagonal,
            right_diagonal,
        }
    }
}

// ---------------------------------------------------------------------------
// CardinalCase
// ---------------------------------------------------------------------------

/// Classification of a cardinal expansion, one variant per distinct
/// pruning outcome.
///
/// The variants are mutually exclusive and jointly exhaustive over the
/// 256 × 4 possible (mask, cardinal direction) inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardinalCase {
    /// Nothing forced: continue straight ahead.
    Ahead,
    /// Straight blocked, only the left neighbour forced.
    LeftOnly,
    /// Straight blocked, only the right neighbour forced.
    RightOnly,
    /// Left detour realizable diagonally: ahead + forward-left diagonal + left.
    LeftFan,
    /// Mirror of [`CardinalCase::LeftFan`].
    RightFan,
    /// Both diagonal detours realizable: the full five-direction fan.
    FullFan,
    /// Straight open, left forced, but the left diagonal is blocked.
    AheadLeft,
    /// Mirror of [`CardinalCase::AheadLeft`].
    AheadRight,
    /// Both neighbours forced with straight blocked.
    Flanks,
    /// Straight open, both neighbours forced, neither diagonal realizable.
    AheadFlanks,
    /// Straight open, both forced, only the left diagonal realizable.
    LeftFanRight,
    /// Straight open, both forced, only the right diagonal realizable.
    RightFanLeft,
    /// Everything relevant blocked: no forced successor.
    DeadEnd,
}

impl CardinalCase {
    /// All thirteen cases, in classification priority order.
    pub const ALL: [CardinalCase; 13] = [
        CardinalCase::Ahead,
        CardinalCase::LeftOnly,
        CardinalCase::RightOnly,
        CardinalCase::LeftFan,
        CardinalCase::RightFan,
        CardinalCase::FullFan,
        CardinalCase::AheadLeft,
        CardinalCase::AheadRight,
        CardinalCase::Flanks,
        CardinalCase::AheadFlanks,
        CardinalCase::LeftFanRight,
        CardinalCase::RightFanLeft,
        CardinalCase::DeadEnd,
    ];

    /// Select the unique case matching `p`.
    ///
    /// Checked most-specific first; several predicates can hold at once,
    /// but exactly one branch fires for every input (see the exhaustive
    /// test below).
    pub fn classify(p: CardinalPredicates) -> Self {
        let CardinalPredicates {
            straight,
            left_forced,
            right_forced,
            left_diagonal,
            right_diagonal,
        } = p;

        if straight && !left_forced && !right_forced {
            CardinalCase::Ahead
        } else if !straight && left_forced && !right_forced {
            CardinalCase::LeftOnly
        } else if !straight && !left_forced && right_forced {
            CardinalCase::RightOnly
        } else if left_diagonal && !right_forced {
            CardinalCase::LeftFan
        } else if right_diagonal && !left_forced {
            CardinalCase::RightFan
        } else if left_diagonal && right_diagonal {
            CardinalCase::FullFan
        } else if straight && left_forced && !right_forced && !left_diagonal {
            CardinalCase::AheadLeft
        } else if straight && !left_forced && right_forced && !right_diagonal {
            CardinalCase::AheadRight
        } else if !straight && left_forced && right_forced {
            CardinalCase::Flanks
        } else if straight && left_forced && right_forced && !left_diagonal && !right_diagonal {
            CardinalCase::AheadFlanks
        } else if straight && left_forced && right_forced && left_diagonal && !right_diagonal {
            CardinalCase::LeftFanRight
        } else if straight && left_forced && right_forced && !left_diagonal && right_diagonal {
            CardinalCase::RightFanLeft
        } else {
            CardinalCase::DeadEnd
        }
    }

    /// Canonical successor directions for this case in `frame`, in the
    /// canonical emission order.
    pub fn dir_set(self, frame: &CardinalFrame) -> DirSet {
        let f = frame;
        match self {
            CardinalCase::Ahead => DirSet::of(&[f.ahead]),
            CardinalCase::LeftOnly => DirSet::of(&[f.left]),
            CardinalCase::RightOnly => DirSet::of(&[f.right]),
            CardinalCase::LeftFan => DirSet::of(&[f.ahead, f.ahead_left, f.left]),
            CardinalCase::RightFan => DirSet::of(&[f.right, f.ahead_right, f.ahead]),
            CardinalCase::FullFan => {
                DirSet::of(&[f.left, f.ahead_left, f.ahead, f.ahead_right, f.right])
            }
            CardinalCase::AheadLeft => DirSet::of(&[f.ahead, f.left]),
            CardinalCase::AheadRight => DirSet::of(&[f.right, f.ahead]),
            CardinalCase::Flanks => DirSet::of(&[f.left, f.right]),
            CardinalCase::AheadFlanks => DirSet::of(&[f.right, f.ahead, f.left]),
            CardinalCase::LeftFanRight => DirSet::of(&[f.left, f.ahead_left, f.ahead, f.right]),
            CardinalCase::RightFanLeft => DirSet::of(&[f.left, f.ahead, f.ahead_right, f.right]),
            CardinalCase::DeadEnd => DirSet::EMPTY,
        }
    }

    /// Symbolic slot pattern for this case (`"012XX"` for
    /// [`CardinalCase::LeftFan`], and so on).
    pub fn pattern(self) -> CardinalPattern {
        let slots = match self {
            CardinalCase::Ahead => [false, false, true, false, false],
            CardinalCase::LeftOnly => [true, false, false, false, false],
            CardinalCase::RightOnly => [false, false, false, false, true],
            CardinalCase::LeftFan => [true, true, true, false, false],
            CardinalCase::RightFan => [false, false, true, true, true],
            CardinalCase::FullFan => [true, true, true, true, true],
            CardinalCase::AheadLeft => [true, false, true, false, false],
            CardinalCase::AheadRight => [false, false, true, false, true],
            CardinalCase::Flanks => [true, false, false, false, true],
            CardinalCase::AheadFlanks => [true, false, true, false, true],
            CardinalCase::LeftFanRight => [true, true, true, false, true],
            CardinalCase::RightFanLeft => [true, false, true, true, true],
            CardinalCase::DeadEnd => [false; 5],
        };
        CardinalPattern::new(slots)
    }
}

/// Successor set for arriving at a node along cardinal `dir` with
/// neighbourhood `mask`.
pub fn cardinal_dir_set(mask: NeighborMask, dir: Dir) -> DirSet {
    let frame = CardinalFrame::of(dir);
    CardinalCase::classify(CardinalPredicates::eval(mask, &frame)).dir_set(&frame)
}
