//! Compass directions and the rotation frames that map structural
//! expansion roles ("ahead", "left neighbour", …) onto concrete directions.

use std::fmt;

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the eight compass directions around a grid cell.
///
/// The discriminant of each variant is its bit position in a
/// [`NeighborMask`](crate::NeighborMask). Variants are laid out in 45°
/// steps (Down → DownRight → Right → …), so rotating a direction is bit
/// arithmetic modulo 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Dir {
    Down = 0,
    DownRight = 1,
    Right = 2,
    UpRight = 3,
    Up = 4,
    UpLeft = 5,
    Left = 6,
    DownLeft = 7,
}

impl Dir {
    /// All eight directions in ascending bit order.
    ///
    /// This is also the per-mask enumeration order of the generated table.
    pub const ALL: [Dir; 8] = [
        Dir::Down,
        Dir::DownRight,
        Dir::Right,
        Dir::UpRight,
        Dir::Up,
        Dir::UpLeft,
        Dir::Left,
        Dir::DownLeft,
    ];

    /// The four cardinal directions, ascending bit order.
    pub const CARDINALS: [Dir; 4] = [Dir::Down, Dir::Right, Dir::Up, Dir::Left];

    /// The four diagonal directions, ascending bit order.
    pub const DIAGONALS: [Dir; 4] = [Dir::DownRight, Dir::UpRight, Dir::UpLeft, Dir::DownLeft];

    /// Bit position of this direction in a neighbour mask.
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Direction for bit position `bit`, or `None` if `bit > 7`.
    #[inline]
    pub const fn from_bit(bit: u8) -> Option<Dir> {
        if bit < 8 {
            Some(Self::ALL[bit as usize])
        } else {
            None
        }
    }

    /// Whether this is one of the four cardinal directions.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        self.bit() % 2 == 0
    }

    /// Whether this is one of the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Rotate by `steps` eighth-turns counterclockwise
    /// (Down → DownRight → Right → …).
    #[inline]
    pub const fn rotate(self, steps: u8) -> Dir {
        Self::ALL[((self.bit() + steps) % 8) as usize]
    }

    /// Short token used in generated table rows (`D`, `DR`, `R`, …).
    pub const fn token(self) -> &'static str {
        match self {
            Dir::Down => "D",
            Dir::DownRight => "DR",
            Dir::Right => "R",
            Dir::UpRight => "UR",
            Dir::Up => "U",
            Dir::UpLeft => "UL",
            Dir::Left => "L",
            Dir::DownLeft => "DL",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// CardinalFrame
// ---------------------------------------------------------------------------

/// Concrete directions playing each structural role when expanding along a
/// cardinal direction.
///
/// The four cardinal rule sets are identical up to rotation; this frame is
/// the rotation descriptor that lets one rule body serve all four.
/// Roles are relative to the direction of travel: `left` is the orthogonal
/// neighbour 90° counterclockwise of `ahead`, `behind_left` the diagonal
/// behind it, `ahead_left` the diagonal in front of it, and mirrored for
/// the `right` side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardinalFrame {
    pub ahead: Dir,
    pub left: Dir,
    pub right: Dir,
    pub ahead_left: Dir,
    pub ahead_right: Dir,
    pub behind_left: Dir,
    pub behind_right: Dir,
}

impl CardinalFrame {
    /// Frame for cardinal arrival direction `dir`.
    pub const fn of(dir: Dir) -> Self {
        debug_assert!(dir.is_cardinal());
        Self {
            ahead: dir,
            left: dir.rotate(2),
            right: dir.rotate(6),
            ahead_left: dir.rotate(1),
            ahead_right: dir.rotate(7),
            behind_left: dir.rotate(3),
            behind_right: dir.rotate(5),
        }
    }
}

// ---------------------------------------------------------------------------
// DiagonalFrame
// ---------------------------------------------------------------------------

/// Concrete directions playing each structural role when expanding along a
/// diagonal direction: the diagonal itself and its two orthogonal
/// components, `first` one eighth-turn counterclockwise of the diagonal and
/// `second` one eighth-turn clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagonalFrame {
    pub diagonal: Dir,
    pub first: Dir,
    pub second: Dir,
}

impl DiagonalFrame {
    /// Frame for diagonal arrival direction `dir`.
    pub const fn of(dir: Dir) -> Self {
        debug_assert!(dir.is_diagonal());
        Self {
            diagonal: dir,
            first: dir.rotate(1),
            second: dir.rotate(7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        for dir in Dir::ALL {
            assert_eq!(Dir::from_bit(dir.bit()), Some(dir));
        }
        assert_eq!(Dir::from_bit(8), None);
        assert_eq!(Dir::from_bit(255), None);
    }

    #[test]
    fn kind_partition() {
        for dir in Dir::CARDINALS {
            assert!(dir.is_cardinal());
            assert!(!dir.is_diagonal());
        }
        for dir in Dir::DIAGONALS {
            assert!(dir.is_diagonal());
            assert!(!dir.is_cardinal());
        }
    }

    #[test]
    fn rotate_wraps() {
        assert_eq!(Dir::Down.rotate(2), Dir::Right);
        assert_eq!(Dir::Left.rotate(2), Dir::Down);
        assert_eq!(Dir::DownLeft.rotate(1), Dir::Down);
        for dir in Dir::ALL {
            assert_eq!(dir.rotate(8), dir);
        }
    }

    #[test]
    fn down_frame_roles() {
        let f = CardinalFrame::of(Dir::Down);
        assert_eq!(f.ahead, Dir::Down);
        assert_eq!(f.left, Dir::Right);
        assert_eq!(f.right, Dir::Left);
        assert_eq!(f.ahead_left, Dir::DownRight);
        assert_eq!(f.ahead_right, Dir::DownLeft);
        assert_eq!(f.behind_left, Dir::UpRight);
        assert_eq!(f.behind_right, Dir::UpLeft);
    }

    #[test]
    fn right_frame_roles() {
        let f = CardinalFrame::of(Dir::Right);
        assert_eq!(f.ahead, Dir::Right);
        assert_eq!(f.left, Dir::Up);
        assert_eq!(f.right, Dir::Down);
        assert_eq!(f.ahead_left, Dir::UpRight);
        assert_eq!(f.ahead_right, Dir::DownRight);
        assert_eq!(f.behind_left, Dir::UpLeft);
        assert_eq!(f.behind_right, Dir::DownLeft);
    }

    #[test]
    fn diagonal_frame_components() {
        let f = DiagonalFrame::of(Dir::DownRight);
        assert_eq!(f.first, Dir::Right);
        assert_eq!(f.second, Dir::Down);

        let f = DiagonalFrame::of(Dir::UpLeft);
        assert_eq!(f.first, Dir::Left);
        assert_eq!(f.second, Dir::Up);
    }

    #[test]
    fn frames_are_rotations_of_each_other() {
        for (a, b) in Dir::CARDINALS.iter().zip(Dir::CARDINALS.iter().cycle().skip(1)) {
            let fa = CardinalFrame::of(*a);
            let fb = CardinalFrame::of(*b);
            assert_eq!(fa.ahead.rotate(2), fb.ahead);
            assert_eq!(fa.left.rotate(2), fb.left);
            assert_eq!(fa.behind_right.rotate(2), fb.behind_right);
        }
    }
}
