//! Ordered sets of successor directions.

use std::fmt;

use crate::direction::Dir;

/// Error building a [`DirSet`] from arbitrary input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirSetError {
    /// More than [`DirSet::MAX_LEN`] directions.
    TooLong,
    /// The same direction appeared twice.
    Duplicate(Dir),
}

impl fmt::Display for DirSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirSetError::TooLong => {
                write!(f, "direction set holds at most {} entries", DirSet::MAX_LEN)
            }
            DirSetError::Duplicate(dir) => write!(f, "duplicate direction {dir}"),
        }
    }
}

impl std::error::Error for DirSetError {}

/// Canonical ordered set of successor directions.
///
/// Holds up to five distinct directions inline (a cardinal expansion never
/// yields more). Order is the canonical emission order and is stable for
/// reproducibility; consumers of the generated table must treat the value
/// as a set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirSet {
    dirs: [Dir; Self::MAX_LEN],
    len: u8,
}

impl DirSet {
    /// Maximum number of directions in a set.
    pub const MAX_LEN: usize = 5;

    /// The empty set: no forced successor (the `Null` table row).
    pub const EMPTY: Self = Self {
        dirs: [Dir::Down; Self::MAX_LEN],
        len: 0,
    };

    /// Set holding `dirs` in order. Duplicates and entries beyond capacity
    /// are ignored; use [`DirSet::try_from`] to reject them instead.
    pub fn of(dirs: &[Dir]) -> Self {
        let mut set = Self::EMPTY;
        for &dir in dirs {
            set.push(dir);
        }
        set
    }

    /// Append `dir` unless it is already present or the set is full.
    pub fn push(&mut self, dir: Dir) {
        if self.len as usize == Self::MAX_LEN || self.contains(dir) {
            return;
        }
        self.dirs[self.len as usize] = dir;
        self.len += 1;
    }

    /// Number of directions in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `dir` is in the set.
    pub fn contains(&self, dir: Dir) -> bool {
        self.as_slice().contains(&dir)
    }

    /// The directions in canonical order.
    #[inline]
    pub fn as_slice(&self) -> &[Dir] {
        &self.dirs[..self.len as usize]
    }

    /// Iterator over the directions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Dir> + '_ {
        self.as_slice().iter().copied()
    }

    /// Bitset projection: bit `i` set iff direction `i` is in the set.
    ///
    /// The empty set maps to `0`, which no non-empty set can produce, so
    /// zero doubles as the "no forced successor" sentinel in generated
    /// tables.
    pub fn bits(&self) -> u8 {
        self.iter().fold(0, |acc, dir| acc | (1 << dir.bit()))
    }
}

impl<'a> TryFrom<&'a [Dir]> for DirSet {
    type Error = DirSetError;

    fn try_from(dirs: &'a [Dir]) -> Result<Self, DirSetError> {
        if dirs.len() > Self::MAX_LEN {
            return Err(DirSetError::TooLong);
        }
        let mut set = Self::EMPTY;
        for &dir in dirs {
            if set.contains(dir) {
                return Err(DirSetError::Duplicate(dir));
            }
            set.push(dir);
        }
        Ok(set)
    }
}

impl fmt::Display for DirSet {
    /// Generated-table row syntax: tokens joined by `_`, `Null` if empty
    /// (e.g. `R_DR_D`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Null");
        }
        for (i, dir) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            write!(f, "{dir}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DirSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DirSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dirs = Vec::<Dir>::deserialize(deserializer)?;
        DirSet::try_from(dirs.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = DirSet::EMPTY;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
        assert_eq!(set.to_string(), "Null");
    }

    #[test]
    fn order_preserved() {
        let set = DirSet::of(&[Dir::Right, Dir::DownRight, Dir::Down]);
        assert_eq!(set.as_slice(), &[Dir::Right, Dir::DownRight, Dir::Down]);
        assert_eq!(set.to_string(), "R_DR_D");
    }

    #[test]
    fn push_ignores_duplicates() {
        let mut set = DirSet::of(&[Dir::Up]);
        set.push(Dir::Up);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn bits_projection() {
        let set = DirSet::of(&[Dir::Down, Dir::Left]);
        assert_eq!(set.bits(), 1 | (1 << 6));
        // Non-empty sets never collide with the empty sentinel.
        assert_ne!(set.bits(), 0);
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let err = DirSet::try_from([Dir::Down, Dir::Down].as_slice()).unwrap_err();
        assert_eq!(err, DirSetError::Duplicate(Dir::Down));
    }

    #[test]
    fn try_from_rejects_overflow() {
        let dirs = [
            Dir::Down,
            Dir::DownRight,
            Dir::Right,
            Dir::UpRight,
            Dir::Up,
            Dir::UpLeft,
        ];
        assert_eq!(DirSet::try_from(dirs.as_slice()), Err(DirSetError::TooLong));
    }

    #[test]
    fn equality_is_sequence_equality() {
        let a = DirSet::of(&[Dir::Down, Dir::Right]);
        let b = DirSet::of(&[Dir::Right, Dir::Down]);
        assert_ne!(a, b);
        assert_eq!(a, DirSet::of(&[Dir::Down, Dir::Right]));
    }
}
