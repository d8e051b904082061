//! Symbolic slot patterns — the intermediate classification keys.
//!
//! Each pruning outcome can be written as a fixed-width pattern over the
//! candidate successor slots: the slot's own index if the successor is
//! kept, `X` if it is pruned. Cardinal expansions have five slots
//! (left, forward-left diagonal, straight, forward-right diagonal, right);
//! diagonal expansions have three (first component, diagonal, second
//! component). So "keep straight plus the left detour" reads `012XX` and
//! "everything pruned" reads `XXXXX`.
//!
//! The case enums are the source of truth; patterns are a lossless 1:1
//! relabeling kept for generated-table readability and golden comparisons.

use std::fmt;

use crate::cardinal::CardinalCase;
use crate::diagonal::DiagonalCase;

fn fmt_slots(slots: &[bool], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, &kept) in slots.iter().enumerate() {
        if kept {
            write!(f, "{i}")?;
        } else {
            f.write_str("X")?;
        }
    }
    Ok(())
}

fn parse_slots<const N: usize>(s: &str) -> Option<[bool; N]> {
    if s.len() != N {
        return None;
    }
    let mut slots = [false; N];
    for (i, c) in s.chars().enumerate() {
        if c == 'X' {
            continue;
        }
        if c.to_digit(10) != Some(i as u32) {
            return None;
        }
        slots[i] = true;
    }
    Some(slots)
}

// ---------------------------------------------------------------------------
// CardinalPattern
// ---------------------------------------------------------------------------

/// Presence pattern over the five cardinal successor slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardinalPattern {
    slots: [bool; 5],
}

impl CardinalPattern {
    /// Pattern with the given slot presence, slot 0 first.
    pub const fn new(slots: [bool; 5]) -> Self {
        Self { slots }
    }

    /// Slot presence, slot 0 first.
    pub const fn slots(self) -> [bool; 5] {
        self.slots
    }

    /// Parse the `012XX` syntax. Returns `None` for anything that is not
    /// five characters of `X` or the slot's own digit.
    pub fn parse(s: &str) -> Option<Self> {
        parse_slots(s).map(Self::new)
    }

    /// The unique case carrying this pattern, or `None` if no pruning
    /// outcome produces it (19 of the 32 slot combinations never occur).
    pub fn to_case(self) -> Option<CardinalCase> {
        CardinalCase::ALL.into_iter().find(|c| c.pattern() == self)
    }
}

impl fmt::Display for CardinalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slots(&self.slots, f)
    }
}

// ---------------------------------------------------------------------------
// DiagonalPattern
// ---------------------------------------------------------------------------

/// Presence pattern over the three diagonal successor slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DiagonalPattern {
    slots: [bool; 3],
}

impl DiagonalPattern {
    /// Pattern with the given slot presence, slot 0 first.
    pub const fn new(slots: [bool; 3]) -> Self {
        Self { slots }
    }

    /// Slot presence, slot 0 first.
    pub const fn slots(self) -> [bool; 3] {
        self.slots
    }

    /// Parse the `0X2` syntax. Returns `None` for anything that is not
    /// three characters of `X` or the slot's own digit.
    pub fn parse(s: &str) -> Option<Self> {
        parse_slots(s).map(Self::new)
    }

    /// The unique case carrying this pattern, or `None` if no pruning
    /// outcome produces it.
    pub fn to_case(self) -> Option<DiagonalCase> {
        DiagonalCase::ALL.into_iter().find(|c| c.pattern() == self)
    }
}

impl fmt::Display for DiagonalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slots(&self.slots, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_syntax() {
        assert_eq!(CardinalCase::LeftFan.pattern().to_string(), "012XX");
        assert_eq!(CardinalCase::Ahead.pattern().to_string(), "XX2XX");
        assert_eq!(CardinalCase::DeadEnd.pattern().to_string(), "XXXXX");
        assert_eq!(DiagonalCase::Flanks.pattern().to_string(), "0X2");
        assert_eq!(DiagonalCase::DeadEnd.pattern().to_string(), "XXX");
    }

    #[test]
    fn cardinal_cases_round_trip() {
        for case in CardinalCase::ALL {
            let pattern = case.pattern();
            assert_eq!(CardinalPattern::parse(&pattern.to_string()), Some(pattern));
            assert_eq!(pattern.to_case(), Some(case));
        }
    }

    #[test]
    fn diagonal_cases_round_trip() {
        for case in DiagonalCase::ALL {
            let pattern = case.pattern();
            assert_eq!(DiagonalPattern::parse(&pattern.to_string()), Some(pattern));
            assert_eq!(pattern.to_case(), Some(case));
        }
    }

    #[test]
    fn patterns_are_distinct_per_case() {
        for a in CardinalCase::ALL {
            for b in CardinalCase::ALL {
                assert_eq!(a.pattern() == b.pattern(), a == b);
            }
        }
        for a in DiagonalCase::ALL {
            for b in DiagonalCase::ALL {
                assert_eq!(a.pattern() == b.pattern(), a == b);
            }
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(CardinalPattern::parse("01234X"), None);
        assert_eq!(CardinalPattern::parse("0123"), None);
        assert_eq!(CardinalPattern::parse("1XXXX"), None);
        assert_eq!(CardinalPattern::parse("XXAXX"), None);
        assert_eq!(DiagonalPattern::parse("X0X"), None);
    }

    #[test]
    fn unused_slot_combinations_map_to_no_case() {
        // Forward-diagonal slots never survive without their flank.
        let orphan_diag = CardinalPattern::new([false, true, false, false, false]);
        assert_eq!(orphan_diag.to_case(), None);
        let orphan_diag = DiagonalPattern::new([false, true, false]);
        assert_eq!(orphan_diag.to_case(), None);
    }
}
