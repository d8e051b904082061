//! **jps-rules** — Pruning-rule derivation for JPS+ grid pathfinding.
//!
//! Jump Point Search prunes the successors of every expanded node down to
//! a minimal set that depends only on the direction of travel and on which
//! of the eight surrounding cells are blocked. JPS+ hoists that decision
//! out of the search entirely: a 2048-entry table, indexed by
//! `mask * 8 + direction`, is generated once and consulted in constant
//! time at search time. This crate is the rule half of that precomputation:
//!
//! - [`NeighborMask`] — 8-bit blocked/open neighbourhood of a cell
//! - [`Dir`] — the eight compass directions at fixed bit positions
//! - [`evaluate`] — mask + arrival direction → [`DirSet`], the canonical
//!   ordered set of directions the search must continue into
//!
//! Cardinal and diagonal arrivals follow different rule sets
//! ([`CardinalCase`], [`DiagonalCase`]); each of the four directions of a
//! kind is the 90°-rotation of the others, captured by [`CardinalFrame`] /
//! [`DiagonalFrame`] so the rule bodies exist once. Every evaluation is
//! pure and total — all 2048 (mask, direction) pairs have a defined
//! result, the empty set included. Table emission lives in the
//! `jps-gencases` binary.

mod cardinal;
mod diagonal;
mod direction;
mod dirset;
mod evaluate;
mod mask;
mod pattern;

pub use cardinal::{CardinalCase, CardinalPredicates, cardinal_dir_set};
pub use diagonal::{DiagonalCase, DiagonalPredicates, diagonal_dir_set};
pub use direction::{CardinalFrame, DiagonalFrame, Dir};
pub use dirset::{DirSet, DirSetError};
pub use evaluate::evaluate;
pub use mask::NeighborMask;
pub use pattern::{CardinalPattern, DiagonalPattern};
