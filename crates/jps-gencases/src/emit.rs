//! Table serialization.
//!
//! Walks masks 0..=255 and, within each mask, the eight directions in bit
//! order, writing one row per (mask, direction) pair. Emission is
//! deterministic; rerunning produces byte-identical output.

use std::io::{self, Write};

use jps_rules::{Dir, DirSet, NeighborMask, evaluate};

/// Output format of the generated table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// `CASE(R_DR_D)` lines, one per row, for inclusion behind a C macro.
    Macro,
    /// A Rust source file holding the table as `[u8; 2048]` of direction
    /// bitsets, `0` for the empty set.
    Rust,
}

/// Counters reported after a write.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmitStats {
    pub rows: usize,
    pub non_empty: usize,
}

/// All 2048 table rows in emission order.
fn rows() -> impl Iterator<Item = (NeighborMask, Dir, DirSet)> {
    NeighborMask::all()
        .flat_map(|mask| Dir::ALL.into_iter().map(move |dir| (mask, dir, evaluate(mask, dir))))
}

/// Write the full table to `w` in the given format.
pub fn write_table(w: &mut impl Write, format: Format) -> io::Result<EmitStats> {
    match format {
        Format::Macro => write_macro(w),
        Format::Rust => write_rust(w),
    }
}

fn write_macro(w: &mut impl Write) -> io::Result<EmitStats> {
    let mut stats = EmitStats::default();
    for (_, _, set) in rows() {
        writeln!(w, "CASE({set})")?;
        stats.rows += 1;
        stats.non_empty += usize::from(!set.is_empty());
    }
    Ok(stats)
}

fn write_rust(w: &mut impl Write) -> io::Result<EmitStats> {
    let mut stats = EmitStats::default();
    writeln!(w, "// Generated by jps-gencases. Do not edit.")?;
    writeln!(w, "//")?;
    writeln!(w, "// Successor-direction bitsets indexed by `mask * 8 + direction`,")?;
    writeln!(w, "// where bit i of a mask or of an entry refers to direction i")?;
    writeln!(w, "// (Down = 0 through DownLeft = 7). An entry of 0 means no")?;
    writeln!(w, "// forced successor.")?;
    writeln!(w, "pub static JUMP_CASES: [u8; 2048] = [")?;
    for (mask, dir, set) in rows() {
        if dir == Dir::Down {
            writeln!(w, "    // mask {mask}")?;
        }
        writeln!(w, "    0x{:02x}, // {dir}: {set}", set.bits())?;
        stats.rows += 1;
        stats.non_empty += usize::from(!set.is_empty());
    }
    writeln!(w, "];")?;
    Ok(stats)
}
