//! jps-gencases — writes the 2048-entry JPS+ pruning table.
//!
//! Usage: `jps-gencases [--macro | --rust] [-o PATH]`
//!
//! Evaluates every (neighbour mask, arrival direction) pair with
//! `jps_rules::evaluate` and serializes the results, mask ascending and
//! directions in bit order within each mask. The default output is
//! `cases.h` in macro format.

mod emit;

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use emit::Format;

fn main() -> Result<(), Box<dyn Error>> {
    let mut format = Format::Macro;
    let mut path = String::from("cases.h");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--macro" => format = Format::Macro,
            "--rust" => format = Format::Rust,
            "-o" | "--out" => {
                path = args.next().ok_or("missing path after -o")?;
            }
            "-h" | "--help" => {
                println!("usage: jps-gencases [--macro | --rust] [-o PATH]");
                return Ok(());
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let file = File::create(&path)?;
    let mut w = BufWriter::new(file);
    let stats = emit::write_table(&mut w, format)?;
    w.flush()?;

    log::info!(
        "wrote {} rows to {path} ({} with forced successors)",
        stats.rows,
        stats.non_empty
    );
    Ok(())
}
