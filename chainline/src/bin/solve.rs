use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use miette::{Context, IntoDiagnostic, Result};

use chainline::{find_longest_chain, Grid, MIN_CHAIN};

/// Finds the longest same-color chain in a ball grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid file: one row of R/G/B/O/P letters per line. Reads stdin when
    /// omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .into_diagnostic()
                .context("failed to read stdin")?;
            buffer
        }
    };

    let grid: Grid = text.parse().context("failed to parse the grid")?;
    print!("{grid}");

    let chain = find_longest_chain(&grid);
    if chain.is_empty() {
        println!("no chain of {MIN_CHAIN} or more cells");
    } else {
        let route = chain.iter().map(|cell| cell.to_string()).join(" -> ");
        println!("longest chain, {} cells: {route}", chain.len());
    }

    Ok(())
}
