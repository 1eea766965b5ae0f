use std::collections::HashSet;

use tracing::debug;

use crate::grid::{Cell, Grid};
use crate::region::region_cells;
use crate::search::longest_path_from;

/// Shortest chain the game accepts.
pub const MIN_CHAIN: usize = 3;

/// Scans the whole grid and returns the longest selectable chain, or an
/// empty path when nothing reaches [`MIN_CHAIN`] cells.
///
/// Cells are visited in row-major order. Every component is explored from at
/// most one starting cell: all cells of a component share the same size
/// bound, so once one of them has been searched (or pruned), the rest are
/// masked off. A component whose size cannot beat the running best is never
/// searched at all.
#[tracing::instrument(skip(grid), fields(size = grid.size()))]
pub fn find_longest_chain(grid: &Grid) -> Vec<Cell> {
    let mut best: Vec<Cell> = Vec::new();
    let mut visited: HashSet<Cell> = HashSet::new();

    for cell in grid.cells() {
        if visited.contains(&cell) {
            continue;
        }

        let component = region_cells(grid, cell);
        let upper_bound = component.len();

        if upper_bound > best.len() {
            let candidate = longest_path_from(grid, cell, upper_bound);
            if candidate.len() >= MIN_CHAIN && candidate.len() > best.len() {
                debug!(len = candidate.len(), start = %cell, "new best chain");
                best = candidate;
            }
        } else {
            debug!(bound = upper_bound, start = %cell, "component pruned");
        }

        visited.extend(component);
    }

    best
}

/// Checks the contract the solver owes the path executor: the chain is
/// empty, or it has at least [`MIN_CHAIN`] cells, stays in bounds, never
/// repeats a cell, steps only between 8-adjacent cells and uses one color
/// throughout.
pub fn is_valid_chain(grid: &Grid, chain: &[Cell]) -> bool {
    if chain.is_empty() {
        return true;
    }
    if chain.len() < MIN_CHAIN {
        return false;
    }

    let Ok(color) = grid.color(chain[0]) else {
        return false;
    };
    if chain
        .iter()
        .any(|&cell| grid.color(cell).map_or(true, |c| c != color))
    {
        return false;
    }

    let mut seen = HashSet::new();
    if !chain.iter().all(|cell| seen.insert(*cell)) {
        return false;
    }

    chain.windows(2).all(|pair| {
        let dr = pair[0].row.abs_diff(pair[1].row);
        let dc = pair[0].col.abs_diff(pair[1].col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    })
}
