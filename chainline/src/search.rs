use crate::grid::{Cell, Grid};
use crate::neighbors::same_color_neighbors;

/// Longest simple path through `start`'s same-color component, found by
/// depth-first backtracking. `upper_bound` is the component size (see
/// [`crate::region::region_size`]); the search returns as soon as a path of
/// that length exists, since no simple path can leave the component.
///
/// Ties keep the first path found, so the result is fully determined by the
/// neighbor enumeration order. No memoization: with the no-revisit
/// constraint, what is reachable from a cell depends on the path taken to
/// it, so sub-results cannot be shared.
pub fn longest_path_from(grid: &Grid, start: Cell, upper_bound: usize) -> Vec<Cell> {
    if !grid.contains(start) || upper_bound == 0 {
        return Vec::new();
    }

    let mut current = vec![start];
    let mut best = current.clone();
    extend(grid, &mut current, &mut best, upper_bound);
    best
}

fn extend(grid: &Grid, current: &mut Vec<Cell>, best: &mut Vec<Cell>, upper_bound: usize) {
    if current.len() > best.len() {
        *best = current.clone();
    }
    // A path as long as the component is provably maximal.
    if best.len() >= upper_bound {
        return;
    }

    let Some(&last) = current.last() else {
        return;
    };

    for next in same_color_neighbors(grid, last) {
        if current.contains(&next) {
            continue;
        }

        current.push(next);
        extend(grid, current, best, upper_bound);
        current.pop();

        if best.len() >= upper_bound {
            return;
        }
    }
}
