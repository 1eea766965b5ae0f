use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid};
use crate::neighbors::same_color_neighbors;

/// Breadth-first flood fill of `start`'s same-color component. Each cell is
/// enqueued at most once, so a call costs O(component size).
pub fn region_cells(grid: &Grid, start: Cell) -> HashSet<Cell> {
    let mut seen = HashSet::new();
    if !grid.contains(start) {
        return seen;
    }

    let mut queue = VecDeque::from([start]);
    seen.insert(start);

    while let Some(cell) = queue.pop_front() {
        for neighbor in same_color_neighbors(grid, cell) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    seen
}

/// Size of `start`'s same-color component. Any simple path from `start` is
/// confined to the component, so this is an exact upper bound on the longest
/// chain reachable from it. Used only for pruning, never to build a path.
pub fn region_size(grid: &Grid, start: Cell) -> usize {
    region_cells(grid, start).len()
}
