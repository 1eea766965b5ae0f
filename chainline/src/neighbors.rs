use crate::grid::{Cell, Grid};

/// The eight relative offsets, in the order the search tries them. The order
/// is load-bearing: it decides which of several equally-long chains wins, so
/// it must never be reordered without updating the expectations downstream.
pub const OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// In-bounds neighbors of `cell` sharing its color, in `OFFSETS` order.
pub fn same_color_neighbors(grid: &Grid, cell: Cell) -> Vec<Cell> {
    let Ok(color) = grid.color(cell) else {
        return Vec::new();
    };

    OFFSETS
        .iter()
        .filter_map(|&offset| cell.offset(offset, grid.size()))
        .filter(|&candidate| grid.color(candidate).map_or(false, |c| c == color))
        .collect()
}
