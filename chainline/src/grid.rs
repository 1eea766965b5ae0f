use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use miette::Diagnostic;
use nom::{
    character::complete::{newline, satisfy},
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("invalid grid: {0}")]
    #[diagnostic(code(chainline::grid::invalid))]
    InvalidGrid(String),

    #[error("cell ({0}, {1}) is outside the {2}x{2} grid")]
    #[diagnostic(code(chainline::grid::out_of_bounds))]
    OutOfBounds(usize, usize, usize),

    #[error("unrecognized color: {0}")]
    #[diagnostic(code(chainline::grid::unknown_color))]
    UnknownColor(String),

    #[error("failed to parse grid: {0}")]
    #[diagnostic(code(chainline::grid::parse))]
    Parse(String),
}

/// One grid position, `(row, col)` with row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, `None` when the result leaves `[0, size)²`.
    pub fn offset(self, (dr, dc): (isize, isize), size: usize) -> Option<Cell> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;

        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }

        Some(Cell::new(row as usize, col as usize))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The closed ball palette. Equality is all that matters; there is no
/// ordering between colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Orange,
    Purple,
}

pub const PALETTE: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Orange,
    Color::Purple,
];

impl Color {
    /// The on-screen RGB value of this ball color.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 29),
            Color::Green => (77, 186, 48),
            Color::Blue => (82, 130, 246),
            Color::Orange => (249, 140, 41),
            Color::Purple => (150, 43, 235),
        }
    }

    /// Maps a sampled pixel back to its palette entry.
    pub fn from_rgb(rgb: (u8, u8, u8)) -> Result<Self, GridError> {
        PALETTE
            .iter()
            .copied()
            .find(|color| color.rgb() == rgb)
            .ok_or_else(|| {
                GridError::UnknownColor(format!("rgb ({}, {}, {})", rgb.0, rgb.1, rgb.2))
            })
    }

    /// Single-letter label used by the text form.
    pub const fn label(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Purple => 'P',
        }
    }

    pub fn from_label(label: char) -> Result<Self, GridError> {
        PALETTE
            .iter()
            .copied()
            .find(|color| color.label() == label)
            .ok_or_else(|| GridError::UnknownColor(format!("label '{label}'")))
    }
}

/// A fully-populated N×N color matrix, immutable for the duration of one
/// search cycle. A fresh capture replaces the whole grid; there is no
/// mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Builds a grid from a complete row-major color assignment.
    pub fn new(size: usize, cells: Vec<Color>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidGrid(
                "grid size must be at least 1".into(),
            ));
        }

        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::InvalidGrid(format!(
                "got {} cells, expected {expected} for a {size}x{size} grid",
                cells.len()
            )));
        }

        Ok(Self { size, cells })
    }

    /// Builds a grid from per-cell samples, the shape a capture collaborator
    /// naturally produces. Rejects out-of-bounds coordinates, duplicates and
    /// incomplete coverage.
    pub fn from_samples(
        size: usize,
        samples: impl IntoIterator<Item = (Cell, Color)>,
    ) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidGrid(
                "grid size must be at least 1".into(),
            ));
        }

        let expected = size * size;
        let mut slots: Vec<Option<Color>> = vec![None; expected];
        let mut count = 0;

        for (cell, color) in samples {
            if cell.row >= size || cell.col >= size {
                return Err(GridError::InvalidGrid(format!(
                    "sample {cell} is outside the {size}x{size} grid"
                )));
            }

            let slot = &mut slots[cell.row * size + cell.col];
            if slot.is_some() {
                return Err(GridError::InvalidGrid(format!(
                    "duplicate sample for {cell}"
                )));
            }

            *slot = Some(color);
            count += 1;
        }

        if count != expected {
            return Err(GridError::InvalidGrid(format!(
                "got {count} samples, expected {expected} for a {size}x{size} grid"
            )));
        }

        let cells = slots.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Color lookup; fails outside `[0, size)²`.
    pub fn color(&self, cell: Cell) -> Result<Color, GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds(cell.row, cell.col, self.size));
        }

        Ok(self.cells[cell.row * self.size + cell.col])
    }

    /// All coordinates in row-major order (row 0 col 0, row 0 col 1, ...).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(row, col)| Cell::new(row, col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for color in row {
                write!(f, "{}", color.label())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: Nom parser
type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy)]
struct LocatedLabel<'a> {
    label: char,
    position: Span<'a>,
}

fn parse_label(input: Span) -> IResult<Span, LocatedLabel> {
    satisfy(|c: char| c.is_ascii_alphabetic())
        .map(|c| LocatedLabel {
            label: c,
            position: input,
        })
        .parse(input)
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Vec<LocatedLabel>>> {
    separated_list1(newline, many1(parse_label))(input)
}
// endregion

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GridError::Parse("input is empty".into()));
        }

        let (rest, rows) = parse_rows(LocatedSpan::new(trimmed))
            .map_err(|e| GridError::Parse(format!("{e}")))?;
        if !rest.fragment().is_empty() {
            return Err(GridError::Parse(format!(
                "unexpected trailing input at line {}, column {}",
                rest.location_line(),
                rest.get_column()
            )));
        }

        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(GridError::Parse(format!(
                "grid is not square: {size} rows but a row of different width"
            )));
        }

        let cells = rows
            .iter()
            .flatten()
            .map(|located| {
                Color::from_label(located.label).map_err(|_| {
                    GridError::UnknownColor(format!(
                        "label '{}' at line {}, column {}",
                        located.label,
                        located.position.location_line(),
                        located.position.get_column()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Grid::new(size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_letter_grid() -> miette::Result<()> {
        let grid: Grid = "RRG\nRGG\nBBB".parse()?;

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.color(Cell::new(0, 0))?, Color::Red);
        assert_eq!(grid.color(Cell::new(1, 1))?, Color::Green);
        assert_eq!(grid.color(Cell::new(2, 2))?, Color::Blue);
        Ok(())
    }

    #[test]
    fn display_round_trips_through_parse() -> miette::Result<()> {
        let text = "ROP\nGBR\nPPO";
        let grid: Grid = text.parse()?;

        assert_eq!(format!("{grid}").trim_end(), text);
        Ok(())
    }

    #[test]
    fn rejects_an_unknown_label_with_its_position() {
        let err = "RG\nRX".parse::<Grid>().unwrap_err();

        match err {
            GridError::UnknownColor(detail) => {
                assert!(detail.contains("'X'"), "detail was: {detail}");
                assert!(detail.contains("line 2"), "detail was: {detail}");
            }
            other => panic!("expected UnknownColor, got {other:?}"),
        }
    }

    #[test]
    fn rejects_ragged_input() {
        let err = "RG\nB".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn rejects_empty_input() {
        let err = "".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let err = Grid::new(2, vec![Color::Red; 3]).unwrap_err();
        assert!(matches!(err, GridError::InvalidGrid(_)));
    }

    #[test]
    fn rejects_zero_size() {
        let err = Grid::new(0, vec![]).unwrap_err();
        assert!(matches!(err, GridError::InvalidGrid(_)));
    }

    #[test]
    fn builds_from_complete_samples() -> miette::Result<()> {
        let samples = [
            (Cell::new(0, 0), Color::Red),
            (Cell::new(0, 1), Color::Green),
            (Cell::new(1, 0), Color::Blue),
            (Cell::new(1, 1), Color::Orange),
        ];

        let grid = Grid::from_samples(2, samples)?;
        assert_eq!(grid.color(Cell::new(1, 1))?, Color::Orange);
        Ok(())
    }

    #[test]
    fn rejects_duplicate_samples() {
        let samples = [
            (Cell::new(0, 0), Color::Red),
            (Cell::new(0, 0), Color::Green),
        ];

        let err = Grid::from_samples(2, samples).unwrap_err();
        assert!(matches!(err, GridError::InvalidGrid(_)));
    }

    #[test]
    fn rejects_out_of_bounds_samples() {
        let samples = [(Cell::new(2, 0), Color::Red)];

        let err = Grid::from_samples(2, samples).unwrap_err();
        assert!(matches!(err, GridError::InvalidGrid(_)));
    }

    #[test]
    fn rejects_incomplete_samples() {
        let samples = [(Cell::new(0, 0), Color::Red)];

        let err = Grid::from_samples(2, samples).unwrap_err();
        assert!(matches!(err, GridError::InvalidGrid(_)));
    }

    #[test]
    fn lookup_outside_the_grid_fails() {
        let grid: Grid = "RG\nBO".parse().unwrap();

        let err = grid.color(Cell::new(2, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds(2, 0, 2)));
    }

    #[test]
    fn cells_iterate_in_row_major_order() {
        let grid: Grid = "RG\nBO".parse().unwrap();

        let order: Vec<Cell> = grid.cells().collect();
        assert_eq!(
            order,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn recovers_palette_entries_from_rgb() -> miette::Result<()> {
        for color in PALETTE {
            assert_eq!(Color::from_rgb(color.rgb())?, color);
        }
        Ok(())
    }

    #[test]
    fn rejects_an_unknown_rgb_sample() {
        let err = Color::from_rgb((1, 2, 3)).unwrap_err();
        assert!(matches!(err, GridError::UnknownColor(_)));
    }

    #[test]
    fn offsets_clip_at_the_edges() {
        let origin = Cell::new(0, 0);

        assert_eq!(origin.offset((-1, 0), 3), None);
        assert_eq!(origin.offset((0, -1), 3), None);
        assert_eq!(origin.offset((1, 1), 3), Some(Cell::new(1, 1)));
        assert_eq!(Cell::new(2, 2).offset((1, 0), 3), None);
    }
}
