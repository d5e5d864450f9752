//! `grid` — the rectangular letter grid searched by the solver.
//!
//! A [`Grid`] can only be built through validating constructors, so every value of the type
//! upholds the invariants the solver relies on:
//! - every cell holds exactly one character,
//! - every row has the same length (ragged input is rejected, never truncated).
//!
//! Grids are read from:
//! - nested sequences of string-like cells (`Grid::from_rows`),
//! - a text format with one row per line and whitespace-separated cells
//!   (`Grid::parse_from_str`, `Grid::load_from_path` on native builds).

use std::fmt;
use std::ops::Index;

use crate::errors::InputError;

/// A cell address, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// The eight compass directions a word may run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row delta, column delta) for one step in this direction.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Immutable rectangular grid of single characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<char>,
    num_rows: usize,
    num_cols: usize,
}

impl Grid {
    /// Build a grid from rows of string-like cells.
    ///
    /// The column count comes from the first row; every later row must match it.
    ///
    /// # Errors
    ///
    /// - [`InputError::InvalidCell`] if a cell is not exactly one character.
    /// - [`InputError::RaggedGrid`] if a row's length differs from the first row's.
    pub fn from_rows<R, Row, S>(rows: R) -> Result<Grid, InputError>
    where
        R: IntoIterator<Item = Row>,
        Row: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut row_lens = Vec::new();

        // Cell contents are checked over the whole grid before row lengths,
        // so a bad cell is reported even when the grid is also ragged.
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            let row_start = cells.len();
            for (col, cell) in cells_in_row.into_iter().enumerate() {
                let cell = cell.as_ref();
                cells.push(single_char(cell).ok_or_else(|| InputError::InvalidCell {
                    row,
                    col,
                    cell: format!("{cell:?}"),
                })?);
            }
            row_lens.push(cells.len() - row_start);
        }

        let num_rows = row_lens.len();
        let num_cols = row_lens.first().copied().unwrap_or(0);
        if let Some((row, &found)) = row_lens.iter().enumerate().find(|&(_, &len)| len != num_cols) {
            return Err(InputError::RaggedGrid { row, expected: num_cols, found });
        }

        debug_assert_eq!(cells.len(), num_rows * num_cols);
        Ok(Grid { cells, num_rows, num_cols })
    }

    /// Parse the text grid format: one row per non-blank line, cells separated by whitespace.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_rows`].
    pub fn parse_from_str(contents: &str) -> Result<Grid, InputError> {
        Grid::from_rows(
            contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::split_whitespace),
        )
    }

    /// Native-only convenience method: read a text grid from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be read or does not hold a valid grid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data)?)
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// True when the grid has no cells (zero rows, or rows of zero length).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.num_rows && pos.col < self.num_cols {
            Some(self.cells[pos.row * self.num_cols + pos.col])
        } else {
            None
        }
    }

    /// Every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.num_rows).flat_map(move |row| (0..self.num_cols).map(move |col| Position { row, col }))
    }

    /// The neighbour of `pos` one step in `direction`, or `None` past the grid edge.
    #[must_use]
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        (row < self.num_rows && col < self.num_cols).then_some(Position { row, col })
    }

    pub(crate) fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.num_cols + pos.col
    }
}

impl Index<Position> for Grid {
    type Output = char;

    fn index(&self, pos: Position) -> &char {
        assert!(
            pos.row < self.num_rows && pos.col < self.num_cols,
            "position ({}, {}) outside {}x{} grid",
            pos.row, pos.col, self.num_rows, self.num_cols
        );
        &self.cells[self.cell_index(pos)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.num_cols.max(1)) {
            let line = row.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn single_char(cell: &str) -> Option<char> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_basic() {
        let grid = Grid::from_rows([["C", "A", "T"], ["D", "O", "G"]]).unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_cols(), 3);
        assert_eq!(grid[Position::new(0, 1)], 'A');
        assert_eq!(grid.get(Position::new(1, 2)), Some('G'));
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_from_rows_rejects_multichar_cell() {
        let err = Grid::from_rows([vec!["C", "C"], vec!["AB", "C"]]).unwrap_err();
        assert!(matches!(err, InputError::InvalidCell { row: 1, col: 0, .. }), "{err:?}");
        assert!(err.to_string().contains("\"AB\""));
    }

    #[test]
    fn test_from_rows_rejects_empty_cell() {
        let err = Grid::from_rows([["C", ""]]).unwrap_err();
        assert!(matches!(err, InputError::InvalidCell { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec!["C", "A", "T"], vec!["D", "O"]]).unwrap_err();
        assert!(matches!(err, InputError::RaggedGrid { row: 1, expected: 3, found: 2 }));

        let err = Grid::from_rows(vec![vec!["C"], vec!["D", "O"]]).unwrap_err();
        assert!(matches!(err, InputError::RaggedGrid { row: 1, expected: 1, found: 2 }));
    }

    #[test]
    fn test_bad_cell_reported_before_ragged_row() {
        let err = Grid::from_rows(vec![vec!["C", "A", "T"], vec!["D"], vec!["O", "GG", "X"]]).unwrap_err();
        assert!(matches!(err, InputError::InvalidCell { row: 2, col: 1, .. }), "{err:?}");
    }

    #[test]
    fn test_from_rows_empty() {
        let grid = Grid::from_rows(Vec::<Vec<&str>>::new()).unwrap();
        assert_eq!(grid.num_rows(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 0);
    }

    #[test]
    fn test_multibyte_cells_are_single_characters() {
        let grid = Grid::from_rows([["Å", "é"]]).unwrap();
        assert_eq!(grid[Position::new(0, 0)], 'Å');
        assert_eq!(grid[Position::new(0, 1)], 'é');
    }

    #[test]
    fn test_parse_from_str() {
        let grid = Grid::parse_from_str("C A T\n\n  D O G  \n").unwrap();
        assert_eq!(grid, Grid::from_rows([["C", "A", "T"], ["D", "O", "G"]]).unwrap());
    }

    #[test]
    fn test_parse_from_str_rejects_unsplit_rows() {
        let err = Grid::parse_from_str("CAT\nDOG").unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::from_rows([["A", "B"], ["C", "D"]]).unwrap();
        let letters: String = grid.positions().map(|p| grid[p]).collect();
        assert_eq!(letters, "ABCD");
    }

    #[test]
    fn test_step_stays_inside_grid() {
        let grid = Grid::from_rows([["A", "B"], ["C", "D"]]).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(grid.step(corner, Direction::Up), None);
        assert_eq!(grid.step(corner, Direction::Left), None);
        assert_eq!(grid.step(corner, Direction::UpRight), None);
        assert_eq!(grid.step(corner, Direction::DownRight), Some(Position::new(1, 1)));
        assert_eq!(grid.step(Position::new(1, 1), Direction::Down), None);
        assert_eq!(grid.step(Position::new(1, 1), Direction::Right), None);
        assert_eq!(grid.step(Position::new(1, 1), Direction::UpLeft), Some(corner));
    }

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        let deltas: std::collections::HashSet<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        assert!(deltas.iter().all(|(dr, dc)| dr.abs() <= 1 && dc.abs() <= 1));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows([["C", "A"], ["T", "S"]]).unwrap();
        assert_eq!(grid.to_string(), "C A\nT S\n");
    }
}
