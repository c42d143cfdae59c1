use std::fmt;

use super::player::Player;
use super::window::{self, Window};
use crate::error::GridError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CONNECT: usize = 4;

/// `(row, col)`, row 0 being the bottom row.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Map an external grid value (0, 1, 2) to a cell.
    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::One),
            2 => Some(Cell::Two),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

/// A rectangular gravity board with a configurable run length to win.
///
/// Row 0 is the bottom row; pieces fill a column from row 0 upward.
/// Dimensions and run length are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    connect: usize,
}

impl Board {
    /// Create an empty `rows` x `cols` board where `connect` in a row wins.
    pub fn new(rows: usize, cols: usize, connect: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if connect == 0 || connect > rows.max(cols) {
            return Err(GridError::InvalidConnect {
                connect,
                rows,
                cols,
            });
        }
        Ok(Board {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
            connect,
        })
    }

    /// The classic 6 x 7, connect-4 board.
    pub fn standard() -> Self {
        Board {
            cells: vec![Cell::Empty; ROWS * COLS],
            rows: ROWS,
            cols: COLS,
            connect: CONNECT,
        }
    }

    /// Build a board from raw grid values, `grid[0]` being the bottom row.
    ///
    /// Rejects ragged rows, values outside `{0, 1, 2}` and pieces floating
    /// above an empty cell.
    pub fn from_grid(grid: &[Vec<u8>], connect: usize) -> Result<Self, GridError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut board = Board::new(rows, cols, connect)?;

        for (row, values) in grid.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_value(value)
                    .ok_or(GridError::InvalidCell { row, col, value })?;
                board.set(row, col, cell);
            }
        }

        for col in 0..cols {
            let height = board.lowest_empty_row(col).unwrap_or(rows);
            if let Some(row) = (height..rows).find(|&r| board.cell(r, col) != Cell::Empty) {
                return Err(GridError::FloatingPiece { row, col });
            }
        }

        Ok(board)
    }

    /// Inverse of [`Board::from_grid`].
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.cell(row, col).value()).collect())
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Get the cell at a specific position
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// True iff the top cell of `col` is empty. Out-of-range columns are
    /// never legal.
    pub fn is_legal_move(&self, col: usize) -> bool {
        col < self.cols && self.cell(self.rows - 1, col) == Cell::Empty
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal_move(col)).collect()
    }

    /// Lowest empty row of `col`, or `None` when the column is full or
    /// out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.cell(row, col) == Cell::Empty)
    }

    /// True iff `(row, col)` is where the next piece dropped into `col`
    /// would land.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.lowest_empty_row(col) == Some(row)
    }

    /// Drop `cell` into `col`, returning the landing row, or `None` if the
    /// column is full or does not exist.
    pub fn apply_move(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.lowest_empty_row(col)?;
        self.set(row, col, cell);
        Some(row)
    }

    /// Clear the cell filled by the matching [`Board::apply_move`].
    /// Reverts must run in reverse order of applications.
    pub fn revert_move(&mut self, col: usize, row: usize) {
        self.set(row, col, Cell::Empty);
    }

    /// Number of empty cells on the board.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Every `connect`-long window on the board. Win detection and
    /// evaluation both read from this one enumeration.
    pub fn windows(&self) -> impl Iterator<Item = Window<'_>> + '_ {
        window::windows(self)
    }

    /// Closed-form window count:
    /// `R(C-N+1) + (R-N+1)C + 2(R-N+1)(C-N+1)`, each factor floored at 0.
    pub fn window_count(&self) -> usize {
        let row_span = (self.rows + 1).saturating_sub(self.connect);
        let col_span = (self.cols + 1).saturating_sub(self.connect);
        self.rows * col_span + row_span * self.cols + 2 * row_span * col_span
    }

    /// True iff some window is entirely `player`'s pieces.
    pub fn has_win(&self, player: Player) -> bool {
        let cell = player.cell();
        self.windows().any(|w| w.is_all(cell))
    }

    /// The player with a completed run, if any. Player One is checked first.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.has_win(player))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_legal_move(col))
    }

    /// A win for either side, or no legal move left.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Top row first, followed by a column index footer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: String = (0..self.cols).map(|col| self.cell(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.cols)
            .map(|col| char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
