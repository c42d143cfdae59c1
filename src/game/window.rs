use std::ops::Range;

use super::board::{Board, Cell, Coord};

/// The four line families a run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(r, c+i)`
    Horizontal,
    /// `(r+i, c)`
    Vertical,
    /// `(r+i, c+i)`, bottom-left to top-right
    RisingDiagonal,
    /// `(r-i, c+i)`, top-left to bottom-right
    FallingDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::RisingDiagonal,
        Direction::FallingDiagonal,
    ];

    /// Row and column ranges of valid window origins for this family.
    /// Ranges come out empty when `connect` exceeds the relevant dimension.
    pub(crate) fn origins(
        self,
        rows: usize,
        cols: usize,
        connect: usize,
    ) -> (Range<usize>, Range<usize>) {
        let row_span = (rows + 1).saturating_sub(connect);
        let col_span = (cols + 1).saturating_sub(connect);
        match self {
            Direction::Horizontal => (0..rows, 0..col_span),
            Direction::Vertical => (0..row_span, 0..cols),
            Direction::RisingDiagonal => (0..row_span, 0..col_span),
            Direction::FallingDiagonal => (connect - 1..rows, 0..col_span),
        }
    }

    fn offset(self, (row, col): Coord, i: usize) -> Coord {
        match self {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::RisingDiagonal => (row + i, col + i),
            Direction::FallingDiagonal => (row - i, col + i),
        }
    }
}

/// Cell tallies for a single window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub one: usize,
    pub two: usize,
    pub empty: usize,
}

/// A borrowed view of `connect` consecutive cells along one direction.
/// Nothing is copied; cells are read from the board on demand.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    board: &'a Board,
    origin: Coord,
    direction: Direction,
}

impl<'a> Window<'a> {
    pub(crate) fn new(board: &'a Board, origin: Coord, direction: Direction) -> Self {
        Window {
            board,
            origin,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Coordinates of each cell, in window order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + 'a {
        let origin = self.origin;
        let direction = self.direction;
        (0..self.board.connect()).map(move |i| direction.offset(origin, i))
    }

    /// Cell values, paired index-for-index with [`Window::coords`].
    pub fn values(&self) -> impl Iterator<Item = Cell> + 'a {
        let board = self.board;
        self.coords().map(move |(row, col)| board.cell(row, col))
    }

    pub fn counts(&self) -> WindowCounts {
        let mut counts = WindowCounts::default();
        for cell in self.values() {
            match cell {
                Cell::Empty => counts.empty += 1,
                Cell::One => counts.one += 1,
                Cell::Two => counts.two += 1,
            }
        }
        counts
    }

    /// True iff every cell equals `cell`.
    pub fn is_all(&self, cell: Cell) -> bool {
        self.values().all(|c| c == cell)
    }

    /// Coordinate of the first empty cell, if any.
    pub fn first_empty(&self) -> Option<Coord> {
        let board = self.board;
        self.coords()
            .find(|&(row, col)| board.cell(row, col) == Cell::Empty)
    }
}

/// Lazily enumerate every window of `board`, family by family.
pub(crate) fn windows(board: &Board) -> impl Iterator<Item = Window<'_>> + '_ {
    let (rows, cols, connect) = (board.rows(), board.columns(), board.connect());
    Direction::ALL.into_iter().flat_map(move |direction| {
        let (row_range, col_range) = direction.origins(rows, cols, connect);
        row_range.flat_map(move |row| {
            col_range
                .clone()
                .map(move |col| Window::new(board, (row, col), direction))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origins_saturate_when_connect_too_long() {
        let (rows, cols) = Direction::Horizontal.origins(3, 2, 4);
        assert_eq!(rows, 0..3);
        assert!(cols.is_empty());
        let (rows, _) = Direction::FallingDiagonal.origins(3, 5, 4);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_falling_diagonal_coords() {
        let board = Board::standard();
        let window = Window::new(&board, (3, 0), Direction::FallingDiagonal);
        let coords: Vec<Coord> = window.coords().collect();
        assert_eq!(coords, vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn test_counts_and_first_empty() {
        let mut board = Board::standard();
        board.apply_move(0, Cell::One);
        board.apply_move(1, Cell::Two);
        let window = Window::new(&board, (0, 0), Direction::Horizontal);
        assert_eq!(
            window.counts(),
            WindowCounts {
                one: 1,
                two: 1,
                empty: 2
            }
        );
        assert_eq!(window.first_empty(), Some((0, 2)));
    }

    #[test]
    fn test_windows_restartable() {
        let board = Board::standard();
        assert_eq!(windows(&board).count(), windows(&board).count());
    }
}
