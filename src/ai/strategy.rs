use crate::game::{Board, Cell};

/// How a search explores a child position.
///
/// Both strategies hand `f` a board with `piece` dropped into `col`; the
/// caller's board is unchanged once `with_move` returns. `col` must be a
/// legal column.
pub trait MoveStrategy {
    fn with_move<T>(
        &self,
        board: &mut Board,
        col: usize,
        piece: Cell,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T;
}

/// Mutate the shared board, run `f`, then revert. Nested calls unwind in
/// stack order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlace;

impl MoveStrategy for InPlace {
    fn with_move<T>(
        &self,
        board: &mut Board,
        col: usize,
        piece: Cell,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        match board.apply_move(col, piece) {
            Some(row) => {
                let result = f(board);
                board.revert_move(col, row);
                result
            }
            None => f(board),
        }
    }
}

/// Clone the board for every child; the parent is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOnMove;

impl MoveStrategy for CopyOnMove {
    fn with_move<T>(
        &self,
        board: &mut Board,
        col: usize,
        piece: Cell,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        let mut child = board.clone();
        child.apply_move(col, piece);
        f(&mut child)
    }
}

/// Runtime choice of [`MoveStrategy`], as read from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    #[default]
    InPlace,
    CopyOnMove,
}
