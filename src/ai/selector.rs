use rand::Rng;

use crate::error::GridError;
use crate::game::{Board, Player, CONNECT};

use super::search::{SearchStats, Searcher};
use super::strategy::{InPlace, MoveStrategy};

/// Search depth used when the caller does not pick one.
pub const DEFAULT_DEPTH: usize = 4;

/// First legal column (ascending) that completes a run for `player`.
///
/// Run it for the opponent's piece to find the cell that must be blocked.
pub fn find_winning_move<S: MoveStrategy>(
    strategy: S,
    board: &mut Board,
    player: Player,
) -> Option<usize> {
    board.legal_moves().into_iter().find(|&col| {
        strategy.with_move(board, col, player.cell(), |child| child.has_win(player))
    })
}

/// Chooses a column: immediate win first, otherwise an alpha-beta search
/// with a uniform random pick among the equally best columns.
pub struct MoveSelector<S: MoveStrategy + Copy = InPlace> {
    searcher: Searcher<S>,
}

impl MoveSelector<InPlace> {
    pub fn new() -> Self {
        MoveSelector::with_strategy(InPlace)
    }
}

impl Default for MoveSelector<InPlace> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveStrategy + Copy> MoveSelector<S> {
    pub fn with_strategy(strategy: S) -> Self {
        MoveSelector {
            searcher: Searcher::with_strategy(strategy),
        }
    }

    pub fn with_searcher(searcher: Searcher<S>) -> Self {
        MoveSelector { searcher }
    }

    /// Statistics of the last search; all zero when the last call was
    /// settled by an immediate win.
    pub fn stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    /// Recommend a column for `player`, or `None` when no move exists.
    /// `board` is left as it was found.
    pub fn recommend<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: usize,
        rng: &mut R,
    ) -> Option<usize> {
        self.searcher.reset_stats();

        if let Some(col) = find_winning_move(self.searcher.strategy(), board, player) {
            tracing::debug!(column = col, player = ?player, "immediate win available");
            return Some(col);
        }

        let outcome = self.searcher.search(board, depth, player.is_maximizer());
        let stats = self.searcher.stats();
        tracing::debug!(
            score = outcome.score,
            candidates = ?outcome.moves,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            depth,
            "search complete"
        );

        if outcome.moves.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..outcome.moves.len());
        Some(outcome.moves[idx])
    }
}

/// Recommend a column for `player` on `board`, searching `depth` plies.
///
/// Uses in-place move application on a private copy of the board.
pub fn recommend_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    depth: usize,
    rng: &mut R,
) -> Option<usize> {
    let mut board = board.clone();
    MoveSelector::new().recommend(&mut board, player, depth, rng)
}

/// Validate a raw grid (`grid[0]` is the bottom row, values 0/1/2) and
/// recommend a column for `piece`. Connect length is 4.
pub fn recommend_from_grid<R: Rng + ?Sized>(
    grid: &[Vec<u8>],
    piece: u8,
    depth: Option<usize>,
    rng: &mut R,
) -> Result<Option<usize>, GridError> {
    let player = Player::from_piece(piece)?;
    let mut board = Board::from_grid(grid, CONNECT)?;
    let depth = depth.unwrap_or(DEFAULT_DEPTH);
    Ok(MoveSelector::new().recommend(&mut board, player, depth, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::strategy::CopyOnMove;
    use crate::game::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn empty_grid() -> Vec<Vec<u8>> {
        vec![vec![0; 7]; 6]
    }

    #[test]
    fn empty_board_depth_one_plays_center() {
        let board = Board::standard();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(recommend_move(&board, Player::One, 1, &mut rng), Some(3));
        }
    }

    #[test]
    fn selects_legal_column() {
        let mut board = Board::standard();
        board.apply_move(3, Cell::One);
        board.apply_move(3, Cell::Two);
        let col = recommend_move(&board, Player::One, 4, &mut rng()).unwrap();
        assert!(board.is_legal_move(col));
    }

    #[test]
    fn takes_winning_move_at_any_depth() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.apply_move(col, Cell::One);
            board.apply_move(col, Cell::Two);
        }
        for depth in 0..=5 {
            let mut selector = MoveSelector::new();
            let col = selector.recommend(&mut board, Player::One, depth, &mut rng());
            assert_eq!(col, Some(3));
            assert_eq!(selector.stats(), SearchStats::default(), "search must not run");
        }
    }

    #[test]
    fn forced_check_finds_block_cell_for_opponent() {
        let mut grid = empty_grid();
        grid[0] = vec![0, 2, 2, 2, 0, 0, 0];
        grid[1] = vec![0, 0, 0, 1, 0, 0, 0];
        let mut board = Board::from_grid(&grid, 4).unwrap();
        // Cells (0, 0) and (0, 4) both complete Two's run; ascending order wins.
        assert_eq!(find_winning_move(InPlace, &mut board, Player::Two), Some(0));

        let mut grid = empty_grid();
        grid[0] = vec![1, 2, 2, 2, 0, 0, 0];
        let mut board = Board::from_grid(&grid, 4).unwrap();
        assert_eq!(find_winning_move(InPlace, &mut board, Player::Two), Some(4));
        assert_eq!(find_winning_move(CopyOnMove, &mut board, Player::Two), Some(4));
        assert_eq!(find_winning_move(InPlace, &mut board, Player::One), None);
    }

    #[test]
    fn blocks_opponent_threat() {
        // Two holds (0,1)..(0,3) and One already owns (0,0): only (0,4) saves.
        let mut grid = empty_grid();
        grid[0] = vec![1, 2, 2, 2, 0, 0, 1];
        grid[1] = vec![1, 0, 0, 0, 0, 0, 0];
        let board = Board::from_grid(&grid, 4).unwrap();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(recommend_move(&board, Player::One, 3, &mut rng), Some(4));
        }
    }

    #[test]
    fn prefers_win_over_block() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.apply_move(col, Cell::Two);
            board.apply_move(col, Cell::One);
        }
        // Two to move: both sides complete on column 3.
        assert_eq!(recommend_move(&board, Player::Two, 4, &mut rng()), Some(3));
    }

    #[test]
    fn full_board_has_no_move() {
        let a = vec![1, 2, 1, 2, 1, 2, 1];
        let b = vec![2, 1, 2, 1, 2, 1, 2];
        let grid = vec![a.clone(), a.clone(), b.clone(), b, a.clone(), a];
        assert_eq!(recommend_from_grid(&grid, 1, None, &mut rng()), Ok(None));
    }

    #[test]
    fn decided_board_has_no_move() {
        let mut grid = empty_grid();
        grid[0] = vec![2, 2, 2, 2, 1, 1, 1];
        assert_eq!(recommend_from_grid(&grid, 1, Some(3), &mut rng()), Ok(None));
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut board = Board::standard();
        board.apply_move(3, Cell::One);
        let first = recommend_move(&board, Player::Two, 3, &mut StdRng::seed_from_u64(5));
        for _ in 0..5 {
            let again = recommend_move(&board, Player::Two, 3, &mut StdRng::seed_from_u64(5));
            assert_eq!(again, first);
        }
    }

    #[test]
    fn grid_entry_validates_input() {
        assert_eq!(
            recommend_from_grid(&empty_grid(), 3, None, &mut rng()),
            Err(GridError::InvalidPiece(3))
        );
        let mut grid = empty_grid();
        grid[2][0] = 1;
        assert_eq!(
            recommend_from_grid(&grid, 1, None, &mut rng()),
            Err(GridError::FloatingPiece { row: 2, col: 0 })
        );
    }

    #[test]
    fn grid_entry_default_depth_plays_legal_column() {
        let col = recommend_from_grid(&empty_grid(), 2, None, &mut rng())
            .unwrap()
            .unwrap();
        assert!(col < 7);
    }

    #[test]
    fn beats_random_player() {
        let mut rng = StdRng::seed_from_u64(17);
        let games = 10;
        let mut wins = 0;
        for game in 0..games {
            let engine_side = if game % 2 == 0 { Player::One } else { Player::Two };
            let mut board = Board::standard();
            let mut to_move = Player::One;
            while !board.is_terminal() {
                let col = if to_move == engine_side {
                    recommend_move(&board, to_move, 3, &mut rng).unwrap()
                } else {
                    let legal = board.legal_moves();
                    legal[rng.random_range(0..legal.len())]
                };
                board.apply_move(col, to_move.cell()).unwrap();
                to_move = to_move.other();
            }
            if board.winner() == Some(engine_side) {
                wins += 1;
            }
        }
        assert!(wins >= 8, "engine won {wins}/{games} against random play");
    }
}
