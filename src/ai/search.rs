//! Depth-limited minimax with alpha-beta pruning.
//!
//! Player One maximizes, Player Two minimizes. The search reports every
//! root move that reached the best score so the caller can break ties.

use crate::game::{Board, Cell, Player};

use super::heuristic::{Heuristic, ThreatHeuristic, WIN_SCORE};
use super::strategy::{InPlace, MoveStrategy};

/// Best score found and the columns that reached it.
///
/// `moves` is empty at a decided position (win or full board). At a depth
/// cutoff it holds every legal column.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    pub moves: Vec<usize>,
}

impl SearchOutcome {
    fn decided(score: f64) -> Self {
        SearchOutcome {
            score,
            moves: Vec::new(),
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included
    pub nodes: u64,
    /// Nodes scored by the heuristic at the depth limit
    pub leaves: u64,
    /// Nodes that stopped early on `alpha >= beta`
    pub cutoffs: u64,
}

/// Sort columns by distance from the center column, lower column first on
/// ties.
pub fn order_center_first(moves: &mut [usize], columns: usize) {
    let center = columns / 2;
    moves.sort_by_key(|&col| (col.abs_diff(center), col));
}

/// Alpha-beta searcher over a [`MoveStrategy`].
pub struct Searcher<S: MoveStrategy + Copy = InPlace> {
    strategy: S,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl Searcher<InPlace> {
    pub fn new() -> Self {
        Searcher::with_strategy(InPlace)
    }
}

impl Default for Searcher<InPlace> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveStrategy + Copy> Searcher<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Searcher::with_heuristic(strategy, Box::new(ThreatHeuristic))
    }

    pub fn with_heuristic(strategy: S, heuristic: Box<dyn Heuristic>) -> Self {
        Searcher {
            strategy,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn strategy(&self) -> S {
        self.strategy
    }

    /// Statistics of the most recent root search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub(crate) fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Search from the root with a full window.
    pub fn search(&mut self, board: &mut Board, depth: usize, maximizing: bool) -> SearchOutcome {
        self.reset_stats();
        self.alpha_beta(board, depth, maximizing, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Minimax value of `board` with `depth` plies left. A strictly better
    /// score replaces the best-move list, an equal score extends it.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchOutcome {
        self.stats.nodes += 1;

        match board.winner() {
            Some(Player::One) => return SearchOutcome::decided(WIN_SCORE),
            Some(Player::Two) => return SearchOutcome::decided(-WIN_SCORE),
            None => {}
        }

        let mut moves = board.legal_moves();
        if moves.is_empty() {
            return SearchOutcome::decided(0.0);
        }

        if depth == 0 {
            self.stats.leaves += 1;
            return SearchOutcome {
                score: self.heuristic.evaluate(board),
                moves,
            };
        }

        order_center_first(&mut moves, board.columns());

        let strategy = self.strategy;
        let piece = if maximizing { Cell::One } else { Cell::Two };
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_moves = Vec::new();

        for col in moves {
            let score = strategy.with_move(board, col, piece, |child| {
                self.alpha_beta(child, depth - 1, !maximizing, alpha, beta)
                    .score
            });

            let improves = if maximizing { score > best } else { score < best };
            if improves {
                best = score;
                best_moves.clear();
                best_moves.push(col);
            } else if score == best {
                best_moves.push(col);
            }

            if maximizing {
                alpha = alpha.max(best);
            } else {
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchOutcome {
            score: best,
            moves: best_moves,
        }
    }
}
