use std::collections::HashSet;

use crate::game::{Board, Coord, Player};

/// Score of a decided position. No sum of heuristic terms can reach it.
pub const WIN_SCORE: f64 = 1e12;

const DOUBLE_THREAT_WEIGHT: f64 = 1e9;
const OWN_THREAT_WEIGHT: f64 = 1e5;
const OPP_THREAT_WEIGHT: f64 = 1e6;
const FLOATING_WEIGHT: f64 = 100.0;
const PAIR_WEIGHT: f64 = 10.0;

/// Trait for evaluating a board position. Positive scores favor
/// [`Player::One`], negative scores favor [`Player::Two`].
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Threat-based heuristic: immediate playable threats, double threats,
/// floating threes, open pairs and raw window potential.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatHeuristic;

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        match board.winner() {
            Some(Player::One) => WIN_SCORE,
            Some(Player::Two) => -WIN_SCORE,
            None => ThreatSummary::scan(board).score(),
        }
    }
}

/// Per-side tallies gathered in one pass over every window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreatSummary {
    /// Distinct immediately playable cells that would complete a run for One.
    pub threats_one: HashSet<Coord>,
    pub threats_two: HashSet<Coord>,
    /// One-short windows whose missing cell is not yet playable.
    pub floating_one: u32,
    pub floating_two: u32,
    /// Windows holding two pieces of one side and two empties.
    pub pairs_one: u32,
    pub pairs_two: u32,
    /// Sum of own pieces over uncontested windows, One positive.
    pub potential: i64,
    pub empty_cells: usize,
}

impl ThreatSummary {
    /// Tally every window of a board that has no completed run.
    pub fn scan(board: &Board) -> Self {
        let connect = board.connect();
        let mut summary = ThreatSummary {
            empty_cells: board.empty_cells(),
            ..Default::default()
        };

        for window in board.windows() {
            let counts = window.counts();
            let (own, side) = match (counts.one, counts.two) {
                (one, 0) if one > 0 => (one, Player::One),
                (0, two) if two > 0 => (two, Player::Two),
                _ => continue,
            };

            match side {
                Player::One => summary.potential += own as i64,
                Player::Two => summary.potential -= own as i64,
            }

            if own + 1 == connect && counts.empty == 1 {
                let Some((row, col)) = window.first_empty() else {
                    continue;
                };
                if board.is_playable(row, col) {
                    summary.threats_mut(side).insert((row, col));
                } else {
                    *summary.floating_mut(side) += 1;
                }
            } else if own + 2 == connect && counts.empty == 2 {
                *summary.pairs_mut(side) += 1;
            }
        }

        summary
    }

    fn threats_mut(&mut self, side: Player) -> &mut HashSet<Coord> {
        match side {
            Player::One => &mut self.threats_one,
            Player::Two => &mut self.threats_two,
        }
    }

    fn floating_mut(&mut self, side: Player) -> &mut u32 {
        match side {
            Player::One => &mut self.floating_one,
            Player::Two => &mut self.floating_two,
        }
    }

    fn pairs_mut(&mut self, side: Player) -> &mut u32 {
        match side {
            Player::One => &mut self.pairs_one,
            Player::Two => &mut self.pairs_two,
        }
    }

    /// Two or more distinct winning cells: the opponent cannot cover both.
    pub fn has_double_threat(&self, side: Player) -> bool {
        match side {
            Player::One => self.threats_one.len() >= 2,
            Player::Two => self.threats_two.len() >= 2,
        }
    }

    /// Weighted sum, double threats first, raw potential last. Opponent
    /// immediate threats weigh ten times own ones.
    pub fn score(&self) -> f64 {
        let double_one = f64::from(u8::from(self.has_double_threat(Player::One)));
        let double_two = f64::from(u8::from(self.has_double_threat(Player::Two)));

        DOUBLE_THREAT_WEIGHT * double_one
            + OWN_THREAT_WEIGHT * self.threats_one.len() as f64
            + FLOATING_WEIGHT * f64::from(self.floating_one)
            + PAIR_WEIGHT * f64::from(self.pairs_one)
            + self.empty_cells as f64 * self.potential as f64
            - PAIR_WEIGHT * f64::from(self.pairs_two)
            - FLOATING_WEIGHT * f64::from(self.floating_two)
            - OPP_THREAT_WEIGHT * self.threats_two.len() as f64
            - DOUBLE_THREAT_WEIGHT * double_two
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_board(grid: &[Vec<u8>]) -> Board {
        Board::from_grid(grid, 4).unwrap()
    }

    fn bottom_row(values: [u8; 7]) -> Board {
        let mut grid = vec![vec![0; 7]; 6];
        grid[0] = values.to_vec();
        grid_board(&grid)
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::standard();
        assert_eq!(ThreatHeuristic.evaluate(&board), 0.0);
    }

    #[test]
    fn single_piece_scores_window_potential() {
        // Bottom-center cell sits in 7 windows; 41 empties remain.
        let board = bottom_row([0, 0, 0, 1, 0, 0, 0]);
        let summary = ThreatSummary::scan(&board);
        assert_eq!(summary.potential, 7);
        assert_eq!(summary.empty_cells, 41);
        assert_eq!(ThreatHeuristic.evaluate(&board), 287.0);
    }

    #[test]
    fn center_preferred_over_edge() {
        let center = bottom_row([0, 0, 0, 1, 0, 0, 0]);
        let edge = bottom_row([1, 0, 0, 0, 0, 0, 0]);
        let h = ThreatHeuristic;
        assert!(h.evaluate(&center) > h.evaluate(&edge));
    }

    #[test]
    fn mirrored_position_negates_score() {
        let one = bottom_row([0, 1, 1, 0, 0, 0, 0]);
        let two = bottom_row([0, 2, 2, 0, 0, 0, 0]);
        let h = ThreatHeuristic;
        assert_eq!(h.evaluate(&one), -h.evaluate(&two));
    }

    #[test]
    fn playable_three_is_a_threat() {
        let board = bottom_row([1, 1, 1, 0, 0, 0, 0]);
        let summary = ThreatSummary::scan(&board);
        assert_eq!(summary.threats_one, HashSet::from([(0, 3)]));
        assert_eq!(summary.floating_one, 0);
        assert_eq!(summary.pairs_one, 1);
        assert!(!summary.has_double_threat(Player::One));
    }

    #[test]
    fn unsupported_three_is_floating() {
        let grid = vec![
            vec![2, 2, 2, 0, 0, 0, 0],
            vec![1, 1, 1, 0, 0, 0, 0],
            vec![0; 7],
            vec![0; 7],
            vec![0; 7],
            vec![0; 7],
        ];
        let summary = ThreatSummary::scan(&grid_board(&grid));
        assert!(summary.threats_one.is_empty());
        assert_eq!(summary.floating_one, 1);
        assert_eq!(summary.threats_two, HashSet::from([(0, 3)]));
        assert_eq!(summary.floating_two, 0);
    }

    #[test]
    fn open_three_is_a_double_threat() {
        let board = bottom_row([0, 1, 1, 1, 0, 0, 0]);
        let summary = ThreatSummary::scan(&board);
        assert_eq!(summary.threats_one, HashSet::from([(0, 0), (0, 4)]));
        assert!(summary.has_double_threat(Player::One));
        assert!(ThreatHeuristic.evaluate(&board) > DOUBLE_THREAT_WEIGHT);
    }

    #[test]
    fn shared_winning_cell_counts_once() {
        // Four windows all complete on (0, 3).
        let board = bottom_row([1, 1, 1, 0, 1, 1, 1]);
        let summary = ThreatSummary::scan(&board);
        assert_eq!(summary.threats_one.len(), 1);
        assert!(!summary.has_double_threat(Player::One));
    }

    #[test]
    fn opponent_threat_outweighs_own_threat() {
        let summary = ThreatSummary {
            threats_one: HashSet::from([(0, 0)]),
            threats_two: HashSet::from([(0, 6)]),
            ..Default::default()
        };
        assert_eq!(summary.score(), OWN_THREAT_WEIGHT - OPP_THREAT_WEIGHT);
    }

    #[test]
    fn score_matches_weighted_formula() {
        let summary = ThreatSummary {
            threats_one: HashSet::from([(0, 0), (0, 4)]),
            threats_two: HashSet::from([(2, 2)]),
            floating_one: 2,
            floating_two: 1,
            pairs_one: 3,
            pairs_two: 4,
            potential: -5,
            empty_cells: 10,
        };
        let expected = 1e9 + 2.0 * 1e5 + 200.0 + 30.0 - 50.0 - 40.0 - 100.0 - 1e6;
        assert_eq!(summary.score(), expected);
    }

    #[test]
    fn win_sentinel_dominates_other_terms() {
        // One has won on the bottom row; Two holds threats elsewhere.
        let grid = vec![
            vec![1, 1, 1, 1, 2, 2, 0],
            vec![2, 2, 2, 0, 2, 0, 0],
            vec![0, 0, 0, 0, 2, 0, 0],
            vec![0; 7],
            vec![0; 7],
            vec![0; 7],
        ];
        let board = grid_board(&grid);
        assert_eq!(ThreatHeuristic.evaluate(&board), WIN_SCORE);

        let grid: Vec<Vec<u8>> = grid
            .iter()
            .map(|row| row.iter().map(|&v| if v == 0 { 0 } else { 3 - v }).collect())
            .collect();
        assert_eq!(ThreatHeuristic.evaluate(&grid_board(&grid)), -WIN_SCORE);
    }

    #[test]
    fn drawn_board_scores_between_sentinels() {
        let a = vec![1, 2, 1, 2, 1, 2, 1];
        let b = vec![2, 1, 2, 1, 2, 1, 2];
        let board = grid_board(&[a.clone(), a.clone(), b.clone(), b, a.clone(), a]);
        assert!(board.is_terminal());
        let score = ThreatHeuristic.evaluate(&board);
        assert!(score > -WIN_SCORE && score < WIN_SCORE);
        // A full board has no uncontested window left.
        assert_eq!(score, 0.0);
    }
}
