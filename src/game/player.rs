use super::board::Cell;
use crate::error::GridError;

/// The two sides. `One` is the maximizer (piece value 1), `Two` the
/// minimizer (piece value 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Numeric piece value used on the external grid.
    pub fn piece(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse an external piece value. Only 1 and 2 are accepted.
    pub fn from_piece(piece: u8) -> Result<Player, GridError> {
        match piece {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(GridError::InvalidPiece(other)),
        }
    }

    /// Player One maximizes the evaluation, Player Two minimizes it.
    pub fn is_maximizer(self) -> bool {
        self == Player::One
    }
}
