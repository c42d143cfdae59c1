use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::game::{Board, Player};

use super::selector::MoveSelector;
use super::strategy::{CopyOnMove, InPlace, MoveMode};

/// Configured move recommender. Owns its random source; holds no search
/// state between calls.
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
}

impl Engine {
    /// Build an engine from a configuration that has already been validated.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Engine { config, rng }
    }

    /// Validate `config`, then build the engine.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend a column for `player`, or `None` if the game is over.
    pub fn recommend(&mut self, board: &Board, player: Player) -> Option<usize> {
        let mut board = board.clone();
        let depth = self.config.search.depth;
        match self.config.search.mode {
            MoveMode::InPlace => MoveSelector::with_strategy(InPlace).recommend(
                &mut board,
                player,
                depth,
                &mut self.rng,
            ),
            MoveMode::CopyOnMove => MoveSelector::with_strategy(CopyOnMove).recommend(
                &mut board,
                player,
                depth,
                &mut self.rng,
            ),
        }
    }

    /// Validate a raw grid (`grid[0]` is the bottom row) against the
    /// configured board shape and run length, then recommend a column for
    /// `piece`.
    pub fn recommend_grid(
        &mut self,
        grid: &[Vec<u8>],
        piece: u8,
    ) -> Result<Option<usize>, EngineError> {
        let player = Player::from_piece(piece)?;
        let board = self.config.board.board_from_grid(grid)?;
        Ok(self.recommend(&board, player))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
