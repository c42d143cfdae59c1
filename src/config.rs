use std::path::Path;

use crate::ai::{MoveMode, DEFAULT_DEPTH};
use crate::error::{ConfigError, GridError};
use crate::game::{Board, COLS, CONNECT, ROWS};

/// Deepest search the configuration accepts. Cost grows roughly as
/// `columns^depth`.
pub const MAX_DEPTH: usize = 12;

/// Search parameters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root
    pub depth: usize,
    /// How child positions are produced during search
    pub mode: MoveMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            mode: MoveMode::default(),
        }
    }
}

/// Board shape.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    /// Run length needed to win
    pub connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            columns: COLS,
            connect: CONNECT,
        }
    }
}

impl BoardConfig {
    /// Build a board from raw grid values (`grid[0]` is the bottom row),
    /// rejecting grids whose shape differs from this one.
    pub fn board_from_grid(&self, grid: &[Vec<u8>]) -> Result<Board, GridError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows != self.rows || cols != self.columns {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                expected_rows: self.rows,
                expected_cols: self.columns,
            });
        }
        Board::from_grid(grid, self.connect)
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed seed for tie-breaking; entropy from the OS when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub search: SearchConfig,
    pub board: BoardConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 1".into(),
            ));
        }
        let longest = self.board.rows.max(self.board.columns);
        if self.board.connect == 0 || self.board.connect > longest {
            return Err(ConfigError::Validation(
                "board.connect must be in [1, max(rows, columns)]".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
