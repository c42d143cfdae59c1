use std::path::PathBuf;

/// Errors raised when building a board from caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("piece at ({row}, {col}) floats above an empty cell")]
    FloatingPiece { row: usize, col: usize },

    #[error("connect length {connect} does not fit a {rows}x{cols} grid")]
    InvalidConnect {
        connect: usize,
        rows: usize,
        cols: usize,
    },

    #[error("piece must be 1 or 2, got {0}")]
    InvalidPiece(u8),

    #[error("grid is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors surfaced by the engine's boundary entry points.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
