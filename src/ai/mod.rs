mod engine;
pub mod heuristic;
pub mod search;
mod selector;
pub mod strategy;

pub use engine::Engine;
pub use heuristic::{Heuristic, ThreatHeuristic, ThreatSummary, WIN_SCORE};
pub use search::{SearchOutcome, SearchStats, Searcher};
pub use selector::{
    find_winning_move, recommend_from_grid, recommend_move, MoveSelector, DEFAULT_DEPTH,
};
pub use strategy::{CopyOnMove, InPlace, MoveMode, MoveStrategy};
