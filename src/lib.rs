//! # Connect Engine
//!
//! Move recommendation for Connect-4-style games on any rectangular board
//! with a configurable run length. Given a board and the side to move, the
//! engine takes an immediate win if one exists, otherwise runs a
//! depth-limited alpha-beta search over a threat-based evaluation and picks
//! uniformly among the equally best columns.
//!
//! ## Modules
//!
//! - [`game`] — Board model: gravity, move apply/revert, win detection, windows
//! - [`ai`] — Evaluation, alpha-beta search, move selection, engine facade
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use connect_engine::ai::recommend_move;
//! use connect_engine::game::{Board, Player};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let board = Board::standard();
//! let mut rng = StdRng::seed_from_u64(7);
//! assert_eq!(recommend_move(&board, Player::One, 1, &mut rng), Some(3));
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
