//! Board model: gravity grid, move application and reversal, win detection
//! and the window enumeration shared by win checks and evaluation.

mod board;
mod player;
mod window;

pub use board::{Board, Cell, Coord, COLS, CONNECT, ROWS};
pub use player::Player;
pub use window::{Direction, Window, WindowCounts};
