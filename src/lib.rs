//! An automated opponent for the board game 'Connect 4'
//!
//! This agent uses a fixed-depth game tree search with a local
//! connectivity heuristic to pick a strong move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::board::{BoardState, Player};
//! use connect_four::select::choose_move;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = BoardState::new();
//! board.try_drop(3, Player::One)?;
//!
//! let reply = choose_move(&board, Player::Two, &mut rand::rng());
//! assert!(reply < connect_four::WIDTH);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluate;

pub mod search;

pub mod select;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of cells on the game board
pub const NUM_CELLS: usize = WIDTH * HEIGHT;

// run detection needs room for a four-in-a-row on every axis, and the
// opening bias trims two columns from each edge
const_assert!(WIDTH >= 5);
const_assert!(HEIGHT >= 4);
