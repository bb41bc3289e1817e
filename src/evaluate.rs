//! The static heuristic applied at the search's depth limit

use crate::board::{Axis, BoardState, Player};

/// Scores the cell most recently played by `player`
///
/// An isolated piece, with no same-symbol neighbour on any axis, scores
/// 0; otherwise the score is the longest run through the cell. This is a
/// one-ply measure of the local connectivity the move just created, only
/// consulted at leaf nodes.
pub fn evaluate(board: &BoardState, index: usize, player: Player) -> i32 {
    let longest = Axis::ALL
        .iter()
        .map(|&axis| board.run_length(index, axis, player))
        .max()
        .unwrap_or(1);

    if longest <= 1 {
        0
    } else {
        longest as i32
    }
}
