//! Turns root search scores into a single chosen column

use rand::Rng;

use crate::board::{BoardState, Player};
use crate::search::Searcher;
use crate::WIDTH;

/// Below this many pieces on the board, play is biased toward the centre
pub const OPENING_PIECES: usize = 4;

// columns trimmed from each edge while the opening bias applies
const EDGE_TRIM: usize = 2;

/// Picks the column for `to_move` to play on `board`
///
/// Searches every playable column to the fixed depth, keeps the columns
/// that share the best score, applies the opening centre bias, and
/// breaks any remaining tie uniformly at random. The random source is
/// passed in so callers can seed it for reproducible games.
///
/// Calling this on a full board is a bug in the caller and panics.
pub fn choose_move<R: Rng>(board: &BoardState, to_move: Player, rng: &mut R) -> usize {
    assert!(!board.is_full(), "no column to choose on a full board");

    // the live board is never touched by search: score a scratch copy
    let mut searcher = Searcher::new(board.clone());
    let scored = searcher.score_root_moves(to_move);

    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .max()
        .expect("a non-full board always has a playable column");

    let mut candidates: Vec<usize> = scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(column, _)| column)
        .collect();

    // early on, drop the outer columns from the tie unless that would
    // leave nothing to play
    if board.num_moves() < OPENING_PIECES {
        let central: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&column| column >= EDGE_TRIM && column < WIDTH - EDGE_TRIM)
            .collect();
        if !central.is_empty() {
            candidates = central;
        }
    }

    if candidates.len() > 1 {
        candidates[rng.random_range(0..candidates.len())]
    } else {
        candidates[0]
    }
}
