//! Fixed-depth negamax search with alpha-beta pruning

use crate::board::{BoardState, Player};
use crate::evaluate::evaluate;
use crate::WIDTH;

/// A sentinel below every reachable score: no real score leaves [-4, 4]
pub const SCORE_MIN: i32 = -5;
/// A sentinel above every reachable score
pub const SCORE_MAX: i32 = 5;
/// The score of a completed four-in-a-row
pub const WIN_SCORE: i32 = 4;

/// The number of plies searched below the root
///
/// Raising this trades time for playing strength with no correctness
/// implications; recursion depth stays bounded by the ply count.
pub const SEARCH_DEPTH: usize = 7;

/// Returns an array ordering the columns from the middle outwards, as
/// the middle columns are often better moves and searching them first
/// tightens the pruning window early
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

/// An agent to search Connect 4 positions to a fixed depth
///
/// # Notes
/// The `Searcher` owns a scratch copy of the game board, exclusively
/// held by the in-flight search: every node places a move, recurses and
/// retracts it before returning, so the scratch board is restored to its
/// entry state at every level of the stack.
///
/// # Position Scoring
/// Scores are from the perspective of the side to move at each node, in
/// the negamax convention. An immediate four-in-a-row scores
/// [`WIN_SCORE`], a full board scores 0, and positions at the depth
/// limit take the static evaluation of the last move played.
pub struct Searcher {
    board: BoardState,

    /// The number of nodes visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` over its own scratch copy of `board`
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Performs game tree search to `depth` plies
    ///
    /// Returns the score of the position within the `[alpha, beta]`
    /// window, from the perspective of `to_move` (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    pub fn negamax(&mut self, depth: usize, mut alpha: i32, beta: i32, to_move: Player) -> i32 {
        self.node_count += 1;

        // a full board is a draw
        if self.board.is_full() {
            return 0;
        }

        // at the depth limit, fall back to the static heuristic on the
        // cell the opponent just played into
        if depth == 0 {
            let last = self
                .board
                .last_move()
                .expect("depth limit reached on an empty board");
            return evaluate(&self.board, last, to_move);
        }

        // check for a next-move win for the current player before
        // recursing; this catches forced wins one ply early
        for column in 0..WIDTH {
            if let Ok(index) = self.board.drop_target(column) {
                if self.board.has_four(index, to_move) {
                    return WIN_SCORE;
                }
            }
        }

        // search the next level of the tree
        let mut best = SCORE_MIN;
        for &column in move_order().iter() {
            let index = match self.board.drop_target(column) {
                Ok(index) => index,
                Err(_) => continue,
            };
            self.board.place(index, to_move);
            // the search window is flipped for the other player
            let score = -self.negamax(depth - 1, -beta, -alpha, to_move.other());
            self.board.undo_last(index);

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            // the remaining siblings cannot improve on a score the
            // opponent already refuses
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Performs the top-level search, scoring every playable column
    ///
    /// Every root candidate is searched with the full score window so
    /// the returned `(column, score)` pairs are exact for all columns,
    /// not just the best one: the move selector needs true ties.
    pub fn score_root_moves(&mut self, to_move: Player) -> Vec<(usize, i32)> {
        self.node_count += 1;

        let mut scored = Vec::with_capacity(WIDTH);
        for &column in move_order().iter() {
            let index = match self.board.drop_target(column) {
                Ok(index) => index,
                Err(_) => continue,
            };

            let score = if self.board.has_four(index, to_move) {
                // immediate win, no need to look deeper
                WIN_SCORE
            } else {
                self.board.place(index, to_move);
                let score = -self.negamax(SEARCH_DEPTH - 1, -SCORE_MAX, -SCORE_MIN, to_move.other());
                self.board.undo_last(index);
                score
            };
            scored.push((column, score));
        }
        scored
    }
}
