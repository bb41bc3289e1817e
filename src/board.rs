use thiserror::Error;

use crate::{HEIGHT, NUM_CELLS, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// A move that the rules reject, to be re-prompted by the caller
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("column {0} out of range, columns must be between 0 and 6")]
    OutOfRange(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// One of the four lines a four-in-a-row can lie on
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalRising,
    DiagonalFalling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalRising,
        Axis::DiagonalFalling,
    ];

    // one step along the axis in (column, row) deltas; the opposite
    // direction is the negation
    fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalRising => (1, 1),
            Axis::DiagonalFalling => (1, -1),
        }
    }
}

/// The full state of a game board: a column-major cell grid plus the
/// history of placed cell indices, oldest first
///
/// Cells are addressed by `index = column * HEIGHT + row` with row 0 at
/// the bottom, so stepping an index by `HEIGHT` moves one column along a
/// row and stepping by 1 moves one row up a column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BoardState {
    cells: [Cell; NUM_CELLS],
    history: Vec<usize>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
            history: Vec::with_capacity(NUM_CELLS),
        }
    }

    pub fn index_of(column: usize, row: usize) -> usize {
        column * HEIGHT + row
    }
    pub fn column_of(index: usize) -> usize {
        index / HEIGHT
    }
    pub fn row_of(index: usize) -> usize {
        index % HEIGHT
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// The number of pieces placed so far
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// The cell index of the most recently placed piece
    pub fn last_move(&self) -> Option<usize> {
        self.history.last().copied()
    }

    pub fn is_full(&self) -> bool {
        self.history.len() == NUM_CELLS
    }

    /// Finds the cell a piece dropped into `column` would land on,
    /// without placing anything
    pub fn drop_target(&self, column: usize) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange(column));
        }
        (0..HEIGHT)
            .map(|row| Self::index_of(column, row))
            .find(|&index| self.cells[index].is_empty())
            .ok_or(MoveError::ColumnFull(column))
    }

    /// Sets an empty cell and records it in the move history
    ///
    /// Placing onto an occupied cell is a bug in the caller, not bad
    /// input, and panics.
    pub fn place(&mut self, index: usize, player: Player) {
        assert!(
            self.cells[index].is_empty(),
            "cell {} is already occupied",
            index
        );
        self.cells[index] = player.cell();
        self.history.push(index);
    }

    /// Retracts the most recent placement, which must be at `index`
    ///
    /// Only the search uses this, to restore its scratch board; the live
    /// game board is never rolled back.
    pub fn undo_last(&mut self, index: usize) {
        let last = self.history.pop();
        assert_eq!(last, Some(index), "undo does not match the last move");
        self.cells[index] = Cell::Empty;
    }

    /// Drops a piece into `column`: the whole-move entry point, wrapping
    /// [`drop_target`](Self::drop_target) and [`place`](Self::place)
    pub fn try_drop(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        let index = self.drop_target(column)?;
        self.place(index, player);
        Ok(index)
    }

    /// Counts the contiguous run of `player`'s cells through `index`
    /// along `axis`, including the cell at `index` itself, capped at 4
    ///
    /// The cell at `index` is counted for `player` whether or not it is
    /// occupied, so a drop square can be probed before placing: this is
    /// what the search's immediate-win check relies on.
    pub fn run_length(&self, index: usize, axis: Axis, player: Player) -> usize {
        let (dc, dr) = axis.step();
        let run = 1 + self.extent(index, player, dc, dr) + self.extent(index, player, -dc, -dr);
        run.min(4)
    }

    // steps away from `index` by (dc, dr) while the cells match,
    // bounding column and row independently so diagonals never wrap
    // across a board edge
    fn extent(&self, index: usize, player: Player, dc: i32, dr: i32) -> usize {
        let mut column = Self::column_of(index) as i32;
        let mut row = Self::row_of(index) as i32;
        let mut count = 0;
        loop {
            column += dc;
            row += dr;
            if column < 0 || column >= WIDTH as i32 || row < 0 || row >= HEIGHT as i32 {
                break;
            }
            if self.cells[Self::index_of(column as usize, row as usize)] != player.cell() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Whether `player` has four-in-a-row through `index` on any axis
    pub fn has_four(&self, index: usize, player: Player) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.run_length(index, axis, player) >= 4)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
