use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use rand::Rng;

use std::io::{stdin, stdout, Write};

use connect_four::board::{BoardState, Cell, Player};
use connect_four::select::choose_move;
use connect_four::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Draw,
}

/// A live game: the board plus whose turn it is and whether it's over
pub struct Game {
    board: BoardState,
    pub to_move: Player,
    pub status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            to_move: Player::One,
            status: GameStatus::Playing,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Plays a 1-indexed column for the side to move and updates the
    /// game status; rejected moves leave the game untouched
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameStatus> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let player = self.to_move;
        let index = self
            .board
            .try_drop(column_one_indexed - 1, player)
            .map_err(|err| anyhow!("Invalid move, {}", err))?;

        if self.board.has_four(index, player) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
        self.to_move = player.other();

        Ok(self.status)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let cell = self.board.cell(BoardState::index_of(column, row));
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout.queue(MoveTo(pos_x, pos_y))?.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

/// The two ways a side can pick its column
pub enum Controller {
    Human,
    Computer,
}

impl Controller {
    pub fn is_computer(&self) -> bool {
        match self {
            Controller::Computer => true,
            Controller::Human => false,
        }
    }

    /// Returns the chosen 1-indexed column for the side to move
    pub fn choose_column<R: Rng>(&self, game: &Game, rng: &mut R) -> Result<usize> {
        match self {
            Controller::Human => {
                print!("Move input > ");
                stdout().flush()?;

                let mut input = String::new();
                stdin().read_line(&mut input)?;
                input
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| anyhow!("Invalid number: {}", input.trim()))
            }
            Controller::Computer => {
                println!("AI is thinking...");
                stdout().flush()?;

                Ok(choose_move(game.board(), game.to_move, rng) + 1)
            }
        }
    }
}
