use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect_four::board::Player;

mod game;
use game::*;

fn main() -> Result<()> {
    let stdin = stdin();
    let mut rng = rand::rng();

    println!("Welcome to Connect 4\n");

    loop {
        let mut controllers = (Controller::Human, Controller::Human);

        // choose AI control of player 1
        loop {
            let mut buffer = String::new();
            print!("Is player 1 AI controlled? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    controllers.0 = Controller::Computer;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }

        // choose AI control of player 2
        loop {
            let mut buffer = String::new();
            print!("Is player 2 AI controlled? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    controllers.1 = Controller::Computer;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }

        let mut game = Game::new();

        // game loop
        loop {
            game.display().expect("Failed to draw board!");

            match game.status {
                GameStatus::Playing => {
                    let controller = match game.to_move {
                        Player::One => &controllers.0,
                        Player::Two => &controllers.1,
                    };

                    // slow down play if both players are AI
                    if controllers.0.is_computer() && controllers.1.is_computer() {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let next_move = match controller.choose_column(&game, &mut rng) {
                        Ok(column) => column,
                        Err(err) => {
                            println!("{}", err);
                            // try the move again
                            continue;
                        }
                    };

                    if let Err(err) = game.play_checked(next_move) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }

                // end states
                GameStatus::Won(player) => {
                    let number = match player {
                        Player::One => 1,
                        Player::Two => 2,
                    };
                    println!("Player {} wins!", number);
                    break;
                }
                GameStatus::Draw => {
                    println!("Draw!");
                    break;
                }
            }
        }

        // offer a rematch
        let mut play_again = false;
        loop {
            let mut buffer = String::new();
            print!("Do you want to play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    play_again = true;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
        if !play_again {
            break;
        }
    }
    Ok(())
}
