//! Mahoraga chess engine, minimal text driver.
//!
//! Reads moves as coordinate pairs (`e2e4`, `e7e8q`), answers with the
//! engine's reply. `restart` resets the game, `fen` prints the
//! position, `quit` exits.

use std::io::{self, BufRead};

use mahoraga::shakmaty::CastlingMode;
use mahoraga::{Game, PlayStatus};

fn main() {
    env_logger::init();

    println!("Mahoraga v0.1.0 - you play white, engine answers as black");
    println!("Enter moves like 'e2e4' (promotion: 'e7e8q'); 'fen', 'restart', 'quit'");

    let mut game = match Game::new(None) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("could not start a game: {err}");
            return;
        }
    };

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" => break,
            "fen" => {
                println!("{}", game.fen());
                continue;
            }
            "restart" => {
                game.restart();
                println!("new game");
                continue;
            }
            _ => {}
        }

        if !input.is_ascii() || input.len() < 4 || input.len() > 5 {
            println!("unrecognized input: {input}");
            continue;
        }
        let (from, rest) = input.split_at(2);
        let (to, promo) = rest.split_at(2);
        let promotion = promo.chars().next();

        match game.apply_player_move(from, to, promotion) {
            Ok(PlayStatus::GameOver) => {
                println!("game over: {}", game.fen());
                continue;
            }
            Ok(PlayStatus::Continue) => {}
            Err(err) => {
                println!("{err}");
                continue;
            }
        }

        match game.compute_engine_move() {
            Some(mv) => {
                println!("engine plays {}", mv.to_uci(CastlingMode::Standard));
                if game.is_game_over() {
                    println!("game over: {}", game.fen());
                }
            }
            None => println!("engine has no reply"),
        }
    }
}
