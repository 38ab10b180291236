use std::io::{self, BufRead, Write};

use broadside::{
    format_coord, parse_coord, render_own_board, render_tracking_board, Game, Outcome, Phase,
    Side, FLEET, NUM_SHIPS,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Play Battleship against the computer in your terminal.")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    if let Some(seed) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", seed);
    }

    let mut game = Game::start(&mut rng)?;
    println!("Sink all five computer ships before yours go down.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                println!("\nComputer waters:");
                print!("{}", render_tracking_board(&game));
                println!("\nYour waters:");
                print!("{}", render_own_board(&game));
                print!("\nYour shot (e.g. B4, or 'quit'): ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else { break };
                let line = line?;
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
                let Some((row, col)) = parse_coord(input) else {
                    println!("Could not read '{input}' as a coordinate like B4.");
                    continue;
                };

                let sunk_before = game.computer_ships_sunk();
                match game.player_fire(row, col)? {
                    Outcome::Hit => {
                        println!("Hit!");
                        let sunk_after = game.computer_ships_sunk();
                        for i in 0..NUM_SHIPS {
                            if sunk_after[i] && !sunk_before[i] {
                                println!("You sank the {}!", FLEET[i].name());
                            }
                        }
                    }
                    Outcome::Miss => println!("Miss."),
                    Outcome::Rejected => {
                        println!("You already fired at {}. Pick another cell.", format_coord(row, col));
                    }
                }
            }
            Phase::ComputerTurn => {
                let Some((row, col, outcome)) = game.computer_turn(&mut rng) else { break };
                match outcome {
                    Outcome::Hit => {
                        println!("Computer fires at {} and hits!", format_coord(row, col));
                        let hit_ship = game
                            .player_board()
                            .ships()
                            .iter()
                            .flatten()
                            .find(|ship| ship.contains(row, col));
                        if let Some(ship) = hit_ship {
                            if ship.is_sunk() {
                                println!("Your {} went down.", ship.class().name());
                            }
                        }
                    }
                    Outcome::Miss => {
                        println!("Computer fires at {} and misses.", format_coord(row, col));
                    }
                    Outcome::Rejected => {}
                }
            }
            Phase::GameOver => break,
        }
    }

    println!("\nFinal state of your waters:");
    print!("{}", render_own_board(&game));
    match game.winner() {
        Some(Side::Player) => println!("\nVictory! Every computer ship is sunk."),
        Some(Side::Computer) => println!("\nDefeat. The computer sank your fleet."),
        None => println!("\nGame abandoned."),
    }
    Ok(())
}
