use broadside::{Game, Outcome, Phase, ShotState, Side};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::start(&mut rng)?;

    let mut player_shots = 0usize;
    let mut computer_shots = 0usize;

    while !game.is_over() {
        match game.phase() {
            Phase::PlayerTurn => {
                let Some((row, col)) = random_untried(&mut rng, &game) else { break };
                if game.player_fire(row, col)? != Outcome::Rejected {
                    player_shots += 1;
                }
            }
            Phase::ComputerTurn => {
                if game.computer_turn(&mut rng).is_some() {
                    computer_shots += 1;
                } else {
                    break;
                }
            }
            Phase::GameOver => break,
        }
    }

    let winner = game.winner().map(|side| match side {
        Side::Player => "player",
        Side::Computer => "computer",
    });

    let result = json!({
        "seed": seed,
        "winner": winner,
        "player_shots": player_shots,
        "computer_shots": computer_shots,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Stand-in for the human: a uniformly random untried cell from the fogged
/// tracking view, exactly what the real front-end has access to.
fn random_untried<R: Rng + ?Sized>(rng: &mut R, game: &Game) -> Option<(usize, usize)> {
    let cells = game.tracking_cells();
    let mut candidates = Vec::new();
    for (row, cells_row) in cells.iter().enumerate() {
        for (col, cell) in cells_row.iter().enumerate() {
            if cell.shot == ShotState::Untried {
                candidates.push((row, col));
            }
        }
    }
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
