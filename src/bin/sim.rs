use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use battleship_engine::{init_logging, Game, GameConfig, GameState, BOARD_SIZE};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Play seeded games between a random-firing player and the computer and
/// print one JSON summary per game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let base = match cli.seed {
        Some(s) => GameConfig::with_seed(s),
        None => GameConfig::from_env(),
    };

    for round in 0..cli.games {
        let seed = base.seed.wrapping_add(round as u64);
        let mut game = Game::new(GameConfig::with_seed(seed).board_size(cli.size));
        let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));

        let gameovers = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&gameovers);
        game.set_on_gameover(move |_| counter.set(counter.get() + 1));

        game.start_game().context("starting game")?;
        game.start_turn().context("starting first turn")?;

        while game.state() != GameState::GameOver {
            let targets = game.computer_board().unshot_cells();
            let (x, y) = targets[shooter.random_range(0..targets.len())];
            game.shoot(x, y)?;
            if game.state() == GameState::GameOver {
                break;
            }
            game.computer_shoot()?;
        }

        let stats = game.stats();
        let result = json!({
            "seed": seed,
            "winner": game.winner().code(),
            "turns": stats.turns,
            "hits": stats.hits,
            "misses": stats.misses,
            "player_alives": game.player_board().alives(),
            "computer_alives": game.computer_board().alives(),
            "gameover_calls": gameovers.get(),
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
