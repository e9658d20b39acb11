//! CLI Big Two example: you against three computer players.
//!
//! Run with `RUST_LOG=info` to follow every play at the table.

use std::time::{SystemTime, UNIX_EPOCH};

use bigtwo::{Game, GameOptions, HumanStrategy, Player, StrategyKind};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Big Two CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut players = vec![Player::new("You", Box::new(HumanStrategy::stdio()))];
    for (i, kind) in [
        StrategyKind::Random,
        StrategyKind::Aggressive,
        StrategyKind::Conservative,
    ]
    .into_iter()
    .enumerate()
    {
        players.push(Player::new(
            format!("Computer {}", i + 1),
            kind.build(seed.wrapping_add(i as u64)),
        ));
    }

    let mut game = match Game::new(players, GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Could not start the game: {err}");
            return;
        }
    };

    match game.run() {
        Ok(winner) => println!("{} has won the game!", game.players()[winner].name),
        Err(err) => eprintln!("Game stopped: {err}"),
    }
}
