//! Plays many seeded games and reports how often the first seat wins for a
//! few strategy line-ups.

use bigtwo::StrategyKind::{Aggressive, Conservative, Random};
use bigtwo::{Game, GameOptions, StrategyKind};

const GAMES: u64 = 1000;

fn wins_for_first_seat(kinds: &[StrategyKind]) -> u64 {
    let mut wins = 0;
    for seed in 0..GAMES {
        let mut game = match Game::with_strategies(kinds, GameOptions::default(), seed) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("Could not start the game: {err}");
                return wins;
            }
        };
        match game.run() {
            Ok(0) => wins += 1,
            Ok(_) => {}
            Err(err) => eprintln!("Game {seed} stopped: {err}"),
        }
    }
    wins
}

fn main() {
    env_logger::init();

    let lineups: [(&str, &[StrategyKind]); 4] = [
        ("Random vs 3 random", &[Random, Random, Random, Random]),
        ("Aggressive vs 3 random", &[Aggressive, Random, Random, Random]),
        ("PlayItSafe vs 3 random", &[Conservative, Random, Random, Random]),
        ("PlayItSafe vs 1 random", &[Conservative, Random]),
    ];

    for (label, kinds) in lineups {
        let wins = wins_for_first_seat(kinds);
        println!("{label}: won {wins}/{GAMES} games");
    }
}
