use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::play::Play;

use super::{Strategy, TurnContext};

/// Picks a candidate uniformly at random; passes when there is none.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play {
        ctx.candidates
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(Play::pass)
    }
}
