//! Player strategies.
//!
//! A strategy sees the legal candidates for the current turn and picks one,
//! or the pass sentinel. The orchestrator validates and commits the choice.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::hand::Hand;
use crate::observation::Observation;
use crate::options::LearningOptions;
use crate::play::Play;

mod aggressive;
mod conservative;
#[cfg(feature = "std")]
mod human;
mod qlearning;
mod random;

pub use aggressive::AggressiveStrategy;
pub use conservative::ConservativeStrategy;
#[cfg(feature = "std")]
pub use human::{HumanStrategy, parse_play};
pub use qlearning::{AgentStats, QLearningStrategy, Transition};
pub use random::RandomStrategy;

/// Everything a strategy may look at when choosing a play.
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    /// Legal plays for this turn, in generation order.
    pub candidates: Vec<Play>,
    /// The play to beat (`ANY` when leading).
    pub reference: &'a Play,
    /// Whether this is the first play of the game.
    pub opening: bool,
    /// The acting player's hand.
    pub hand: &'a Hand,
    /// The acting seat's view of the table.
    pub observation: Observation,
}

/// Chooses a play for a turn.
pub trait Strategy {
    /// Picks one of `ctx.candidates`, or [`Play::pass`].
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play;
}

/// The computer strategies, for building line-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Uniformly random candidate.
    Random,
    /// Strongest candidate.
    Aggressive,
    /// Sheds the most low cards.
    Conservative,
    /// Untrained tabular Q-learning agent.
    QLearning,
}

impl StrategyKind {
    /// Label used in player names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Aggressive => "Aggressive",
            Self::Conservative => "PlayItSafe",
            Self::QLearning => "RLAgent",
        }
    }

    /// Builds a boxed strategy; `seed` drives any randomness it uses.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Random => Box::new(RandomStrategy::new(seed)),
            Self::Aggressive => Box::new(AggressiveStrategy),
            Self::Conservative => Box::new(ConservativeStrategy),
            Self::QLearning => Box::new(QLearningStrategy::new(LearningOptions::default(), seed)),
        }
    }
}
