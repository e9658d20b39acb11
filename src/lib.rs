//! A Big Two card game engine with optional `no_std` support.
//!
//! The crate classifies card combinations, orders plays, generates every
//! legal play from a hand, and runs games between pluggable strategies.
//! [`BigTwoEnv`] exposes a single seat step by step for learning agents.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Game, GameOptions, StrategyKind};
//!
//! let kinds = [
//!     StrategyKind::Aggressive,
//!     StrategyKind::Conservative,
//!     StrategyKind::Random,
//!     StrategyKind::Random,
//! ];
//! let mut game = Game::with_strategies(&kinds, GameOptions::default(), 42).unwrap();
//! let winner = game.run().unwrap();
//! assert_eq!(game.winner(), Some(winner));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cardset;
pub mod combination;
pub mod deck;
pub mod env;
pub mod error;
pub mod game;
pub mod hand;
pub mod moves;
pub mod observation;
pub mod options;
pub mod play;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use cardset::CardSet;
pub use combination::{CardCombination, identify_combination, is_valid_combination};
pub use deck::Deck;
pub use env::{BigTwoEnv, INVALID_ACTION_REWARD, Step};
pub use error::{DealError, InputError, ParseCardError, PlayError, TurnError};
pub use game::{Game, GameState, Player, TurnOutcome};
pub use hand::Hand;
pub use moves::find_plays;
pub use observation::{Observation, ObservationKey};
pub use options::{GameOptions, LearningOptions};
pub use play::Play;
#[cfg(feature = "std")]
pub use strategy::HumanStrategy;
pub use strategy::{
    AggressiveStrategy, ConservativeStrategy, QLearningStrategy, RandomStrategy, Strategy,
    StrategyKind, TurnContext,
};
