//! Error types for game operations.

use thiserror::Error;

use crate::combination::CardCombination;

/// Errors that can occur while constructing a [`Play`](crate::Play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The `INVALID` combination can never be carried by a play.
    #[error("a play cannot carry the INVALID combination")]
    InvalidCombination,
    /// The number of cards does not match the combination.
    #[error("{combination} takes {expected} card(s), got {found}")]
    CardCountMismatch {
        /// Declared combination.
        combination: CardCombination,
        /// Cards the combination requires.
        expected: usize,
        /// Cards supplied.
        found: usize,
    },
    /// The cards do not form the declared combination.
    #[error("cards do not form a {combination}")]
    ShapeMismatch {
        /// Declared combination.
        combination: CardCombination,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than two players.
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),
    /// More than four players.
    #[error("at most 4 players are supported, got {0}")]
    TooManyPlayers(usize),
    /// The reduced two-player deck cannot give every seat a card.
    #[error("deck of {0} cards is too small to deal")]
    DeckTooSmall(usize),
}

/// Errors that can occur when a player commits a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
    /// The play uses cards the player does not hold.
    #[error("play uses cards that are not in the hand")]
    CardsNotInHand,
    /// The opening play of the game must contain the 3 of Diamonds.
    #[error("the opening play must include the 3 of Diamonds")]
    MissingOpeningCard,
    /// The play does not beat the play on the table.
    #[error("play does not beat the last play")]
    DoesNotBeat,
    /// Passing is not allowed when leading a round.
    #[error("cannot pass when leading a round")]
    MustLead,
    /// The play could not be constructed.
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Errors that can occur while reading a human player's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("no cards selected")]
    Empty,
    /// A token is not a number.
    #[error("enter numbers separated by spaces or 'pass'")]
    NotANumber,
    /// An index is outside the hand.
    #[error("index {index} is out of range (hand has {len} cards)")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Hand size.
        len: usize,
    },
    /// The same index was entered twice.
    #[error("index {0} selected more than once")]
    DuplicateIndex(usize),
    /// The selected cards are not a valid combination.
    #[error("selected cards are not a valid combination")]
    Unclassifiable,
    /// The play is well-formed but not allowed now.
    #[error(transparent)]
    Rejected(#[from] TurnError),
}

/// Errors that can occur while parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Empty input.
    #[error("empty card")]
    Empty,
    /// Unrecognised rank.
    #[error("unknown rank")]
    UnknownRank,
    /// Unrecognised suit.
    #[error("unknown suit")]
    UnknownSuit,
}
