//! Game state types.

use crate::play::Play;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Players are taking turns.
    #[default]
    Playing,
    /// A player has emptied their hand.
    Finished,
}

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Seat that acted.
    pub seat: usize,
    /// The committed play, or the pass sentinel.
    pub play: Play,
    /// Whether every other seat had passed, so the table was cleared.
    pub round_over: bool,
    /// The winning seat, once the game is over.
    pub winner: Option<usize>,
}
