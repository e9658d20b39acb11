//! A step-wise environment for training an agent in one seat.
//!
//! The agent's actions come from outside through [`BigTwoEnv::step`]. The
//! other seats play through their own strategies until it is the agent's
//! turn again or the game ends.

use alloc::vec::Vec;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::game::Game;
use crate::observation::Observation;
use crate::play::Play;
use crate::strategy::TurnContext;

/// Reward for an action that cannot be played.
pub const INVALID_ACTION_REWARD: f64 = -1.0;

/// The result of one [`BigTwoEnv::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The agent's view after the step.
    pub observation: Observation,
    /// Reward for the action.
    pub reward: f64,
    /// Whether the game has ended.
    pub done: bool,
    /// Whether the agent won.
    pub won: bool,
}

/// Wraps a [`Game`] so that one seat is driven by external actions.
#[derive(Debug)]
pub struct BigTwoEnv {
    game: Game,
    agent_seat: usize,
}

impl BigTwoEnv {
    /// Drives `agent_seat` of `game` from outside and plays the other seats
    /// up to the agent's first turn. The strategy seated there is never
    /// consulted.
    ///
    /// # Panics
    ///
    /// Panics if `agent_seat` is not a seat of the game.
    #[must_use]
    pub fn new(game: Game, agent_seat: usize) -> Self {
        assert!(agent_seat < game.players().len(), "no seat {agent_seat}");
        let mut env = Self { game, agent_seat };
        env.advance_opponents();
        env
    }

    /// The wrapped game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The externally driven seat.
    #[must_use]
    pub const fn agent_seat(&self) -> usize {
        self.agent_seat
    }

    /// Deals a new game and plays the other seats up to the agent's first
    /// turn.
    pub fn reset(&mut self) -> Observation {
        self.game.setup();
        self.advance_opponents();
        self.observe()
    }

    /// The agent's current view.
    #[must_use]
    pub fn observe(&self) -> Observation {
        self.game.observe(self.agent_seat)
    }

    /// Whether the agent is the seat to act.
    #[must_use]
    pub fn is_agent_turn(&self) -> bool {
        !self.game.is_over() && self.game.current() == self.agent_seat
    }

    /// The agent's turn context, with its legal plays. Outside the agent's
    /// turn there are no candidates.
    #[must_use]
    pub fn context(&self) -> TurnContext<'_> {
        if self.is_agent_turn() {
            return self.game.turn_context();
        }
        TurnContext {
            candidates: Vec::new(),
            reference: self.game.reference(),
            opening: self.game.is_opening(),
            hand: &self.game.players()[self.agent_seat].hand,
            observation: self.observe(),
        }
    }

    /// Plays `action` for the agent; an empty set passes.
    ///
    /// An action that cannot be played right now, or any action outside the
    /// agent's turn, is answered with [`INVALID_ACTION_REWARD`] and leaves
    /// the game untouched.
    pub fn step(&mut self, action: CardSet) -> Step {
        if self.game.is_over() {
            return self.outcome(0.0);
        }
        if self.game.current() != self.agent_seat {
            log::warn!(
                "agent seat {} acted on seat {}'s turn",
                self.agent_seat,
                self.game.current()
            );
            return self.outcome(INVALID_ACTION_REWARD);
        }

        let play = if action.is_empty() {
            Ok(Play::pass())
        } else {
            Play::from_cards(action.iter().collect::<Vec<Card>>())
        };
        let applied = play
            .map_err(Into::into)
            .and_then(|play| self.game.apply(play));
        if let Err(err) = applied {
            log::debug!("agent action rejected: {err}");
            return self.outcome(INVALID_ACTION_REWARD);
        }

        self.advance_opponents();
        self.outcome(0.0)
    }

    fn outcome(&self, reward: f64) -> Step {
        Step {
            observation: self.observe(),
            reward,
            done: self.game.is_over(),
            won: self.game.winner() == Some(self.agent_seat),
        }
    }

    fn advance_opponents(&mut self) {
        while !self.game.is_over() && self.game.current() != self.agent_seat {
            if let Err(err) = self.game.play_turn() {
                log::warn!("seat {} made an illegal choice: {err}", self.game.current());
                let fallback = self
                    .game
                    .legal_plays()
                    .into_iter()
                    .next()
                    .unwrap_or_else(Play::pass);
                if self.game.apply(fallback).is_err() {
                    break;
                }
            }
        }
    }
}
