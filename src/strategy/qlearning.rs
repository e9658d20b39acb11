use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::cardset::CardSet;
use crate::observation::ObservationKey;
use crate::options::LearningOptions;
use crate::play::Play;

use super::{Strategy, TurnContext};

/// One step of experience for [`QLearningStrategy::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Observation the action was taken in.
    pub observation: ObservationKey,
    /// Cards played; empty for a pass.
    pub action: CardSet,
    /// Reward received.
    pub reward: f64,
    /// Observation after the step.
    pub next_observation: ObservationKey,
    /// Whether the game ended.
    pub done: bool,
    /// Whether the agent won the game.
    pub won: bool,
}

/// Size of a Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgentStats {
    /// Observations with at least one stored action value.
    pub states: usize,
    /// Stored (observation, action) values.
    pub actions: usize,
}

/// Epsilon-greedy tabular Q-learning over the legal candidates.
#[derive(Debug, Clone)]
pub struct QLearningStrategy {
    q_values: HashMap<ObservationKey, HashMap<CardSet, f64>>,
    options: LearningOptions,
    epsilon: f64,
    rng: ChaCha8Rng,
    history: Vec<Play>,
}

impl QLearningStrategy {
    /// Creates an agent with an empty table.
    #[must_use]
    pub fn new(options: LearningOptions, seed: u64) -> Self {
        Self {
            q_values: HashMap::new(),
            epsilon: options.initial_epsilon,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            history: Vec::new(),
        }
    }

    /// Current exploration rate.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Learning options.
    #[must_use]
    pub const fn options(&self) -> &LearningOptions {
        &self.options
    }

    /// Stored value of an action, zero if never updated.
    #[must_use]
    pub fn q_value(&self, observation: &ObservationKey, action: CardSet) -> f64 {
        self.q_values
            .get(observation)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Plays this agent has made, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Play] {
        &self.history
    }

    /// Number of states and action values in the table.
    #[must_use]
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            states: self.q_values.len(),
            actions: self.q_values.values().map(HashMap::len).sum(),
        }
    }

    /// Applies `Q(s,a) += alpha * (r + gamma * max Q(s',a') - Q(s,a))`.
    ///
    /// The future term is zero on a terminal step, and a win adds the
    /// configured bonus to the reward.
    pub fn update(&mut self, transition: &Transition) {
        let future = if transition.done {
            0.0
        } else {
            self.q_values
                .get(&transition.next_observation)
                .and_then(|actions| actions.values().copied().reduce(f64::max))
                .unwrap_or(0.0)
        };
        let reward = if transition.done && transition.won {
            transition.reward + self.options.win_bonus
        } else {
            transition.reward
        };

        let LearningOptions { alpha, gamma, .. } = self.options;
        let q = self
            .q_values
            .entry(transition.observation)
            .or_default()
            .entry(transition.action)
            .or_insert(0.0);
        *q += alpha * (reward + gamma * future - *q);
    }

    /// Sets epsilon for training step `step`, decaying hyperbolically from
    /// the initial rate towards the final rate.
    pub fn decay_epsilon(&mut self, step: u64) {
        let LearningOptions {
            initial_epsilon,
            final_epsilon,
            epsilon_decay,
            ..
        } = self.options;
        #[expect(
            clippy::cast_precision_loss,
            reason = "step counts stay far below 2^52"
        )]
        let step = step as f64;
        self.epsilon = final_epsilon + (initial_epsilon - final_epsilon) / (1.0 + epsilon_decay * step);
    }

    fn greedy(&mut self, ctx: &TurnContext<'_>) -> Option<Play> {
        let actions = self.q_values.get(&ctx.observation.key())?;

        let mut best = f64::NEG_INFINITY;
        let mut ties: Vec<&Play> = Vec::new();
        for play in &ctx.candidates {
            let q = actions.get(&play.to_set()).copied().unwrap_or(0.0);
            match q.total_cmp(&best) {
                core::cmp::Ordering::Greater => {
                    best = q;
                    ties.clear();
                    ties.push(play);
                }
                core::cmp::Ordering::Equal => ties.push(play),
                core::cmp::Ordering::Less => {}
            }
        }
        ties.choose(&mut self.rng).map(|&p| p.clone())
    }
}

impl Strategy for QLearningStrategy {
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play {
        if ctx.candidates.is_empty() {
            return Play::pass();
        }

        let explore = self.rng.random::<f64>() < self.epsilon;
        let greedy = if explore { None } else { self.greedy(ctx) };
        let chosen = match greedy {
            Some(play) => play,
            None => ctx
                .candidates
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_else(Play::pass),
        };

        if !chosen.is_pass() {
            self.history.push(chosen.clone());
        }
        chosen
    }
}
