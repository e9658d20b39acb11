//! Game and learning configuration options.

/// Configuration options for a Big Two game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::GameOptions;
///
/// let options = GameOptions::default().with_two_player_deck_size(36);
/// assert_eq!(options.two_player_deck_size, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt in a two-player game. The rest of the shuffled deck is
    /// set aside.
    pub two_player_deck_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            two_player_deck_size: 42,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt in a two-player game.
    #[must_use]
    pub const fn with_two_player_deck_size(mut self, size: usize) -> Self {
        self.two_player_deck_size = size;
        self
    }
}

/// Hyperparameters of the tabular Q-learning strategy.
///
/// ```
/// use bigtwo::LearningOptions;
///
/// let options = LearningOptions::default()
///     .with_alpha(0.2)
///     .with_gamma(0.95)
///     .with_win_bonus(50.0);
/// assert_eq!(options.alpha, 0.2);
/// assert_eq!(options.gamma, 0.95);
/// assert_eq!(options.win_bonus, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningOptions {
    /// Learning rate.
    pub alpha: f64,
    /// Discount factor.
    pub gamma: f64,
    /// Exploration rate before any decay.
    pub initial_epsilon: f64,
    /// Decay speed of the exploration rate per step.
    pub epsilon_decay: f64,
    /// Exploration rate the decay approaches.
    pub final_epsilon: f64,
    /// Reward added on a winning terminal transition.
    pub win_bonus: f64,
}

impl Default for LearningOptions {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            initial_epsilon: 1.0,
            epsilon_decay: 0.1,
            final_epsilon: 0.1,
            win_bonus: 100.0,
        }
    }
}

impl LearningOptions {
    /// Sets the learning rate.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the discount factor.
    #[must_use]
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the initial exploration rate.
    #[must_use]
    pub const fn with_initial_epsilon(mut self, epsilon: f64) -> Self {
        self.initial_epsilon = epsilon;
        self
    }

    /// Sets the exploration decay speed.
    #[must_use]
    pub const fn with_epsilon_decay(mut self, decay: f64) -> Self {
        self.epsilon_decay = decay;
        self
    }

    /// Sets the exploration rate the decay approaches.
    #[must_use]
    pub const fn with_final_epsilon(mut self, epsilon: f64) -> Self {
        self.final_epsilon = epsilon;
        self
    }

    /// Sets the winning bonus.
    #[must_use]
    pub const fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }
}
