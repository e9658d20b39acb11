use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::hand::Hand;
use crate::strategy::Strategy;

/// A seat at the table: a name, a hand, and the strategy that plays it.
pub struct Player {
    /// Display name.
    pub name: String,
    /// Current cards. Replaced on every deal.
    pub hand: Hand,
    /// Picks this player's plays.
    pub strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::default(),
            strategy,
        }
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}
