//! A player's hand.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::error::TurnError;
use crate::moves;
use crate::play::Play;

/// A player's cards, kept sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand, sorting the cards.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in ascending order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the lowest card.
    #[must_use]
    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// The cards as a [`CardSet`].
    #[must_use]
    pub fn to_set(&self) -> CardSet {
        CardSet::from_cards(&self.cards)
    }

    /// Every play from this hand that beats `reference`.
    ///
    /// On the opening turn only plays containing the 3 of Diamonds remain.
    #[must_use]
    pub fn find_plays(&self, reference: &Play, opening: bool) -> Vec<Play> {
        moves::find_plays(&self.cards, reference, opening)
    }

    /// Checks that `play` may be committed from this hand now.
    ///
    /// # Errors
    ///
    /// Returns an error if the play is a pass while leading, uses cards not in
    /// the hand, misses the 3 of Diamonds on the opening turn, or does not
    /// beat `reference`.
    pub fn check_play(&self, reference: &Play, opening: bool, play: &Play) -> Result<(), TurnError> {
        if play.is_pass() {
            return if reference.is_any() {
                Err(TurnError::MustLead)
            } else {
                Ok(())
            };
        }

        let played = play.to_set();
        if played.len() != play.cards().len() || !self.to_set().is_superset(played) {
            return Err(TurnError::CardsNotInHand);
        }

        if opening && !play.contains(Card::OPENING) {
            return Err(TurnError::MissingOpeningCard);
        }

        if !play.beats(reference) {
            return Err(TurnError::DoesNotBeat);
        }

        Ok(())
    }

    /// Removes the cards of `play`. Nothing is removed unless all are held.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::CardsNotInHand`] if any card is missing.
    pub fn remove_play(&mut self, play: &Play) -> Result<(), TurnError> {
        let played = play.to_set();
        if played.len() != play.cards().len() || !self.to_set().is_superset(played) {
            return Err(TurnError::CardsNotInHand);
        }
        self.cards.retain(|&c| !played.contains(c));
        Ok(())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
