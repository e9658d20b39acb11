//! The 52-card deck and dealing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;

/// A shuffled deck of cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with the given generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a full deck shuffled from a seed.
    ///
    /// ```
    /// use bigtwo::Deck;
    ///
    /// let a = Deck::from_seed(7);
    /// let b = Deck::from_seed(7);
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Keeps only the first `len` cards.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Deals round-robin into `players` sorted hands, consuming the deck.
    ///
    /// Returns no hands when `players` is zero.
    #[must_use]
    pub fn deal(self, players: usize) -> Vec<Hand> {
        if players == 0 {
            return Vec::new();
        }
        let mut piles: Vec<Vec<Card>> = (0..players)
            .map(|_| Vec::with_capacity(self.cards.len().div_ceil(players)))
            .collect();
        for (i, card) in self.cards.into_iter().enumerate() {
            piles[i % players].push(card);
        }
        piles.into_iter().map(Hand::new).collect()
    }
}
