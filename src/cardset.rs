//! Compact card sets.

use core::iter::FusedIterator;

use crate::card::{Card, DECK_SIZE};

/// A set of distinct cards stored as one bit per card.
///
/// Bit `n` is the card with [`Card::index`] `n`, so iteration yields cards in
/// their natural order.
///
/// ```
/// use bigtwo::{Card, CardSet};
///
/// let set: CardSet = ["3D", "2S"].iter().map(|s| s.parse::<Card>().unwrap()).collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Card::OPENING));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The full 52-card deck.
    pub const FULL: Self = Self((1 << DECK_SIZE) - 1);

    /// Creates a set from raw bits. Bits above 51 are dropped.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a set from cards. Duplicates collapse.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }

    /// Creates a set from one flag per card, indexed by [`Card::index`].
    #[must_use]
    pub fn from_flags(flags: &[bool; DECK_SIZE]) -> Self {
        flags
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .fold(Self::EMPTY, |acc, (index, _)| Self(acc.0 | 1 << index))
    }

    /// Returns one flag per card, indexed by [`Card::index`].
    #[must_use]
    pub fn to_flags(self) -> [bool; DECK_SIZE] {
        let mut flags = [false; DECK_SIZE];
        for card in self {
            flags[card.index() as usize] = true;
        }
        flags
    }

    /// Adds a card. Returns whether it was newly inserted.
    pub const fn insert(&mut self, card: Card) -> bool {
        let bit = 1 << card.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes a card. Returns whether it was present.
    pub const fn remove(&mut self, card: Card) -> bool {
        let bit = 1 << card.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Returns whether the card is in the set.
    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }

    /// Returns whether every card of `other` is in the set.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns whether two sets share no card.
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of cards in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Little-endian bytes of the bitmask.
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Iterates over the cards in natural order.
    #[must_use]
    pub const fn iter(self) -> Cards {
        Cards(self.0)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = Cards;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cards of a [`CardSet`], lowest first.
#[derive(Debug, Clone)]
pub struct Cards(u64);

impl Iterator for Cards {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Card::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cards {}

impl FusedIterator for Cards {}
