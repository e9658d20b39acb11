//! Classified plays and the rule for comparing them.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::combination::{CardCombination, identify_combination, rank_counts};
use crate::error::PlayError;

/// A classified set of cards in canonical order.
///
/// Construction places the decisive card last: pairs, triples and straights
/// are sorted ascending, a full house keeps its pair in front of its triple
/// and a four of a kind keeps its kicker in front of its quad.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Play {
    cards: Vec<Card>,
    combination: CardCombination,
}

impl Play {
    /// The "no constraint" reference at the start of a round.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            cards: Vec::new(),
            combination: CardCombination::Any,
        }
    }

    /// A forfeited turn.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            cards: Vec::new(),
            combination: CardCombination::Pass,
        }
    }

    /// Creates a play from cards and a declared combination.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination is `INVALID`, the card count does
    /// not match the combination, or the cards do not form it.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, CardCombination, Play};
    ///
    /// let cards: Vec<Card> = ["7C", "4S", "7D", "4C", "4H"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// let play = Play::new(cards, CardCombination::FullHouse).unwrap();
    /// assert_eq!(play.simplified(), "77444");
    /// ```
    pub fn new(cards: Vec<Card>, combination: CardCombination) -> Result<Self, PlayError> {
        let expected = combination
            .card_count()
            .ok_or(PlayError::InvalidCombination)?;
        if cards.len() != expected {
            return Err(PlayError::CardCountMismatch {
                combination,
                expected,
                found: cards.len(),
            });
        }
        if expected > 0 && identify_combination(&cards) != combination {
            return Err(PlayError::ShapeMismatch { combination });
        }
        Ok(Self::new_unchecked(cards, combination))
    }

    /// Classifies the cards and builds the play. No cards means a pass.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidCombination`] if the cards form no class.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, PlayError> {
        if cards.is_empty() {
            return Ok(Self::pass());
        }
        let combination = identify_combination(&cards);
        Self::new(cards, combination)
    }

    /// Canonicalises without validating. Callers guarantee the shape.
    pub(crate) fn new_unchecked(mut cards: Vec<Card>, combination: CardCombination) -> Self {
        debug_assert_ne!(combination, CardCombination::Invalid);
        debug_assert_eq!(combination.card_count(), Some(cards.len()));

        // Grouping by rank frequency puts the pair before the triple and the
        // kicker before the quad; it is plain ascending order otherwise.
        let counts = rank_counts(&cards);
        cards.sort_by_key(|c| (counts[c.rank.index() as usize], *c));

        Self { cards, combination }
    }

    /// Cards in canonical order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The combination class.
    #[must_use]
    pub const fn combination(&self) -> CardCombination {
        self.combination
    }

    /// The card compared against plays of the same class.
    #[must_use]
    pub fn decisive_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns whether this is a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.combination == CardCombination::Pass
    }

    /// Returns whether this is the "no constraint" reference.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.combination == CardCombination::Any
    }

    /// Returns whether the play contains the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The cards as a [`CardSet`].
    #[must_use]
    pub fn to_set(&self) -> CardSet {
        CardSet::from_cards(&self.cards)
    }

    /// Compares two plays.
    ///
    /// - `ANY` loses to every other play; two `ANY` plays are equal.
    /// - A four of a kind beats every play of another class.
    /// - Plays of two other different classes are incomparable (`None`).
    /// - Plays of the same class compare by their decisive card.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        use CardCombination::{Any, FourOfAKind};

        match (self.combination, other.combination) {
            (Any, Any) => Some(Ordering::Equal),
            (Any, _) => Some(Ordering::Less),
            (_, Any) => Some(Ordering::Greater),
            (FourOfAKind, FourOfAKind) => Some(self.decisive_card().cmp(&other.decisive_card())),
            (FourOfAKind, _) => Some(Ordering::Greater),
            (_, FourOfAKind) => Some(Ordering::Less),
            (mine, theirs) if mine == theirs => {
                Some(self.decisive_card().cmp(&other.decisive_card()))
            }
            _ => None,
        }
    }

    /// Returns whether `other` strictly beats this play.
    #[must_use]
    pub fn loses_to(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Returns whether this play strictly beats `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        other.loses_to(self)
    }

    /// Rank-only rendering, ten written as `T` (for example `TT333`).
    #[must_use]
    pub fn simplified(&self) -> String {
        self.cards.iter().map(|c| c.rank.short()).collect()
    }
}

impl Default for Play {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "] → {}", self.combination)
    }
}
