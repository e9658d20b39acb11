//! Combination classes and the predicates that recognise them.

use core::fmt;

use crate::card::{Card, Rank};

/// Combination class of a play.
///
/// The declared order is the coarse class rank. It is not the rule for
/// comparing plays; see [`Play::compare`](crate::Play::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardCombination {
    /// Not a combination.
    Invalid,
    /// No constraint yet: the start of a round.
    Any,
    /// One card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    Triple,
    /// A triple and a pair.
    FullHouse,
    /// Five cards of consecutive ranks.
    Straight,
    /// Four cards of the same rank and a kicker.
    FourOfAKind,
    /// A forfeited turn.
    Pass,
}

impl CardCombination {
    /// Real combination classes in move-search order.
    pub const PLAYABLE: [Self; 6] = [
        Self::Single,
        Self::Pair,
        Self::Triple,
        Self::FullHouse,
        Self::Straight,
        Self::FourOfAKind,
    ];

    /// Number of cards a play of this class holds.
    ///
    /// Returns `None` for [`CardCombination::Invalid`].
    #[must_use]
    pub const fn card_count(self) -> Option<usize> {
        match self {
            Self::Invalid => None,
            Self::Any | Self::Pass => Some(0),
            Self::Single => Some(1),
            Self::Pair => Some(2),
            Self::Triple => Some(3),
            Self::FullHouse | Self::Straight | Self::FourOfAKind => Some(5),
        }
    }

    /// Name in upper case, as shown in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Any => "ANY",
            Self::Single => "SINGLE",
            Self::Pair => "PAIR",
            Self::Triple => "TRIPLE",
            Self::FullHouse => "FULLHOUSE",
            Self::Straight => "STRAIGHT",
            Self::FourOfAKind => "FOUROFAKIND",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for CardCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts how many cards of each rank appear, indexed by [`Rank::index`].
#[must_use]
pub fn rank_counts(cards: &[Card]) -> [u8; Rank::ALL.len()] {
    let mut counts = [0u8; Rank::ALL.len()];
    for card in cards {
        counts[card.rank.index() as usize] += 1;
    }
    counts
}

/// Returns whether the cards are a single.
#[must_use]
pub const fn is_single(cards: &[Card]) -> bool {
    cards.len() == 1
}

/// Returns whether the cards are a pair.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

/// Returns whether the cards are a triple.
#[must_use]
pub fn is_triple(cards: &[Card]) -> bool {
    cards.len() == 3 && cards.iter().all(|c| c.rank == cards[0].rank)
}

/// Returns whether the cards are a straight.
///
/// Ranks must be strictly consecutive on the fixed 3..2 line, so J-Q-K-A-2
/// is the highest straight and nothing wraps around from 2 to 3.
#[must_use]
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let mut ranks = [0u8; 5];
    for (slot, card) in ranks.iter_mut().zip(cards) {
        *slot = card.rank.index();
    }
    ranks.sort_unstable();
    ranks.windows(2).all(|w| w[0] + 1 == w[1])
}

/// Returns whether the cards are a full house.
#[must_use]
pub fn is_full_house(cards: &[Card]) -> bool {
    if cards.len() != 5 {
        return false;
    }
    let counts = rank_counts(cards);
    let mut shape: [u8; 2] = [0; 2];
    let mut groups = 0;
    for &count in counts.iter().filter(|&&c| c > 0) {
        if groups == 2 {
            return false;
        }
        shape[groups] = count;
        groups += 1;
    }
    shape.sort_unstable();
    shape == [2, 3]
}

/// Returns whether the cards are a four of a kind with a kicker.
#[must_use]
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    cards.len() == 5 && rank_counts(cards).contains(&4)
}

/// Returns whether the cards form any real combination.
#[must_use]
pub fn is_valid_combination(cards: &[Card]) -> bool {
    identify_combination(cards) != CardCombination::Invalid
}

/// Classifies an unordered set of cards.
///
/// Five-card sets are tested as four of a kind, then straight, then full
/// house. Anything that matches no class, including sets of a size other
/// than 1, 2, 3 or 5, is [`CardCombination::Invalid`].
///
/// ```
/// use bigtwo::{Card, CardCombination, identify_combination};
///
/// let cards: Vec<Card> = ["JD", "QD", "KD", "AC", "2D"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(identify_combination(&cards), CardCombination::Straight);
/// ```
#[must_use]
pub fn identify_combination(cards: &[Card]) -> CardCombination {
    match cards.len() {
        1 => CardCombination::Single,
        2 if is_pair(cards) => CardCombination::Pair,
        3 if is_triple(cards) => CardCombination::Triple,
        5 if is_four_of_a_kind(cards) => CardCombination::FourOfAKind,
        5 if is_straight(cards) => CardCombination::Straight,
        5 if is_full_house(cards) => CardCombination::FullHouse,
        _ => CardCombination::Invalid,
    }
}
