//! Card types, rank and suit tables.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit, ordered Diamonds < Clubs < Hearts < Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in tiebreak order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Position of the suit in the tiebreak order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Suit at the given tiebreak position.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Card rank in Big Two order: 3 is the lowest, 2 the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// 2.
    Two,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Position of the rank in the Big Two sequence (3 = 0, 2 = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rank at the given position in the Big Two sequence.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Rank label as printed on the card (`10` for ten).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }

    /// Single-character label (`T` for ten).
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            Self::Two => '2',
            other => (b'3' + other.index()) as char,
        }
    }
}

/// A playing card.
///
/// Cards order by rank first and suit second, so the derived ordering is the
/// natural Big Two order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// The 3 of Diamonds, which must open every game.
    pub const OPENING: Self = Self::new(Rank::Three, Suit::Diamonds);

    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Position of the card in a sorted deck (0 = 3♦, 51 = 2♠).
    #[must_use]
    pub const fn index(self) -> u8 {
        4 * self.rank.index() + self.suit.index()
    }

    /// Card at the given position in a sorted deck.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match (Rank::from_index(index / 4), Suit::from_index(index % 4)) {
            (Some(rank), Some(suit)) => Some(Self::new(rank, suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses tokens such as `3D`, `10S`, `TS` or `A♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char.to_ascii_uppercase() {
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            'H' | '♥' => Suit::Hearts,
            'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::UnknownSuit),
        };

        let mut short = [0u8; 4];
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| {
                rank_part.eq_ignore_ascii_case(rank.label())
                    || rank_part.eq_ignore_ascii_case(rank.short().encode_utf8(&mut short))
            })
            .ok_or(ParseCardError::UnknownRank)?;

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
