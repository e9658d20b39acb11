//! Legal move generation.
//!
//! Every search works on a hand sorted in natural card order and returns
//! fresh [`Play`] values; the hand is never touched.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::CardCombination;
use crate::play::Play;

mod quads;
mod same_rank;
mod straight;

/// Returns every play from a sorted hand that beats `reference`.
///
/// Against `ANY` all six classes are searched. Otherwise only the
/// reference's own class is searched, plus four of a kinds, which beat any
/// other class. On the opening turn plays without the 3 of Diamonds are
/// dropped.
///
/// ```
/// use bigtwo::{Card, Play, moves};
///
/// let mut hand: Vec<Card> = ["3D", "3S", "4C", "9H"].iter().map(|s| s.parse().unwrap()).collect();
/// hand.sort();
/// let reference = Play::from_cards(vec!["4S".parse().unwrap()]).unwrap();
/// let plays = moves::find_plays(&hand, &reference, false);
/// assert_eq!(plays.len(), 1);
/// ```
#[must_use]
pub fn find_plays(hand: &[Card], reference: &Play, opening: bool) -> Vec<Play> {
    use CardCombination::{Any, FourOfAKind, FullHouse, Invalid, Pair, Pass, Single, Straight, Triple};

    debug_assert!(hand.is_sorted(), "hand must be sorted");

    let searches: &[CardCombination] = match reference.combination() {
        Any => &CardCombination::PLAYABLE,
        Single => &[Single, FourOfAKind],
        Pair => &[Pair, FourOfAKind],
        Triple => &[Triple, FourOfAKind],
        FullHouse => &[FullHouse, FourOfAKind],
        Straight => &[Straight, FourOfAKind],
        FourOfAKind => &[FourOfAKind],
        // Neither ever becomes the reference on the table.
        Invalid | Pass => &[],
    };

    let mut plays = Vec::new();
    for &combination in searches {
        match combination {
            Single => singles(hand, reference, &mut plays),
            Pair => plays.extend(same_rank::sets(hand, reference.decisive_card(), 2)),
            Triple => plays.extend(same_rank::sets(hand, reference.decisive_card(), 3)),
            FullHouse => same_rank::full_houses(hand, reference, &mut plays),
            Straight => straight::straights(hand, reference, &mut plays),
            FourOfAKind => quads::four_of_a_kinds(hand, reference, &mut plays),
            Invalid | Any | Pass => {}
        }
    }

    if opening {
        plays.retain(|p| p.contains(Card::OPENING));
    }
    plays
}

fn singles(hand: &[Card], reference: &Play, plays: &mut Vec<Play>) {
    let start = reference
        .decisive_card()
        .map_or(0, |floor| hand.partition_point(|&c| c <= floor));
    plays.extend(
        hand[start..]
            .iter()
            .map(|&c| Play::new_unchecked(alloc::vec![c], CardCombination::Single)),
    );
}

/// Calls `emit` with every `k`-card combination of `items`, in
/// lexicographic index order.
fn combinations<F: FnMut(&[Card])>(items: &[Card], k: usize, emit: &mut F) {
    fn walk<F: FnMut(&[Card])>(
        items: &[Card],
        k: usize,
        start: usize,
        chosen: &mut Vec<Card>,
        emit: &mut F,
    ) {
        if chosen.len() == k {
            emit(chosen);
            return;
        }
        let needed = k - chosen.len();
        for i in start..=items.len().saturating_sub(needed) {
            chosen.push(items[i]);
            walk(items, k, i + 1, chosen, emit);
            chosen.pop();
        }
    }

    if k == 0 || items.len() < k {
        return;
    }
    let mut chosen = Vec::with_capacity(k);
    walk(items, k, 0, &mut chosen, emit);
}
