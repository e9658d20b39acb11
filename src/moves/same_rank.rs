use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::CardCombination;
use crate::play::Play;

use super::combinations;

/// Pairs (`size` 2) or triples (`size` 3) whose top card is above `floor`.
///
/// Scanning starts at the first card of the floor's rank, since a set of
/// that rank can still win on suit.
pub(super) fn sets(hand: &[Card], floor: Option<Card>, size: usize) -> Vec<Play> {
    debug_assert!(size == 2 || size == 3, "only pairs and triples share a rank");
    let combination = if size == 2 {
        CardCombination::Pair
    } else {
        CardCombination::Triple
    };

    let start = floor.map_or(0, |f| hand.partition_point(|c| c.rank < f.rank));

    let mut plays = Vec::new();
    for run in hand[start..].chunk_by(|a, b| a.rank == b.rank) {
        if run.len() < size {
            continue;
        }
        combinations(run, size, &mut |cards| {
            if floor.is_none_or(|f| cards[size - 1] > f) {
                plays.push(Play::new_unchecked(cards.to_vec(), combination));
            }
        });
    }
    plays
}

/// Full houses whose triple beats the reference's triple.
///
/// The pair never matters for ranking, so every pair in the hand is tried
/// against every qualifying triple of another rank.
pub(super) fn full_houses(hand: &[Card], reference: &Play, plays: &mut Vec<Play>) {
    if hand.len() < 5 {
        return;
    }

    let floor = match reference.combination() {
        CardCombination::FullHouse => reference.decisive_card(),
        _ => None,
    };
    let pairs = sets(hand, None, 2);
    let triples = sets(hand, floor, 3);

    for pair in &pairs {
        for triple in &triples {
            if pair.cards()[0].rank == triple.cards()[0].rank {
                continue;
            }
            let mut cards = Vec::with_capacity(5);
            cards.extend_from_slice(pair.cards());
            cards.extend_from_slice(triple.cards());
            plays.push(Play::new_unchecked(cards, CardCombination::FullHouse));
        }
    }
}
