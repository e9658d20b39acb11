use alloc::vec::Vec;

use crate::card::Card;
use crate::combination::CardCombination;
use crate::play::Play;

/// Four of a kinds, one per (quad, kicker) pair.
///
/// Against another four of a kind only quads of a higher rank qualify.
pub(super) fn four_of_a_kinds(hand: &[Card], reference: &Play, plays: &mut Vec<Play>) {
    let floor = match reference.combination() {
        CardCombination::FourOfAKind => reference.decisive_card().map(|c| c.rank),
        _ => None,
    };

    let mut start = 0;
    for run in hand.chunk_by(|a, b| a.rank == b.rank) {
        let quad = start..start + run.len();
        start = quad.end;

        if run.len() != 4 || floor.is_some_and(|f| run[0].rank <= f) {
            continue;
        }

        for (i, &kicker) in hand.iter().enumerate() {
            if quad.contains(&i) {
                continue;
            }
            let mut cards = Vec::with_capacity(5);
            cards.extend_from_slice(run);
            cards.push(kicker);
            plays.push(Play::new_unchecked(cards, CardCombination::FourOfAKind));
        }
    }
}
