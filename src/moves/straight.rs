use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::combination::{CardCombination, is_straight};
use crate::play::Play;

const STRAIGHT_LEN: usize = 5;
const SPAN: u8 = STRAIGHT_LEN as u8 - 1;

/// Straights that beat `reference`.
///
/// A window slides over the sorted hand holding a run whose ranks never
/// jump by more than one. Once the window covers five ranks and the next
/// card lies beyond it, every one-card-per-rank straight in the window is
/// emitted and the lowest rank is dropped.
pub(super) fn straights(hand: &[Card], reference: &Play, plays: &mut Vec<Play>) {
    if hand.len() < STRAIGHT_LEN {
        return;
    }

    // A straight topping out below the reference's top rank cannot win.
    let lowest = reference
        .decisive_card()
        .map_or(0, |top| top.rank.index().saturating_sub(SPAN));
    let mut i = hand.partition_point(|c| c.rank.index() < lowest);

    let mut window: VecDeque<Card> = VecDeque::with_capacity(hand.len() - i);
    while let Some(&card) = hand.get(i) {
        let bounds = window
            .front()
            .zip(window.back())
            .map(|(low, high)| (low.rank.index(), high.rank.index()));
        let Some((low, high)) = bounds else {
            window.push_back(card);
            i += 1;
            continue;
        };

        let rank = card.rank.index();
        if rank - low > SPAN && high - low == SPAN {
            collect(window.make_contiguous(), reference, plays);
            while window.front().is_some_and(|c| c.rank.index() == low) {
                window.pop_front();
            }
        } else {
            if rank - high > 1 {
                window.clear();
            }
            window.push_back(card);
            i += 1;
        }
    }
    collect(window.make_contiguous(), reference, plays);
}

/// Emits each straight in `window` that uses one card per rank.
fn collect(window: &[Card], reference: &Play, plays: &mut Vec<Play>) {
    let mut chosen = Vec::with_capacity(STRAIGHT_LEN);
    let mut used = [false; Rank::ALL.len()];
    backtrack(window, &mut chosen, &mut used, reference, plays);
}

fn backtrack(
    remaining: &[Card],
    chosen: &mut Vec<Card>,
    used: &mut [bool; Rank::ALL.len()],
    reference: &Play,
    plays: &mut Vec<Play>,
) {
    if chosen.len() == STRAIGHT_LEN {
        if is_straight(chosen) {
            let play = Play::new_unchecked(chosen.clone(), CardCombination::Straight);
            if reference.loses_to(&play) {
                plays.push(play);
            }
        }
        return;
    }

    for (i, &card) in remaining.iter().enumerate() {
        let rank = card.rank.index() as usize;
        if used[rank] {
            continue;
        }
        used[rank] = true;
        chosen.push(card);
        backtrack(&remaining[i + 1..], chosen, used, reference, plays);
        chosen.pop();
        used[rank] = false;
    }
}
