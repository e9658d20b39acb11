use core::cmp::Ordering;

use crate::play::Play;

use super::{Strategy, TurnContext};

/// Plays the strongest candidate.
///
/// Plays of different classes that the play ordering cannot rank fall back
/// to the class order; equal plays are told apart by their cards, so the
/// pick does not depend on candidate order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveStrategy;

fn dominance(a: &Play, b: &Play) -> Ordering {
    a.compare(b)
        .unwrap_or_else(|| a.combination().cmp(&b.combination()))
        .then_with(|| a.cards().cmp(b.cards()))
}

impl Strategy for AggressiveStrategy {
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play {
        ctx.candidates
            .iter()
            .max_by(|a, b| dominance(a, b))
            .cloned()
            .unwrap_or_else(Play::pass)
    }
}
