use crate::card::Rank;
use crate::combination::CardCombination;
use crate::play::Play;

use super::{Strategy, TurnContext};

/// Sheds as many copies of the lowest rank on offer as possible.
///
/// The lowest rank is the first card of the first candidate. Ties go to the
/// larger play, except that a larger play holding anything above a 9 is
/// skipped. Four of a kinds end the scan, so a round is never opened with
/// one unless nothing else is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservativeStrategy;

impl Strategy for ConservativeStrategy {
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play {
        let Some(first) = ctx.candidates.first() else {
            return Play::pass();
        };
        let Some(lowest) = first.cards().first().map(|c| c.rank) else {
            return first.clone();
        };

        let mut chosen = first;
        let mut shed = 0;
        for play in &ctx.candidates {
            if play.combination() == CardCombination::FourOfAKind {
                break;
            }
            let count = play.cards().iter().filter(|c| c.rank == lowest).count();
            if count > shed {
                shed = count;
                chosen = play;
            } else if count == shed
                && play.cards().len() > chosen.cards().len()
                && play.cards().iter().all(|c| c.rank <= Rank::Nine)
            {
                chosen = play;
            }
        }
        chosen.clone()
    }
}
