//! Strategy tests.

use std::io::{self, Cursor, Write};

use bigtwo::strategy::{Transition, parse_play};
use bigtwo::{
    AggressiveStrategy, Card, CardCombination, CardSet, ConservativeStrategy, Hand, HumanStrategy,
    InputError, LearningOptions, Observation, Play, QLearningStrategy, RandomStrategy, Strategy,
    StrategyKind, TurnContext, TurnError,
};

fn cards(tokens: &str) -> Vec<Card> {
    tokens
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect()
}

fn hand(tokens: &str) -> Hand {
    Hand::new(cards(tokens))
}

fn play(tokens: &str, combination: CardCombination) -> Play {
    Play::new(cards(tokens), combination).unwrap()
}

fn context<'a>(hand: &'a Hand, reference: &'a Play, opening: bool) -> TurnContext<'a> {
    TurnContext {
        candidates: hand.find_plays(reference, opening),
        reference,
        opening,
        hand,
        observation: Observation::default(),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn aggressive_plays_the_strongest_quad() {
    let h = hand("3C 3H 3D 3S 4C 5D 5C JC JS JH QC AS 2S");
    let any = Play::any();
    let chosen = AggressiveStrategy.select(&context(&h, &any, false));

    assert_eq!(chosen, play("3C 3H 3D 3S 2S", CardCombination::FourOfAKind));
    assert!(chosen.cards().iter().all(|&c| h.contains(c)));
}

#[test]
fn aggressive_plays_the_highest_single() {
    let h = hand("4C 9D KS");
    let reference = play("5H", CardCombination::Single);
    let chosen = AggressiveStrategy.select(&context(&h, &reference, false));
    assert_eq!(chosen, play("KS", CardCombination::Single));
}

#[test]
fn aggressive_ignores_candidate_order() {
    let h = hand("3C 3D 4H 5S 6C 7D 7S 7H");
    let any = Play::any();
    let ctx = context(&h, &any, false);
    let mut reversed = ctx.clone();
    reversed.candidates.reverse();

    let chosen = AggressiveStrategy.select(&ctx);
    assert_eq!(chosen.combination(), CardCombination::Straight);
    assert_eq!(AggressiveStrategy.select(&reversed), chosen);
}

#[test]
fn strategies_pass_without_candidates() {
    let h = hand("JC");
    let reference = play("KS", CardCombination::Single);
    let ctx = context(&h, &reference, false);
    assert!(ctx.candidates.is_empty());

    for kind in [
        StrategyKind::Random,
        StrategyKind::Aggressive,
        StrategyKind::Conservative,
        StrategyKind::QLearning,
    ] {
        assert!(kind.build(1).select(&ctx).is_pass(), "{}", kind.label());
    }
}

#[test]
fn conservative_opens_with_a_low_full_house() {
    let h = hand("3D 3H 3S 4C 5D 5C JC JS JH QC 6S 7S");
    let any = Play::any();
    let chosen = ConservativeStrategy.select(&context(&h, &any, true));
    assert_eq!(chosen, play("3D 3H 3S 5D 5C", CardCombination::FullHouse));
}

#[test]
fn conservative_follows_with_the_lowest_single() {
    let h = hand("3D 3H 3S 4C 5D 5C JC JS JH QC 6S 7S");
    let reference = play("3S", CardCombination::Single);
    let chosen = ConservativeStrategy.select(&context(&h, &reference, false));
    assert_eq!(chosen, play("4C", CardCombination::Single));
}

#[test]
fn conservative_keeps_high_cards() {
    let h = hand("3C 3H 3S 4C AD AC JC JS JH QC 6S 7S");
    let any = Play::any();
    let chosen = ConservativeStrategy.select(&context(&h, &any, false));
    assert_eq!(chosen, play("3C 3H 3S", CardCombination::Triple));
}

#[test]
fn conservative_prefers_a_low_straight() {
    let h = hand("3C 4H 5S 6C 7D AC JC JS JH QC 6S 7S");
    let any = Play::any();
    let chosen = ConservativeStrategy.select(&context(&h, &any, false));
    assert_eq!(chosen, play("3C 4H 5S 6C 7D", CardCombination::Straight));
}

#[test]
fn conservative_prefers_shedding_a_pair() {
    let h = hand("3C 4H 5S 6C 7D AC JC JS JH QC 3S 7S");
    let any = Play::any();
    let chosen = ConservativeStrategy.select(&context(&h, &any, false));
    assert_eq!(chosen, play("3C 3S", CardCombination::Pair));
}

#[test]
fn random_picks_a_candidate_reproducibly() {
    let h = hand("3S 4H 6S 7D 7S 8D 9S TC TS 3D JD 2C AS");
    let any = Play::any();
    let ctx = context(&h, &any, false);

    let mut first = RandomStrategy::new(9);
    let mut second = RandomStrategy::new(9);
    for _ in 0..20 {
        let chosen = first.select(&ctx);
        assert!(ctx.candidates.contains(&chosen));
        assert!(chosen.cards().iter().all(|&c| h.contains(c)));
        assert_eq!(second.select(&ctx), chosen);
    }
}

#[test]
fn parse_play_reads_indices() {
    let h = hand("3S 9H 3D 5C");
    let any = Play::any();
    let ctx = context(&h, &any, true);

    assert_eq!(parse_play("0 1", &ctx), Ok(play("3D 3S", CardCombination::Pair)));
    assert_eq!(parse_play("  0  ", &ctx), Ok(play("3D", CardCombination::Single)));
    assert_eq!(parse_play("", &ctx), Err(InputError::Empty));
    assert_eq!(parse_play("x", &ctx), Err(InputError::NotANumber));
    assert_eq!(parse_play("-1", &ctx), Err(InputError::NotANumber));
    assert_eq!(
        parse_play("9", &ctx),
        Err(InputError::IndexOutOfRange { index: 9, len: 4 })
    );
    assert_eq!(parse_play("0 0", &ctx), Err(InputError::DuplicateIndex(0)));
    assert_eq!(parse_play("0 2", &ctx), Err(InputError::Unclassifiable));
    assert_eq!(
        parse_play("2", &ctx),
        Err(InputError::Rejected(TurnError::MissingOpeningCard))
    );
    assert_eq!(
        parse_play("PASS", &ctx),
        Err(InputError::Rejected(TurnError::MustLead))
    );
}

#[test]
fn parse_play_checks_the_reference() {
    let h = hand("3S 9H 3D 5C");
    let reference = play("9S", CardCombination::Single);
    let ctx = context(&h, &reference, false);

    assert_eq!(
        parse_play("3", &ctx),
        Err(InputError::Rejected(TurnError::DoesNotBeat))
    );
    assert_eq!(parse_play("pass", &ctx), Ok(Play::pass()));
}

#[test]
fn human_retries_until_valid() {
    let h = hand("3S 9H 3D 5C");
    let any = Play::any();
    let ctx = context(&h, &any, true);

    let mut output = Vec::new();
    let mut human = HumanStrategy::new(Cursor::new(&b"pass\n0 2\n0 1\n"[..]), &mut output);
    let chosen = human.select(&ctx);
    assert_eq!(chosen, play("3D 3S", CardCombination::Pair));

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("0: 3♦"));
    assert_eq!(printed.matches("Please try again").count(), 2);
}

struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn human_keeps_reading_when_output_fails() {
    let h = hand("3S 9H 3D 5C");
    let any = Play::any();
    let ctx = context(&h, &any, true);

    let mut human = HumanStrategy::new(Cursor::new(&b"0 2\n0 1\n"[..]), ClosedOutput);
    assert_eq!(human.select(&ctx), play("3D 3S", CardCombination::Pair));
}

#[test]
fn human_falls_back_on_closed_input() {
    let h = hand("3S 9H 3D 5C");
    let any = Play::any();
    let leading = context(&h, &any, true);
    let mut human = HumanStrategy::new(Cursor::new(&b""[..]), Vec::new());
    assert_eq!(human.select(&leading), leading.candidates[0]);

    let reference = play("2S", CardCombination::Single);
    let following = context(&h, &reference, false);
    assert!(human.select(&following).is_pass());
}

#[test]
fn q_update_moves_towards_reward() {
    let mut agent = QLearningStrategy::new(LearningOptions::default(), 0);
    let state = Observation::default().key();
    let action = CardSet::from_cards(&cards("5D"));
    let step = Transition {
        observation: state,
        action,
        reward: 1.0,
        next_observation: state,
        done: true,
        won: false,
    };

    agent.update(&step);
    assert_close(agent.q_value(&state, action), 0.1);
    agent.update(&step);
    assert_close(agent.q_value(&state, action), 0.19);
    assert_close(agent.q_value(&state, CardSet::EMPTY), 0.0);

    let stats = agent.stats();
    assert_eq!(stats.states, 1);
    assert_eq!(stats.actions, 1);
}

#[test]
fn q_update_adds_win_bonus_and_future_value() {
    let mut agent = QLearningStrategy::new(LearningOptions::default(), 0);
    let terminal = Observation {
        hand: CardSet::EMPTY,
        last_player: 1,
        ..Observation::default()
    }
    .key();
    let before = Observation {
        hand: CardSet::from_cards(&cards("5D")),
        ..Observation::default()
    }
    .key();
    let action = CardSet::from_cards(&cards("5D"));

    agent.update(&Transition {
        observation: terminal,
        action,
        reward: 0.0,
        next_observation: terminal,
        done: true,
        won: true,
    });
    assert_close(agent.q_value(&terminal, action), 10.0);

    agent.update(&Transition {
        observation: before,
        action,
        reward: 0.0,
        next_observation: terminal,
        done: false,
        won: false,
    });
    assert_close(agent.q_value(&before, action), 0.9);
    assert_eq!(agent.stats().states, 2);
}

#[test]
fn epsilon_decays_towards_final_rate() {
    let mut agent = QLearningStrategy::new(LearningOptions::default(), 0);
    assert_close(agent.epsilon(), 1.0);

    agent.decay_epsilon(0);
    assert_close(agent.epsilon(), 1.0);
    agent.decay_epsilon(10);
    assert_close(agent.epsilon(), 0.55);
    agent.decay_epsilon(1_000_000);
    assert!(agent.epsilon() > 0.1 && agent.epsilon() < 0.101);
}

#[test]
fn greedy_agent_picks_the_best_known_action() {
    let options = LearningOptions::default().with_initial_epsilon(0.0);
    let mut agent = QLearningStrategy::new(options, 3);

    let h = hand("3D 5D 9C");
    let any = Play::any();
    let ctx = context(&h, &any, false);
    let best = play("5D", CardCombination::Single);

    agent.update(&Transition {
        observation: ctx.observation.key(),
        action: best.to_set(),
        reward: 5.0,
        next_observation: ctx.observation.key(),
        done: true,
        won: false,
    });

    for _ in 0..5 {
        assert_eq!(agent.select(&ctx), best);
    }
    assert_eq!(agent.history().len(), 5);
}

#[test]
fn exploring_agent_stays_within_candidates() {
    let mut agent = QLearningStrategy::new(LearningOptions::default(), 11);
    let h = hand("3C 3H 3D 3S 4C 5D 5C JC JS JH QC AS 2S");
    let any = Play::any();
    let ctx = context(&h, &any, false);

    for _ in 0..50 {
        assert!(ctx.candidates.contains(&agent.select(&ctx)));
    }
}
