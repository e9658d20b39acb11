//! Play construction and ordering tests.

use core::cmp::Ordering;

use bigtwo::{Card, CardCombination, Play, PlayError};

fn cards(tokens: &str) -> Vec<Card> {
    tokens
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect()
}

fn play(tokens: &str, combination: CardCombination) -> Play {
    Play::new(cards(tokens), combination).unwrap()
}

#[test]
fn pairs_compare_by_highest_suit() {
    let diamond_spade = play("5D 5S", CardCombination::Pair);
    let club_heart = play("5C 5H", CardCombination::Pair);
    assert!(club_heart.loses_to(&diamond_spade));
    assert!(diamond_spade.beats(&club_heart));

    let kings = play("KD KS", CardCombination::Pair);
    assert_eq!(club_heart.compare(&club_heart), Some(Ordering::Equal));
    assert!(club_heart.loses_to(&kings));
}

#[test]
fn triples_compare_by_rank() {
    let aces = play("AH AD AC", CardCombination::Triple);
    let fours = play("4H 4S 4C", CardCombination::Triple);
    assert!(fours.loses_to(&aces));
}

#[test]
fn full_houses_compare_by_triple() {
    let low = play("AC 4S 4C 4H AD", CardCombination::FullHouse);
    let high = play("3C 5S 3D 5C 5H", CardCombination::FullHouse);
    assert!(low.loses_to(&high));
    assert_eq!(low.decisive_card(), Some("4S".parse().unwrap()));
}

#[test]
fn straights_compare_by_top_card() {
    let low = play("3C 4H 5S 6C 7D", CardCombination::Straight);
    let high = play("3D 4D 5D 6D 7S", CardCombination::Straight);
    assert!(low.loses_to(&high));
}

#[test]
fn four_of_a_kind_beats_everything_else() {
    let low = play("4C 4D 4H 2S 4S", CardCombination::FourOfAKind);
    let high = play("6H 3S 6C 6D 6S", CardCombination::FourOfAKind);
    assert!(low.loses_to(&high));

    let pair = play("8D 8S", CardCombination::Pair);
    assert!(pair.loses_to(&high));
    assert!(!high.loses_to(&pair));
    assert!(high.beats(&pair));

    let straight = play("TH JH QH KH AH", CardCombination::Straight);
    assert!(straight.loses_to(&low));
}

#[test]
fn different_classes_are_incomparable() {
    let single_ten = play("TS", CardCombination::Single);
    let pair_twos = play("2S 2D", CardCombination::Pair);
    let straight = play("6H 7H 8H 9H TH", CardCombination::Straight);

    assert_eq!(single_ten.compare(&pair_twos), None);
    assert!(!single_ten.loses_to(&pair_twos));
    assert!(!pair_twos.loses_to(&single_ten));
    assert!(!straight.loses_to(&single_ten));
    assert!(!single_ten.loses_to(&straight));
}

#[test]
fn any_loses_to_every_real_play() {
    let any = Play::any();
    assert!(any.is_any());
    assert_eq!(Play::default(), any);
    assert!(any.loses_to(&play("3D", CardCombination::Single)));
    assert!(any.loses_to(&play("3D 3S 3H 3C 4D", CardCombination::FourOfAKind)));
    assert!(!any.loses_to(&Play::any()));
}

#[test]
fn construction_orders_cards_canonically() {
    let pair = play("2H 2C", CardCombination::Pair);
    assert_eq!(pair.cards().last().map(|c| c.suit), Some(bigtwo::Suit::Hearts));

    let full_house = play("7C 4S 7D 4C 4H", CardCombination::FullHouse);
    assert_eq!(full_house.cards(), cards("7D 7C 4C 4H 4S").as_slice());

    let quads = play("7C 4H 7D 7H 7S", CardCombination::FourOfAKind);
    assert_eq!(quads.cards(), cards("4H 7D 7C 7H 7S").as_slice());
    assert_eq!(quads.decisive_card(), Some("7S".parse().unwrap()));

    let straight = play("7D 3C 5S 4H 6C", CardCombination::Straight);
    assert_eq!(straight.cards(), cards("3C 4H 5S 6C 7D").as_slice());
}

#[test]
fn construction_rejects_mismatched_cards() {
    assert_eq!(
        Play::new(cards("3D"), CardCombination::Pair),
        Err(PlayError::CardCountMismatch {
            combination: CardCombination::Pair,
            expected: 2,
            found: 1,
        })
    );
    assert_eq!(
        Play::new(cards("3D 4D"), CardCombination::Pair),
        Err(PlayError::ShapeMismatch {
            combination: CardCombination::Pair
        })
    );
    assert_eq!(
        Play::new(cards("3D 4D 5D 6D 7D"), CardCombination::FullHouse),
        Err(PlayError::ShapeMismatch {
            combination: CardCombination::FullHouse
        })
    );
    assert_eq!(
        Play::new(cards("3D"), CardCombination::Invalid),
        Err(PlayError::InvalidCombination)
    );
    assert_eq!(
        Play::from_cards(cards("3D 7S")),
        Err(PlayError::InvalidCombination)
    );
}

#[test]
fn from_cards_classifies() {
    let played = Play::from_cards(cards("9S 9D 9C")).unwrap();
    assert_eq!(played.combination(), CardCombination::Triple);
    assert!(Play::from_cards(Vec::new()).unwrap().is_pass());
}

#[test]
fn simplified_renders_ranks_only() {
    let full_house = play("3C 3H TH 3S TD", CardCombination::FullHouse);
    assert_eq!(full_house.simplified(), "TT333");

    let straight = play("3C 7H 6H 4H 5H", CardCombination::Straight);
    assert_eq!(straight.simplified(), "34567");
}

#[test]
fn display_lists_cards_and_class() {
    let pair = play("3S 3D", CardCombination::Pair);
    assert_eq!(pair.to_string(), "[3♦ 3♠] → PAIR");
    assert_eq!(Play::pass().to_string(), "[] → PASS");
}

#[test]
fn play_membership() {
    let pair = play("3S 3D", CardCombination::Pair);
    assert!(pair.contains(Card::OPENING));
    assert!(!pair.contains("3C".parse().unwrap()));
    assert_eq!(pair.to_set().len(), 2);
}
