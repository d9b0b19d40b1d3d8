use std::cmp::Ordering;
use std::collections::HashSet;

use poker_hand::core::{
    BestHandSelector, Card, DECK_SIZE, Deck, Hand, HandCategory, HandClassifier, HandComparator,
    PokerError, Rankable, Suit, Value, parse_cards,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

#[test]
fn fresh_deck_deals_every_card_once() {
    let mut deck = Deck::new_with_rng(&mut StdRng::seed_from_u64(9));
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.draw().unwrap()));
    }
    assert_eq!(DECK_SIZE, seen.len());
    for v in Value::values() {
        for s in Suit::suits() {
            assert!(seen.contains(&Card::new(v, s)));
        }
    }
    assert_eq!(Err(PokerError::DeckExhausted), deck.draw());

    deck.reset();
    assert_eq!(DECK_SIZE, deck.len());
    assert!(deck.draw().is_ok());
}

#[test]
fn classification_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut deck = Deck::new_with_rng(&mut rng);
        let h = Hand::deal(&mut deck).unwrap();
        let first = h.category();
        assert_eq!(first, h.category());
        assert_eq!(Ok(first), HandClassifier::evaluate(h.cards()));
    }
}

#[test]
fn every_category_is_reachable() {
    let samples = [
        ("2hKc5d9s3d", HandCategory::HighCard),
        ("2h9c5d9s3d", HandCategory::Pair),
        ("9h9c5d8s5h", HandCategory::TwoPair),
        ("3h3c5d3s6d", HandCategory::ThreeOfAKind),
        ("8c9dTc7hJc", HandCategory::Straight),
        ("ThAh2hKh3h", HandCategory::Flush),
        ("3h3c5d3s5h", HandCategory::FullHouse),
        ("3h3c5d3s3d", HandCategory::FourOfAKind),
        ("8c9cTcJcQc", HandCategory::StraightFlush),
        ("ThJhQhKhAh", HandCategory::RoyalFlush),
    ];
    for (s, expected) in samples {
        assert_eq!(expected, hand(s).category(), "{s}");
    }
    let found: Vec<HandCategory> = samples.iter().map(|(_, c)| *c).collect();
    assert_eq!(HandCategory::ALL.to_vec(), found);
}

#[test]
fn different_categories_follow_category_order() {
    // Weak cards in the stronger category, strong cards in the weaker one.
    let weak_pair = hand("2h2c3d4s5d");
    let ace_high = hand("AhKcQdJs9d");
    let low_trips = hand("2h2c2d3s4d");
    let aces_up = hand("AhAcKdKsQd");
    assert_eq!(Ordering::Greater, HandComparator::compare(&weak_pair, &ace_high));
    assert_eq!(Ordering::Greater, HandComparator::compare(&low_trips, &aces_up));
}

#[test]
fn suits_never_break_ties() {
    let pairs = [
        ("9h9cAd4s3d", "9s9dAc4h3c"),
        ("JhJc5dJsJd", "JhJc5hJsJd"),
        ("8c9dTc7hJc", "8h9sTd7cJd"),
        ("2hKc5d9s3d", "2cKh5s9d3c"),
    ];
    for (a, b) in pairs {
        assert_eq!(Ordering::Equal, HandComparator::compare(&hand(a), &hand(b)));
    }
}

#[test]
fn full_house_pair_breaks_tie() {
    let threes = hand("3h3c5d5s5h");
    let aces = hand("AhAc5d5s5h");
    assert_eq!(HandCategory::FullHouse, threes.category());
    assert_eq!(HandCategory::FullHouse, aces.category());
    assert_eq!(Ordering::Less, HandComparator::compare(&threes, &aces));
}

#[test]
fn straight_flush_is_not_royal_without_ace() {
    assert_eq!(HandCategory::StraightFlush, hand("8c9cTcJcQc").category());
    assert_eq!(HandCategory::RoyalFlush, hand("ThJhQhKhAh").category());
}

#[test]
fn best_of_seven_prefers_flush_over_straight() {
    let cards = parse_cards("6cAc2cKc3c4d5d").unwrap();
    let (best, category) = BestHandSelector::best5(&cards).unwrap();
    assert_eq!(HandCategory::Flush, category);
    assert!(best.same_cards(&hand("6cAc2cKc3c")));

    // The low run is only a plain straight, not a straight flush.
    assert_eq!(HandCategory::Straight, hand("2c3c4d5d6c").category());
}

#[test]
fn best_of_five_is_the_input() {
    let cards = parse_cards("9h9c5d8s5h").unwrap();
    let (best, category) = BestHandSelector::best5(&cards).unwrap();
    assert_eq!(cards, best.cards().to_vec());
    assert_eq!(HandCategory::TwoPair, category);
}

#[test]
fn errors_are_typed() {
    assert_eq!(
        Err(PokerError::InvalidHandSize(3)),
        HandClassifier::evaluate(&parse_cards("2h3h4h").unwrap())
    );
    assert_eq!(
        Err(PokerError::InsufficientCards(3)),
        BestHandSelector::best5(&parse_cards("2h3h4h").unwrap())
    );
    assert!(matches!(
        Card::try_new("Eleven", "Hearts"),
        Err(PokerError::InvalidCard(_))
    ));
}

#[test]
fn dealt_hands_never_share_cards() {
    let mut deck = Deck::new_with_rng(&mut StdRng::seed_from_u64(5));
    let mut seen = HashSet::new();
    for _ in 0..10 {
        let h = Hand::deal(&mut deck).unwrap();
        for c in &h {
            assert!(seen.insert(*c));
        }
    }
    assert_eq!(2, deck.len());
    assert_eq!(Err(PokerError::DeckExhausted), Hand::deal(&mut deck));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let h = hand("ThJhQhKhAh");
    let json = serde_json::to_string(&h).unwrap();
    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(h, back);

    let json = serde_json::to_string(&h.category()).unwrap();
    assert_eq!("\"RoyalFlush\"", json);

    // Four cards do not make a hand.
    let short = serde_json::to_string(&h.cards()[..4]).unwrap();
    assert!(serde_json::from_str::<Hand>(&short).is_err());
}
