#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_hand;
use std::collections::HashSet;

use poker_hand::core::{BestHandSelector, Card, CardIter, Hand, Rankable};

fuzz_target!(|cards: Vec<Card>| {
    // Keep the search small and the cards distinct.
    let mut seen = HashSet::new();
    let cards: Vec<Card> = cards.into_iter().filter(|c| seen.insert(*c)).take(9).collect();

    match BestHandSelector::best_classified(&cards) {
        Ok(best) => {
            for combo in CardIter::new(&cards, 5) {
                let other = Hand::from_slice(&combo).unwrap().classify();
                assert!(other <= best);
            }
            assert_eq!(best.category(), best.hand().category());
        }
        Err(_) => assert!(cards.len() < 5),
    }
});
