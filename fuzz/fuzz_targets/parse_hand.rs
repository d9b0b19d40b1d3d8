#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_hand;
use std::str;

use poker_hand::core::{Hand, HandClassifier, Rankable};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = s.parse::<Hand>() {
            assert_eq!(Ok(h.category()), HandClassifier::evaluate(h.cards()));
        }
    }
});
