//! Playing cards, a shuffled deck, and five card poker hands.
//!
//! Hands are classified into one of ten categories, ordered with full
//! tie breaks, and the best five cards can be picked out of any larger
//! set by trying every combination. Ace-low straights are not
//! recognized and suits never break a tie.
//!
//! ```
//! use poker_hand::core::{BestHandSelector, Deck, HandCategory};
//!
//! let mut deck = Deck::new();
//! let seven = deck.draw_n(7).unwrap();
//! let (hand, category) = BestHandSelector::best5(&seven).unwrap();
//! assert!(category >= HandCategory::HighCard);
//! assert_eq!(5, hand.cards().len());
//! ```

/// Allow all the core poker functionality to be used
/// externally.
pub mod core;
