//! This is the core module. Cards, the deck, and everything needed to
//! classify, compare, and pick five card poker hands.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// All the errors the library can hand back.
mod error;
pub use self::error::PokerError;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{DECK_SIZE, Deck};

/// Code related to five card hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::{HAND_SIZE, Hand, parse_cards};

/// The ten hand categories.
mod category;
pub use self::category::HandCategory;

/// 5 Card hand classification and comparison code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{ClassifiedHand, HandClassifier, HandComparator, Rankable};

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Best five cards out of many.
mod best;
pub use self::best::BestHandSelector;
