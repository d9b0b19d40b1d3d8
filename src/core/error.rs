use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("No cards left in the deck; reset it before drawing again")]
    DeckExhausted,
    #[error("A hand must have exactly 5 cards to be classified, got {0}")]
    InvalidHandSize(usize),
    #[error("At least 5 cards are needed to pick a best hand, got {0}")]
    InsufficientCards(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
}
