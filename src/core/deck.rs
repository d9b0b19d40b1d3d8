use std::collections::HashSet;

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;
use tracing::event;

use crate::core::card::{Card, Suit, Value};
use crate::core::error::PokerError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A deck of distinct cards in a fixed draw order.
///
/// Cards are drawn from the front. Drawn cards stay recorded so that
/// `remaining()` and `dealt()` always partition the full card set.
/// An empty deck is an error to draw from; it is never refilled behind
/// the caller's back. Call [`Deck::reset`] between independent rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Every card this deck owns, in draw order.
    cards: Vec<Card>,
    /// Offset of the next card to draw.
    next: usize,
}

/// All 52 cards, sorted by value then suit.
fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for v in Value::values() {
        for s in Suit::suits() {
            cards.push(Card::new(v, s));
        }
    }
    cards
}

impl Deck {
    /// Create the standard 52 card deck, shuffled with the thread rng.
    ///
    /// ```
    /// use poker_hand::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self::new_with_rng(&mut rng())
    }

    /// Create the standard 52 card deck shuffled by the given rng.
    pub fn new_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self {
            cards: standard_cards(),
            next: 0,
        };
        deck.cards.shuffle(rng);
        deck
    }

    /// Build a deck that deals exactly `cards`, first element first.
    ///
    /// ```
    /// use poker_hand::core::{Card, Deck};
    ///
    /// let ace: Card = "As".parse().unwrap();
    /// let king: Card = "Kd".parse().unwrap();
    /// let mut deck = Deck::from_cards(vec![ace, king]).unwrap();
    /// assert_eq!(ace, deck.draw().unwrap());
    /// assert_eq!(king, deck.draw().unwrap());
    /// assert!(deck.draw().is_err());
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for c in &cards {
            if !seen.insert(*c) {
                return Err(PokerError::DuplicateCard(*c));
            }
        }
        Ok(Self { cards, next: 0 })
    }

    /// Remove and return the card at the front of the draw order.
    pub fn draw(&mut self) -> Result<Card, PokerError> {
        match self.cards.get(self.next) {
            Some(card) => {
                self.next += 1;
                Ok(*card)
            }
            None => {
                event!(tracing::Level::DEBUG, dealt = self.next, "Draw from exhausted deck");
                Err(PokerError::DeckExhausted)
            }
        }
    }

    /// Draw `n` cards at once. Either all `n` are drawn or none are.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        if n > self.len() {
            event!(
                tracing::Level::DEBUG,
                requested = n,
                remaining = self.len(),
                "Not enough cards left to draw"
            );
            return Err(PokerError::DeckExhausted);
        }
        let drawn = self.cards[self.next..self.next + n].to_vec();
        self.next += n;
        Ok(drawn)
    }

    /// Put every card back and reshuffle with the thread rng.
    pub fn reset(&mut self) {
        self.reset_with_rng(&mut rng());
    }

    /// Put every card back and reshuffle with the given rng.
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        event!(
            tracing::Level::TRACE,
            dealt = self.next,
            size = self.cards.len(),
            "Resetting deck"
        );
        self.next = 0;
        self.cards.shuffle(rng);
    }

    /// How many cards are left to draw.
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards still to be drawn, in draw order.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Cards drawn since construction or the last reset, in draw order.
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.next]
    }

    /// Given a card, is it still in the deck to be drawn?
    pub fn contains(&self, c: &Card) -> bool {
        self.remaining().contains(c)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
