use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::{Card, Deck, PokerError};

/// Number of cards in a classified poker hand.
pub const HAND_SIZE: usize = 5;

/// Exactly five distinct cards.
///
/// The order the cards were given in is kept; it has no effect on how
/// the hand classifies or compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Hand([Card; HAND_SIZE]);

/// Find the first card that shows up twice.
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|&(i, c)| cards[i + 1..].contains(c))
        .map(|(_, c)| *c)
}

impl Hand {
    /// Create a hand from five cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_hand::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new([
    ///     Card::new(Value::Ten, Suit::Heart),
    ///     Card::new(Value::Jack, Suit::Heart),
    ///     Card::new(Value::Queen, Suit::Heart),
    ///     Card::new(Value::King, Suit::Heart),
    ///     Card::new(Value::Ace, Suit::Heart),
    /// ])
    /// .unwrap();
    /// assert_eq!(5, hand.cards().len());
    /// ```
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, PokerError> {
        match find_duplicate(&cards) {
            Some(c) => Err(PokerError::DuplicateCard(c)),
            None => Ok(Self(cards)),
        }
    }

    /// Create a hand from a slice that must hold exactly five cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, PokerError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| PokerError::InvalidHandSize(cards.len()))?;
        Self::new(cards)
    }

    /// Draw five cards from the deck.
    ///
    /// If the deck has fewer than five cards nothing is drawn.
    pub fn deal(deck: &mut Deck) -> Result<Self, PokerError> {
        let cards = deck.draw_n(HAND_SIZE)?;
        Self::from_slice(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    /// True when both hands hold the same cards in any order.
    pub fn same_cards(&self, other: &Self) -> bool {
        let mut mine = self.0;
        let mut theirs = other.0;
        mine.sort();
        theirs.sort();
        mine == theirs
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

/// Parse concatenated two char cards, e.g. `"AsKsQsJsTs"`.
/// Whitespace between cards is allowed.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, PokerError> {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut cards = Vec::with_capacity(compact.len() / 2);
    for pair in compact.chunks(2) {
        let text: String = pair.iter().collect();
        let card: Card = text.parse()?;
        if cards.contains(&card) {
            return Err(PokerError::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
