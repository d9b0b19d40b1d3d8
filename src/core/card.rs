use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, lowest to highest.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Position of this value in the low to high ordering table.
    ///
    /// ```
    /// use poker_hand::core::Value;
    ///
    /// assert_eq!(0, Value::Two.index());
    /// assert_eq!(12, Value::Ace.index());
    /// ```
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a value up by its position in the ordering table.
    pub fn from_index(idx: usize) -> Option<Self> {
        VALUES.get(idx).copied()
    }

    /// Parse the single char short form used in hand strings.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// The single char short form of this value.
    pub const fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// The long name printed in `"<rank> of <suit>"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Parse a long name. Case is ignored for the face cards.
    pub fn from_name(name: &str) -> Option<Self> {
        VALUES
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Clubs
    Club = 1,
    /// Diamonds
    Diamond = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Club, Suit::Diamond, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'h' => Some(Self::Heart),
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Heart => 'h',
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Spade => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "Hearts",
            Self::Club => "Clubs",
            Self::Diamond => "Diamonds",
            Self::Spade => "Spades",
        }
    }

    /// Parse a long name such as `"Hearts"`. The singular form is accepted too.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        SUITS.iter().copied().find(|s| {
            let long = s.name();
            long.eq_ignore_ascii_case(name) || long[..long.len() - 1].eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Equality and the derived `Ord` are structural so cards can be sorted
/// and de-duplicated. Poker comparisons go through [`Card::compare`],
/// which only looks at the value.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from long rank and suit names.
    ///
    /// ```
    /// use poker_hand::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_new("Jack", "Hearts").unwrap();
    /// assert_eq!(Card::new(Value::Jack, Suit::Heart), card);
    /// assert!(Card::try_new("1", "Hearts").is_err());
    /// ```
    pub fn try_new(rank: &str, suit: &str) -> Result<Self, PokerError> {
        let value = Value::from_name(rank)
            .ok_or_else(|| PokerError::InvalidCard(format!("unknown rank {rank:?}")))?;
        let suit = Suit::from_name(suit)
            .ok_or_else(|| PokerError::InvalidCard(format!("unknown suit {suit:?}")))?;
        Ok(Self { value, suit })
    }

    /// Compare two cards by value only. Suit never breaks a tie.
    ///
    /// ```
    /// use poker_hand::core::{Card, Suit, Value};
    /// use std::cmp::Ordering;
    ///
    /// let a = Card::new(Value::Four, Suit::Heart);
    /// let b = Card::new(Value::Four, Suit::Spade);
    /// assert_eq!(Ordering::Equal, a.compare(&b));
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Two char notation, e.g. `"Ts"`.
    pub fn short(&self) -> String {
        format!("{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = PokerError;

    /// Parse two char notation like `"As"` or `"9d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or_else(|| PokerError::InvalidCard(String::from("empty card string")))?;
        let suit = chars
            .next()
            .ok_or_else(|| PokerError::InvalidCard(format!("missing suit in {s:?}")))?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        let value = Value::from_char(value)
            .ok_or_else(|| PokerError::InvalidCard(format!("unknown value char {value:?}")))?;
        let suit = Suit::from_char(suit)
            .ok_or_else(|| PokerError::InvalidCard(format!("unknown suit char {suit:?}")))?;
        Ok(Self { value, suit })
    }
}
