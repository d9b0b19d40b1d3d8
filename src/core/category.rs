use std::fmt;

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the category order, so comparing two
/// categories is a plain discriminant comparison.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum HandCategory {
    /// The lowest category.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Every category, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Size of the group of equal values that defines this category, if any.
    ///
    /// Cards in that group are compared before the kickers when two hands
    /// of the same category meet.
    ///
    /// ```
    /// use poker_hand::core::HandCategory;
    ///
    /// assert_eq!(Some(3), HandCategory::FullHouse.kind_size());
    /// assert_eq!(None, HandCategory::Flush.kind_size());
    /// ```
    pub const fn kind_size(self) -> Option<usize> {
        match self {
            Self::FourOfAKind => Some(4),
            Self::FullHouse | Self::ThreeOfAKind => Some(3),
            Self::TwoPair | Self::Pair => Some(2),
            Self::RoyalFlush | Self::StraightFlush | Self::Flush | Self::Straight | Self::HighCard => {
                None
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal flush",
            Self::StraightFlush => "Straight flush",
            Self::FourOfAKind => "Four of a kind",
            Self::FullHouse => "Full house",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a kind",
            Self::TwoPair => "Two pair",
            Self::Pair => "Pair",
            Self::HighCard => "High card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
