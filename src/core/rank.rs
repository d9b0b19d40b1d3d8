use std::cmp::Ordering;

use super::{Card, Hand, HandCategory, PokerError, Value};

/// Counts of each value in a five card hand plus the facts the category
/// cascade needs. Everything is derived from the same multiset of values.
struct Shape {
    /// How many cards of each value, indexed by `Value::index`.
    counts: [u8; 13],
    /// Group sizes, largest first, e.g. `[3, 2]` for a full house.
    groups: Vec<u8>,
    is_flush: bool,
    is_straight: bool,
    high: Value,
}

impl Shape {
    fn of(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        for c in cards {
            counts[c.value.index()] += 1;
        }
        let mut groups: Vec<u8> = counts.iter().copied().filter(|n| *n > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

        // Five distinct values whose positions in the ordering table span
        // exactly four steps. The wheel (A-2-3-4-5) does not qualify.
        let low = cards.iter().map(|c| c.value).min().unwrap_or(Value::Two);
        let high = cards.iter().map(|c| c.value).max().unwrap_or(Value::Two);
        let is_straight = groups.len() == 5 && high.index() - low.index() == 4;

        Self {
            counts,
            groups,
            is_flush,
            is_straight,
            high,
        }
    }

    /// The category cascade. Arms are checked top to bottom so stronger
    /// categories always win over the weaker ones they also satisfy.
    fn category(&self) -> HandCategory {
        match (self.is_straight, self.is_flush, self.groups.as_slice()) {
            (true, true, _) if self.high == Value::Ace => HandCategory::RoyalFlush,
            (true, true, _) => HandCategory::StraightFlush,
            (_, _, [4, ..]) => HandCategory::FourOfAKind,
            (_, _, [3, 2]) => HandCategory::FullHouse,
            (_, true, _) => HandCategory::Flush,
            (true, _, _) => HandCategory::Straight,
            (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
            (_, _, [2, 2, ..]) => HandCategory::TwoPair,
            (_, _, [2, ..]) => HandCategory::Pair,
            _ => HandCategory::HighCard,
        }
    }
}

/// A hand together with everything needed to compare it.
///
/// Built once by [`Rankable::classify`]. Two classified hands are equal
/// when poker can't tell them apart, so hands that differ only in suits
/// compare equal even though their cards differ.
#[derive(Debug, Clone)]
pub struct ClassifiedHand {
    hand: Hand,
    category: HandCategory,
    /// Highest and lowest value in the kind group, if the category has one.
    kind: Option<(Value, Value)>,
    /// Values outside the kind group, highest first.
    kickers: Vec<Value>,
}

impl ClassifiedHand {
    fn new(hand: Hand) -> Self {
        let shape = Shape::of(hand.cards());
        let category = shape.category();

        let mut kind: Vec<Value> = Vec::with_capacity(4);
        let mut kickers: Vec<Value> = Vec::with_capacity(5);
        for c in &hand {
            let in_group = category
                .kind_size()
                .is_some_and(|n| usize::from(shape.counts[c.value.index()]) == n);
            if in_group {
                kind.push(c.value);
            } else {
                kickers.push(c.value);
            }
        }
        kickers.sort_unstable_by(|a, b| b.cmp(a));

        let kind = match (kind.iter().max(), kind.iter().min()) {
            (Some(high), Some(low)) => Some((*high, *low)),
            _ => None,
        };

        Self {
            hand,
            category,
            kind,
            kickers,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Highest and lowest value of the kind group. For two pair that is
    /// the high pair and the low pair.
    pub fn kind_values(&self) -> Option<(Value, Value)> {
        self.kind
    }

    /// Values that only matter once category and kind group tie.
    pub fn kickers(&self) -> &[Value] {
        &self.kickers
    }

    pub fn into_parts(self) -> (Hand, HandCategory) {
        (self.hand, self.category)
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| match (self.kind, other.kind) {
                (Some((high, low)), Some((other_high, other_low))) => {
                    high.cmp(&other_high).then(low.cmp(&other_low))
                }
                _ => Ordering::Equal,
            })
            .then_with(|| compare_kickers(&self.kickers, &other.kickers))
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClassifiedHand {}

/// Walk both kicker lists from the top; the first difference decides.
/// Both lists must already be sorted highest first.
fn compare_kickers(mine: &[Value], theirs: &[Value]) -> Ordering {
    mine.iter()
        .zip(theirs)
        .map(|(a, b)| a.cmp(b))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Can this be classified as a poker hand?
pub trait Rankable {
    /// Classify and keep the result around for comparisons.
    fn classify(&self) -> ClassifiedHand;

    /// Just the category.
    fn category(&self) -> HandCategory {
        self.classify().category()
    }
}

impl Rankable for Hand {
    fn classify(&self) -> ClassifiedHand {
        ClassifiedHand::new(*self)
    }

    fn category(&self) -> HandCategory {
        Shape::of(self.cards()).category()
    }
}

/// Maps five cards to their [`HandCategory`].
pub struct HandClassifier;

impl HandClassifier {
    /// Classify exactly five cards.
    ///
    /// ```
    /// use poker_hand::core::{HandCategory, HandClassifier, parse_cards};
    ///
    /// let cards = parse_cards("ThJhQhKhAh").unwrap();
    /// assert_eq!(Ok(HandCategory::RoyalFlush), HandClassifier::evaluate(&cards));
    /// assert!(HandClassifier::evaluate(&cards[..4]).is_err());
    /// ```
    pub fn evaluate(cards: &[Card]) -> Result<HandCategory, PokerError> {
        Ok(Hand::from_slice(cards)?.category())
    }

    /// Classify and keep the tie break data.
    pub fn classify(cards: &[Card]) -> Result<ClassifiedHand, PokerError> {
        Ok(Hand::from_slice(cards)?.classify())
    }
}

/// Total order over five card hands.
pub struct HandComparator;

impl HandComparator {
    /// Compare two hands. Category decides first, then the kind group
    /// (high value, then low value), then the kickers highest first.
    /// Suit never breaks a tie.
    ///
    /// ```
    /// use poker_hand::core::{Hand, HandComparator};
    /// use std::cmp::Ordering;
    ///
    /// let low: Hand = "3h3c5d5s5h".parse().unwrap();
    /// let high: Hand = "AhAc5d5s5h".parse().unwrap();
    /// assert_eq!(Ordering::Less, HandComparator::compare(&low, &high));
    /// ```
    pub fn compare(h1: &Hand, h2: &Hand) -> Ordering {
        h1.classify().cmp(&h2.classify())
    }
}
