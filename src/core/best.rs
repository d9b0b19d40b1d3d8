use tracing::event;

use super::hand::find_duplicate;
use super::{Card, CardIter, ClassifiedHand, HAND_SIZE, Hand, HandCategory, PokerError, Rankable};

/// Picks the strongest five card hand out of a larger set of cards.
pub struct BestHandSelector;

impl BestHandSelector {
    /// Try every five card combination and return the best one with its
    /// category.
    ///
    /// When several combinations tie the first one generated wins, so the
    /// result only depends on the input order.
    ///
    /// ```
    /// use poker_hand::core::{BestHandSelector, HandCategory, parse_cards};
    ///
    /// let cards = parse_cards("6cAc2cKc3c4d5d").unwrap();
    /// let (hand, category) = BestHandSelector::best5(&cards).unwrap();
    /// assert_eq!(HandCategory::Flush, category);
    /// assert_eq!(parse_cards("6cAc2cKc3c").unwrap(), hand.cards().to_vec());
    /// ```
    pub fn best5(cards: &[Card]) -> Result<(Hand, HandCategory), PokerError> {
        Ok(Self::best_classified(cards)?.into_parts())
    }

    /// Same search as [`BestHandSelector::best5`] keeping the tie break data.
    pub fn best_classified(cards: &[Card]) -> Result<ClassifiedHand, PokerError> {
        if cards.len() < HAND_SIZE {
            return Err(PokerError::InsufficientCards(cards.len()));
        }
        if let Some(c) = find_duplicate(cards) {
            return Err(PokerError::DuplicateCard(c));
        }

        let mut best: Option<ClassifiedHand> = None;
        let mut considered: usize = 0;
        for combo in CardIter::new(cards, HAND_SIZE) {
            considered += 1;
            let candidate = Hand::from_slice(&combo)?.classify();
            // Strictly greater so the first of equals is kept.
            if best.as_ref().is_none_or(|b| candidate > *b) {
                best = Some(candidate);
            }
        }

        // CardIter always yields at least once when there are enough cards.
        let best = best.ok_or(PokerError::InsufficientCards(cards.len()))?;
        event!(
            tracing::Level::TRACE,
            num_cards = cards.len(),
            considered,
            category = %best.category(),
            "Picked best hand"
        );
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, parse_cards};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn best(s: &str) -> (Hand, HandCategory) {
        BestHandSelector::best5(&cards(s)).unwrap()
    }

    #[test_log::test]
    fn test_picks_flush_over_straight() {
        let (hand, category) = best("6cAc2cKc3c4d5d");
        assert_eq!(HandCategory::Flush, category);
        assert!(hand.same_cards(&"6cAc2cKc3c".parse().unwrap()));
    }

    #[test]
    fn test_picks_royal_flush_over_trips() {
        let (hand, category) = best("JcThAhQhKhJhJs");
        assert_eq!(HandCategory::RoyalFlush, category);
        assert!(hand.same_cards(&"ThAhQhKhJh".parse().unwrap()));
    }

    #[test]
    fn test_picks_highest_cards() {
        let (hand, category) = best("2hKc5d8s3dQsTh");
        assert_eq!(HandCategory::HighCard, category);
        assert!(hand.same_cards(&"Kc5d8sQsTh".parse().unwrap()));
    }

    #[test]
    fn test_picks_better_full_house() {
        let (hand, category) = best("3h3c5d3s5h5c7c");
        assert_eq!(HandCategory::FullHouse, category);
        let classified = hand.classify();
        assert_eq!(
            Some((crate::core::Value::Five, crate::core::Value::Five)),
            classified.kind_values()
        );
    }

    #[test]
    fn test_picks_straight() {
        let (hand, category) = best("8c9dTcQh2hJc2d");
        assert_eq!(HandCategory::Straight, category);
        assert!(hand.same_cards(&"8c9dTcQhJc".parse().unwrap()));
    }

    #[test]
    fn test_ten_cards() {
        let (hand, category) = best("8c9dTcQh2hJc2d5d7cTs");
        assert_eq!(HandCategory::Straight, category);
        assert!(hand.same_cards(&"8c9dTcQhJc".parse().unwrap()));
    }

    #[test]
    fn test_five_cards_is_identity() {
        let input = cards("2hKc5d9s3d");
        let (hand, category) = BestHandSelector::best5(&input).unwrap();
        assert_eq!(input, hand.cards().to_vec());
        assert_eq!(HandCategory::HighCard, category);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // Either nine completes the straight; the earlier one is kept.
        let (hand, category) = best("5c6d7h8s9c9d2h");
        assert_eq!(HandCategory::Straight, category);
        assert!(hand.contains(&"9c".parse().unwrap()));
        assert!(!hand.contains(&"9d".parse().unwrap()));
    }

    #[test]
    fn test_insufficient() {
        assert_eq!(
            Err(PokerError::InsufficientCards(4)),
            BestHandSelector::best5(&cards("2hKc5d9s"))
        );
        assert_eq!(
            Err(PokerError::InsufficientCards(0)),
            BestHandSelector::best5(&[])
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        assert!(matches!(
            BestHandSelector::best5(&cards("2hKc5d9s3d").repeat(2)),
            Err(PokerError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_never_beaten_by_a_subset() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut deck = Deck::new_with_rng(&mut rng);
            let seven = deck.draw_n(7).unwrap();
            let best = BestHandSelector::best_classified(&seven).unwrap();
            for combo in CardIter::new(&seven, 5) {
                let other = Hand::from_slice(&combo).unwrap().classify();
                assert!(other <= best);
            }
        }
    }
}
