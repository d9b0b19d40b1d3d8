use super::Card;

/// Iterator over every `num_cards` sized combination of a set of cards.
///
/// Combinations come out in lexicographic order of the positions they
/// were taken from, so `[0, 1, 2, 3, 4]` is always first.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Positions used for the next combination, None once exhausted.
    idx: Option<Vec<usize>>,
}

impl<'a> CardIter<'a> {
    /// ```
    /// use poker_hand::core::{CardIter, parse_cards};
    ///
    /// let cards = parse_cards("2c3c4c5c6c7c8c").unwrap();
    /// assert_eq!(21, CardIter::new(&cards, 5).count());
    /// ```
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        let idx = (num_cards <= possible_cards.len()).then(|| (0..num_cards).collect());
        CardIter {
            possible_cards,
            idx,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let idx = self.idx.as_mut()?;
        let result: Vec<Card> = idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Find the right most position that can still move forward,
        // bump it and pack everything after it right behind it.
        let n = self.possible_cards.len();
        let k = idx.len();
        match (0..k).rev().find(|&level| idx[level] < n - k + level) {
            Some(level) => {
                idx[level] += 1;
                for after in level + 1..k {
                    idx[after] = idx[after - 1] + 1;
                }
            }
            None => self.idx = None,
        }
        Some(result)
    }
}
