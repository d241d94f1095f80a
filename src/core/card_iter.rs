use super::Card;

/// Iterator over every five card subset of a slice of cards.
///
/// Subsets are produced as fixed size arrays so ranking the best
/// five cards out of seven never allocates.
#[derive(Debug, Clone)]
pub struct FiveCardSubsets<'a> {
    // All the possible cards that can be chosen.
    possible_cards: &'a [Card],
    // Set of current offsets being used to create the subset.
    idx: [usize; 5],
    done: bool,
}

impl<'a> FiveCardSubsets<'a> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: [0, 1, 2, 3, 4],
            done: possible_cards.len() < 5,
        }
    }
}

impl Iterator for FiveCardSubsets<'_> {
    type Item = [Card; 5];

    fn next(&mut self) -> Option<[Card; 5]> {
        if self.done {
            return None;
        }

        let result = self.idx.map(|i| self.possible_cards[i]);

        // Find the right most offset that can still move forward
        // while leaving room for the offsets after it.
        let n = self.possible_cards.len();
        match (0..5).rev().find(|&level| self.idx[level] < n - 5 + level) {
            Some(level) => {
                self.idx[level] += 1;
                for after in level + 1..5 {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}
