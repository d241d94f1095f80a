use std::fmt;

use super::{Card, CardBitSet, FiveCardSubsets, Hand, HoldemError, Value};

/// All the different possible hand categories, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
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
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// The strength of the best five card hand.
///
/// Ordering compares the category first and then the tiebreak. The
/// tiebreak is only meaningful between hands of the same category: for
/// made hands it's the bit set of the values that make the hand shifted
/// above the bit set of the kickers, for straights it's the index into
/// `STRAIGHTS`. Two equal strengths are a split pot.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandStrength {
    category: HandCategory,
    tiebreak: u32,
}

impl HandStrength {
    pub fn new(category: HandCategory, tiebreak: u32) -> Self {
        Self { category, tiebreak }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

const fn value_bits(values: [Value; 5]) -> u32 {
    let mut bits = 0;
    let mut i = 0;
    while i < 5 {
        bits |= 1 << values[i] as u32;
        i += 1;
    }
    bits
}

/// Every straight as a bit set of values, weakest first.
pub const STRAIGHTS: [u32; 10] = [
    // Wheel.
    value_bits([Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five]),
    // "Normal" straights starting at two to six.
    value_bits([Value::Two, Value::Three, Value::Four, Value::Five, Value::Six]),
    value_bits([Value::Three, Value::Four, Value::Five, Value::Six, Value::Seven]),
    value_bits([Value::Four, Value::Five, Value::Six, Value::Seven, Value::Eight]),
    value_bits([Value::Five, Value::Six, Value::Seven, Value::Eight, Value::Nine]),
    value_bits([Value::Six, Value::Seven, Value::Eight, Value::Nine, Value::Ten]),
    value_bits([Value::Seven, Value::Eight, Value::Nine, Value::Ten, Value::Jack]),
    value_bits([Value::Eight, Value::Nine, Value::Ten, Value::Jack, Value::Queen]),
    value_bits([Value::Nine, Value::Ten, Value::Jack, Value::Queen, Value::King]),
    // Royal straight
    value_bits([Value::Ten, Value::Jack, Value::Queen, Value::King, Value::Ace]),
];

fn rank_straight(value_set: u32) -> Option<u32> {
    STRAIGHTS
        .iter()
        .position(|s| *s == value_set)
        .map(|i| i as u32)
}

/// Bit set of all the values that show up exactly `count` times.
fn values_with_count(counts: &[u8; 13], count: u8) -> u32 {
    counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == count)
        .fold(0, |bits, (v, _)| bits | 1 << v)
}

/// Rank exactly five cards.
///
/// This doesn't check for duplicates. Use `Rankable` when the cards come
/// from somewhere that isn't trusted.
pub fn rank_five(cards: &[Card; 5]) -> HandStrength {
    let mut suit_set: u32 = 0;
    let mut value_set: u32 = 0;
    let mut counts = [0u8; 13];

    for c in cards {
        let v = c.value as usize;
        suit_set |= 1 << c.suit as u32;
        value_set |= 1 << v;
        counts[v] += 1;
    }

    // The major deciding factor for hand rank
    // is the number of unique card values.
    match value_set.count_ones() {
        5 => {
            // If there are five different cards it can be a straight
            // a straight flush, a flush, or just a high card.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (Some(s), true) => HandStrength::new(HandCategory::StraightFlush, s),
                (Some(s), false) => HandStrength::new(HandCategory::Straight, s),
                (None, true) => HandStrength::new(HandCategory::Flush, value_set),
                (None, false) => HandStrength::new(HandCategory::HighCard, value_set),
            }
        }
        4 => {
            let major_rank = values_with_count(&counts, 2);
            let minor_rank = value_set ^ major_rank;
            HandStrength::new(HandCategory::OnePair, major_rank << 13 | minor_rank)
        }
        3 => {
            // this can be three of a kind or two pair.
            let three = values_with_count(&counts, 3);
            if three != 0 {
                let minor_rank = value_set ^ three;
                HandStrength::new(HandCategory::ThreeOfAKind, three << 13 | minor_rank)
            } else {
                let major_rank = values_with_count(&counts, 2);
                let minor_rank = value_set ^ major_rank;
                HandStrength::new(HandCategory::TwoPair, major_rank << 13 | minor_rank)
            }
        }
        _ => {
            // Two unique values: full house or four of a kind.
            let three = values_with_count(&counts, 3);
            if three != 0 {
                let minor_rank = value_set ^ three;
                HandStrength::new(HandCategory::FullHouse, three << 13 | minor_rank)
            } else {
                let major_rank = values_with_count(&counts, 4);
                let minor_rank = value_set ^ major_rank;
                HandStrength::new(HandCategory::FourOfAKind, major_rank << 13 | minor_rank)
            }
        }
    }
}

/// Can this turn into a hand strength?
pub trait Rankable {
    /// Rank the best five card hand out of 5 to 7 cards.
    fn rank(&self) -> Result<HandStrength, HoldemError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<HandStrength, HoldemError> {
        if self.len() < 5 {
            return Err(HoldemError::InsufficientCards(self.len()));
        }
        if self.len() > 7 {
            return Err(HoldemError::HoldemHandSize);
        }
        let mut seen = CardBitSet::new();
        for c in self {
            if !seen.insert(*c) {
                return Err(HoldemError::DuplicateCardInHand(*c));
            }
        }

        // Every subset is considered, not only the ones using hole cards.
        FiveCardSubsets::new(self)
            .map(|five| rank_five(&five))
            .max()
            .ok_or(HoldemError::InsufficientCards(self.len()))
    }
}

impl Rankable for Hand {
    /// Rank this hand. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more than once.
    fn rank(&self) -> Result<HandStrength, HoldemError> {
        let cards: Vec<Card> = self.iter().collect();
        cards[..].rank()
    }
}

/// Rank two hole cards together with whatever part of the board is out.
///
/// Pre-flop there are not enough cards and this returns
/// `InsufficientCards`.
///
/// ```
/// use rs_holdem::core::{Card, HandCategory, evaluate};
///
/// let hole = [Card::try_from("Ad").unwrap(), Card::try_from("2c").unwrap()];
/// let board: Vec<Card> = ["3s", "4h", "5d", "9c", "Ks"]
///     .iter()
///     .map(|s| Card::try_from(*s).unwrap())
///     .collect();
///
/// let strength = evaluate(&hole, &board).unwrap();
/// assert_eq!(HandCategory::Straight, strength.category());
/// ```
pub fn evaluate(hole: &[Card; 2], board: &[Card]) -> Result<HandStrength, HoldemError> {
    if board.len() > 5 {
        return Err(HoldemError::HoldemHandSize);
    }
    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    cards[2..2 + board.len()].copy_from_slice(board);
    cards[..2 + board.len()].rank()
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Deck, Suit};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().iter().collect()
    }

    fn rank_str(s: &str) -> HandStrength {
        cards(s)[..].rank().unwrap()
    }

    fn bits(values: &[Value]) -> u32 {
        values.iter().fold(0, |b, v| b | 1 << *v as u32)
    }

    #[test]
    fn test_cmp() {
        assert!(
            HandStrength::new(HandCategory::HighCard, 0)
                < HandStrength::new(HandCategory::StraightFlush, 0)
        );
        assert!(
            HandStrength::new(HandCategory::HighCard, 100)
                < HandStrength::new(HandCategory::OnePair, 0)
        );
        assert!(
            HandStrength::new(HandCategory::HighCard, 0)
                < HandStrength::new(HandCategory::HighCard, 100)
        );
    }

    #[test]
    fn test_high_card_hand() {
        let rank = bits(&[Value::Ace, Value::Eight, Value::Nine, Value::Ten, Value::Five]);
        assert_eq!(
            HandStrength::new(HandCategory::HighCard, rank),
            rank_str("Ad8h9cTc5c")
        );
    }

    #[test]
    fn test_flush() {
        let rank = bits(&[Value::Ace, Value::Eight, Value::Nine, Value::Ten, Value::Five]);
        assert_eq!(
            HandStrength::new(HandCategory::Flush, rank),
            rank_str("Ad8d9dTd5d")
        );
    }

    #[test]
    fn test_full_house() {
        let rank = bits(&[Value::Nine]) << 13 | bits(&[Value::Ace]);
        assert_eq!(
            HandStrength::new(HandCategory::FullHouse, rank),
            rank_str("AdAc9d9c9s")
        );
    }

    #[test]
    fn test_two_pair() {
        let rank = bits(&[Value::Ace, Value::Nine]) << 13 | bits(&[Value::Ten]);
        assert_eq!(
            HandStrength::new(HandCategory::TwoPair, rank),
            rank_str("AdAc9d9cTs")
        );
    }

    #[test]
    fn test_one_pair() {
        let rank = bits(&[Value::Ace]) << 13 | bits(&[Value::Nine, Value::Eight, Value::Ten]);
        assert_eq!(
            HandStrength::new(HandCategory::OnePair, rank),
            rank_str("AdAc9d8cTs")
        );
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = bits(&[Value::Ace]) << 13 | bits(&[Value::Ten]);
        assert_eq!(
            HandStrength::new(HandCategory::FourOfAKind, rank),
            rank_str("AdAcAsAhTs")
        );
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = bits(&[Value::Two]) << 13 | bits(&[Value::Five, Value::Six]);
        assert_eq!(
            HandStrength::new(HandCategory::ThreeOfAKind, rank),
            rank_str("2c2s2h5s6d")
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(
            HandStrength::new(HandCategory::Straight, 0),
            rank_str("Ad2c3s4h5s")
        );
    }

    #[test]
    fn test_straight() {
        assert_eq!(
            HandStrength::new(HandCategory::Straight, 1),
            rank_str("2c3s4h5s6d")
        );
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        let hole = [
            Card::new(Value::Ace, Suit::Diamond),
            Card::new(Value::Two, Suit::Club),
        ];
        let board = cards("3s4h5d9cKs");
        let wheel = evaluate(&hole, &board).unwrap();
        assert_eq!(HandCategory::Straight, wheel.category());

        let six_high = rank_str("2c3s4h5s6d");
        assert!(wheel < six_high);
        assert!(wheel < rank_str("TdJcQsKhAs"));
    }

    #[test]
    fn test_board_straight_flush_dominates() {
        let board = cards("7s8s9sTsJs");
        let junk = [
            Card::new(Value::Two, Suit::Diamond),
            Card::new(Value::Three, Suit::Club),
        ];
        let suited = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        ];
        let a = evaluate(&junk, &board).unwrap();
        let b = evaluate(&suited, &board).unwrap();
        assert_eq!(HandCategory::StraightFlush, a.category());
        assert_eq!(a, b);
        assert_eq!(rank_str("7s8s9sTsJs"), a);
    }

    #[test]
    fn test_seven_cards_picks_best() {
        // Pair of aces on the board, trips with the hole cards.
        let strength = rank_str("AsAd2c7h9sAcKd");
        assert_eq!(HandCategory::ThreeOfAKind, strength.category());
        let expected = bits(&[Value::Ace]) << 13 | bits(&[Value::King, Value::Nine]);
        assert_eq!(expected, strength.tiebreak());

        // Three pair only plays the top two.
        let strength = rank_str("AsAdKcKh2s2d9c");
        assert_eq!(HandCategory::TwoPair, strength.category());
        assert_eq!(rank_str("AsAdKcKh9c"), strength);
    }

    #[test]
    fn test_kickers_break_ties() {
        assert!(rank_str("AsAd9c7h3s") > rank_str("AcAh9d7s2c"));
        assert_eq!(rank_str("AsAd9c7h3s"), rank_str("AcAh9d7s3c"));
        assert!(rank_str("KsKdKcQhQs") > rank_str("QcQdQhAsAd"));
        assert!(rank_str("KsKdQcQh3s") > rank_str("KcKhJdJs9c"));
    }

    #[test]
    fn test_order_invariant() {
        let mut rng = StdRng::seed_from_u64(420);
        for n in 5..=7 {
            for _ in 0..200 {
                let mut deck = Deck::shuffled(&mut rng);
                let mut hand = deck.draw(n).unwrap();
                let expected = hand[..].rank().unwrap();
                for _ in 0..5 {
                    hand.shuffle(&mut rng);
                    assert_eq!(expected, hand[..].rank().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_category_dominates_kickers() {
        // Strongest hand of each category followed by weakest of the next.
        let pairs = [
            ("AsKdQcJh9s", "2s2d3c4h5s"),
            ("AsAdKcQhJs", "2s2d3c3h4s"),
            ("AsAdKcKhQs", "2s2d2c3h4s"),
            ("AsAdAcKhQs", "As2d3c4h5s"),
            ("TsJdQcKhAs", "2s3s4s5s7s"),
            ("AsKsQsJs9s", "2s2d2c3h3s"),
            ("AsAdAcKhKs", "2s2d2c2h3s"),
            ("AsAdAcAhKs", "As2s3s4s5s"),
        ];
        for (lower, higher) in pairs {
            let lower = rank_str(lower);
            let higher = rank_str(higher);
            assert!(lower.category() < higher.category());
            assert!(lower < higher);
        }
    }

    #[test]
    fn test_errors() {
        let four = cards("AsKsQsJs");
        assert_eq!(Err(HoldemError::InsufficientCards(4)), four[..].rank());

        let hole = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        ];
        assert_eq!(
            Err(HoldemError::InsufficientCards(2)),
            evaluate(&hole, &[])
        );
        assert_eq!(
            Err(HoldemError::DuplicateCardInHand(hole[0])),
            evaluate(&hole, &cards("As2d3c"))
        );
        assert_eq!(
            Err(HoldemError::HoldemHandSize),
            evaluate(&hole, &cards("2d3c4h5s6d7c"))
        );
    }

    #[test]
    fn test_hand_rank() {
        let hand = Hand::new_from_str("AdKdQdJdTd").unwrap();
        assert_eq!(
            HandStrength::new(HandCategory::StraightFlush, 9),
            hand.rank().unwrap()
        );
    }

    #[test]
    fn test_straight_constants() {
        for c in STRAIGHTS.iter() {
            // Make sure that all of the constant hands have exactly 5 ones.
            assert_eq!(5, c.count_ones());
        }
    }

    #[test]
    fn test_all_five_card_hands_distribution() {
        let all = Deck::new().draw(52).unwrap();
        let mut counts = [0usize; 9];
        for five in FiveCardSubsets::new(&all) {
            counts[rank_five(&five).category() as usize] += 1;
        }
        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40],
            counts
        );
    }
}
