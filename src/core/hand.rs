use super::{Card, CardBitSet, CardBitSetIter, HoldemError, Suit, Value};

/// A set of cards that belong together, like hole cards
/// plus whatever part of the board has been dealt.
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand(CardBitSet);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_holdem::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_holdem::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    pub fn remove(&mut self, c: &Card) -> bool {
        self.0.remove(*c)
    }

    /// Add a card. Returns false if it was already held.
    pub fn insert(&mut self, c: Card) -> bool {
        self.0.insert(c)
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Parse a run of two character cards like `AdKh9s`.
    ///
    /// ```
    /// use rs_holdem::core::{Hand, HoldemError};
    ///
    /// assert_eq!(2, Hand::new_from_str("AdKh").unwrap().count());
    /// assert!(matches!(
    ///     Hand::new_from_str("AdAd"),
    ///     Err(HoldemError::DuplicateCardInHand(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, HoldemError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut bitset = CardBitSet::new();

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(HoldemError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(HoldemError::TooFewChars)
                .and_then(|sc| Suit::from_char(sc).ok_or(HoldemError::UnexpectedSuitChar))?;

            let c = Card::new(v, s);
            if !bitset.insert(c) {
                return Err(HoldemError::DuplicateCardInHand(c));
            }
        }

        Ok(Self(bitset))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self(CardBitSet::new())
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl From<Hand> for CardBitSet {
    fn from(val: Hand) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut hand = Hand::new();
        for i in 1..7 {
            let c = Card::from(i);
            assert!(hand.insert(c));
            assert!(hand.contains(&c));
            assert_eq!(hand.count(), usize::from(i));
        }
        assert!(!hand.insert(Card::from(1)));
    }

    #[test]
    fn test_is_empty() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.insert(Card::from(1));
        assert!(!hand.is_empty());
        hand.clear();

        assert!(hand.is_empty());
    }

    #[test]
    fn test_parse_with_spaces() {
        let hand = Hand::new_from_str("As Kd 9c").unwrap();
        assert_eq!(3, hand.count());
        assert!(hand.contains(&Card::new(Value::King, Suit::Diamond)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(HoldemError::TooFewChars),
            Hand::new_from_str("AsK")
        );
        assert_eq!(
            Err(HoldemError::UnexpectedSuitChar),
            Hand::new_from_str("Ax")
        );
        assert_eq!(
            Err(HoldemError::UnexpectedValueChar),
            Hand::new_from_str("1s")
        );
    }
}
