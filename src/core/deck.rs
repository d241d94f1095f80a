use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};
use super::card_bit_set::CardBitSet;
use super::error::HoldemError;

/// `Deck` is an ordered sequence of cards with a cursor.
///
/// Cards are dealt from the front. Everything before the cursor
/// has been dealt and will never be handed out again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    cursor: usize,
}

impl Deck {
    /// Create the 52 card deck in a fixed order.
    ///
    /// ```
    /// use rs_holdem::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards, cursor: 0 }
    }

    /// Create a full deck and give it a uniform shuffle.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Randomly shuffle the cards that haven't been dealt yet.
    ///
    /// Dealt and removed cards stay out of the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.cursor..].shuffle(rng);
    }

    /// Given a card, is it still available to be dealt?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards[self.cursor..].contains(c)
    }

    /// Take a card out of the deck so that it can never be dealt.
    ///
    /// Returns true if the card was in the deck.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|card| card == c) {
            Some(pos) => {
                self.cards.remove(pos);
                if pos < self.cursor {
                    self.cursor -= 1;
                }
                true
            }
            None => false,
        }
    }

    /// Remove every card of a known set, like hole cards and the board.
    pub fn remove_all<'a, I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let known: CardBitSet = cards.into_iter().copied().collect();
        let dealt = self.cards[..self.cursor]
            .iter()
            .filter(|c| known.contains(**c))
            .count();
        self.cards.retain(|c| !known.contains(*c));
        self.cursor -= dealt;
    }

    /// How many cards are left to be dealt.
    pub fn len(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deal the card at the front of the deck.
    pub fn deal(&mut self) -> Result<Card, HoldemError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(HoldemError::DeckExhausted {
                requested: 1,
                remaining: 0,
            })?;
        self.cursor += 1;
        Ok(card)
    }

    /// Draw `k` cards from the front of the deck.
    ///
    /// Nothing is drawn if fewer than `k` cards remain.
    ///
    /// ```
    /// use rs_holdem::core::{Deck, HoldemError};
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(50, deck.draw(50).unwrap().len());
    /// assert_eq!(
    ///     Err(HoldemError::DeckExhausted { requested: 3, remaining: 2 }),
    ///     deck.draw(3)
    /// );
    /// assert_eq!(2, deck.len());
    /// ```
    pub fn draw(&mut self, k: usize) -> Result<Vec<Card>, HoldemError> {
        let drawn = self.draw_slice(k)?;
        Ok(drawn.to_vec())
    }

    /// Same as `draw` without allocating.
    pub fn draw_slice(&mut self, k: usize) -> Result<&[Card], HoldemError> {
        let remaining = self.len();
        if remaining < k {
            return Err(HoldemError::DeckExhausted {
                requested: k,
                remaining,
            });
        }
        let start = self.cursor;
        self.cursor += k;
        Ok(&self.cards[start..self.cursor])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a deck out of whatever cards are in the set.
impl From<CardBitSet> for Deck {
    fn from(value: CardBitSet) -> Self {
        Self {
            cards: value.into_iter().collect(),
            cursor: 0,
        }
    }
}

/// A stacked deck. Cards are dealt in the order given.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }
}
