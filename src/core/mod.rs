//! This is the core module. It exports the non-betting
//! related code: cards, decks, hands and hand ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type shared by everything in core.
mod error;
pub use self::error::HoldemError;

/// Bit set of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::FiveCardSubsets;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, HandStrength, Rankable, STRAIGHTS, evaluate, rank_five};
