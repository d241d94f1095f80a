use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Hash, PartialEq, Eq, Clone)]
pub enum HoldemError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Holdem hands should never have more than 7 cards in them.")]
    HoldemHandSize,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("At least 5 cards are needed to rank a hand, got {0}")]
    InsufficientCards(usize),
    #[error("Tried to draw {requested} cards with only {remaining} left in the deck")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Simulation needs {needed} unseen cards but only {remaining} remain")]
    InsufficientDeck { needed: usize, remaining: usize },
    #[error("Equity estimation needs at least one sample")]
    NoSamples,
}
