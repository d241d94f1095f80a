use std::fmt;

use super::error::HoldemError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything past the ace saturates to the ace.
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The face rank of the card where the ace plays high.
    ///
    /// ```
    /// use rs_holdem::core::Value;
    ///
    /// assert_eq!(2, Value::Two.rank());
    /// assert_eq!(14, Value::Ace.rank());
    /// ```
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s % 4)]
    }

    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'd' | 'D' => Some(Suit::Diamond),
            's' | 'S' => Some(Suit::Spade),
            'h' | 'H' => Some(Suit::Heart),
            'c' | 'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Every card has a unique index in `0..52`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = HoldemError;

    /// Parse a two character card like `As` or `Td`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars
            .next()
            .ok_or(HoldemError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(HoldemError::UnexpectedValueChar))?;
        let s = chars
            .next()
            .ok_or(HoldemError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(HoldemError::UnexpectedSuitChar))?;

        if chars.next().is_some() {
            return Err(HoldemError::UnparsedCharsRemaining);
        }
        Ok(Card::new(v, s))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}
