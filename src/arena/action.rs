use std::fmt;

use crate::core::{Card, HandStrength};

use super::game_state::Round;

/// The different kinds of decisions an agent can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Fold,
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Bet,
        ActionKind::Raise,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A small set of `ActionKind`s. This is what the engine hands
/// to agents as the legal actions for a seat.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, kind: ActionKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<T: IntoIterator<Item = ActionKind>>(iter: T) -> Self {
        let mut set = ActionSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ActionSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ActionSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kinds: Vec<ActionKind> = serde::Deserialize::deserialize(deserializer)?;
        Ok(kinds.into_iter().collect())
    }
}

/// What an agent wants to do.
///
/// `Bet` and `Raise` carry the number of chips on top of whatever is
/// needed to call. The other actions have no amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentAction {
    Fold,
    Check,
    Call,
    Bet(u32),
    Raise(u32),
}

impl AgentAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            AgentAction::Fold => ActionKind::Fold,
            AgentAction::Check => ActionKind::Check,
            AgentAction::Call => ActionKind::Call,
            AgentAction::Bet(_) => ActionKind::Bet,
            AgentAction::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for AgentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentAction::Fold => write!(f, "Fold"),
            AgentAction::Check => write!(f, "Check"),
            AgentAction::Call => write!(f, "Call"),
            AgentAction::Bet(amount) => write!(f, "Bet {amount}"),
            AgentAction::Raise(amount) => write!(f, "Raise {amount}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForcedBetType {
    SmallBlind,
    BigBlind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcedBetPayload {
    pub idx: usize,
    /// Chips actually posted. Less than the blind for a short stack.
    pub bet: u32,
    pub forced_bet_type: ForcedBetType,
}

/// The result of applying an agent's action to the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayedActionPayload {
    pub idx: usize,
    /// What the agent asked for.
    pub action: AgentAction,
    /// What the engine did. An illegal request becomes a fold.
    pub applied: AgentAction,
    /// Chips moved from the stack into the pot.
    pub put_in: u32,
    /// The seat's commitment for the round after the action.
    pub commitment: u32,
    pub all_in: bool,
    pub pot: u32,
}

impl PlayedActionPayload {
    /// Was the request turned into a fold?
    pub fn is_implicit_fold(&self) -> bool {
        self.applied == AgentAction::Fold && self.action != AgentAction::Fold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardPayload {
    pub idx: usize,
    pub award_amount: u32,
    /// None when everyone else folded.
    pub strength: Option<HandStrength>,
}

/// Everything that happens in a hand, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    GameStart,
    ForcedBet(ForcedBetPayload),
    DealStartingHand { idx: usize, cards: [Card; 2] },
    RoundAdvance(Round),
    DealCommunity(Card),
    PlayedAction(PlayedActionPayload),
    Award(AwardPayload),
}
