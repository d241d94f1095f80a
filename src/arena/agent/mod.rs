//! `Agent`s are the automated players in the simulation. They hold the
//! strategy, the engine holds the rules.
//!
//! Some basic agents are provided as a way of testing baseline value.
mod all_in;
mod calling;
mod folding;
mod random;
mod replay;

use crate::core::Card;

use super::action::{ActionKind, ActionSet, AgentAction};
use super::game_state::{Blinds, Round, Seat};

/// This is the trait that you need to implement in order to implement
/// different strategies. It's up to you to implement the logic and state.
pub trait Agent {
    /// Called by the simulation whenever it's this agent's turn.
    ///
    /// Anything not in `view.valid_actions` is played as a fold.
    fn act(&mut self, view: &PlayerView<'_>) -> AgentAction;
}

/// What a seat is allowed to know when it's asked to act.
///
/// Only the acting seat's own hole cards are visible. Everything about
/// the other seats is public table information.
#[derive(Debug, Clone)]
pub struct PlayerView<'a> {
    /// The seat being asked to act.
    pub idx: usize,
    pub hole_cards: Option<[Card; 2]>,
    pub board: &'a [Card],
    pub round: Round,
    pub pot: u32,
    pub current_bet: u32,
    pub amount_to_call: u32,
    pub stack: u32,
    pub commitment: u32,
    pub num_players: usize,
    /// Seats that have not folded.
    pub num_active_players: usize,
    pub button_idx: usize,
    pub blinds: Blinds,
    pub seats: &'a [Seat],
    pub valid_actions: ActionSet,
}

impl PlayerView<'_> {
    pub fn can(&self, kind: ActionKind) -> bool {
        self.valid_actions.contains(kind)
    }

    /// Stacks, commitments and fold status of everyone else at the table.
    pub fn opponents(&self) -> impl Iterator<Item = (usize, &Seat)> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != self.idx)
    }

    /// The fraction of the final pot the call would be. Zero when
    /// checking is free.
    pub fn pot_odds(&self) -> f64 {
        if self.amount_to_call == 0 {
            return 0.0;
        }
        let call = f64::from(self.amount_to_call.min(self.stack));
        call / (f64::from(self.pot) + call)
    }

    /// Check when it's free, otherwise call.
    pub(crate) fn check_or_call(&self) -> AgentAction {
        if self.can(ActionKind::Check) {
            AgentAction::Check
        } else if self.can(ActionKind::Call) {
            AgentAction::Call
        } else {
            AgentAction::Fold
        }
    }
}

pub use all_in::AllInAgent;
pub use calling::CallingAgent;
pub use folding::FoldingAgent;
pub use random::RandomAgent;
pub use replay::VecReplayAgent;
