use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::arena::action::{ActionKind, AgentAction};

use super::{Agent, PlayerView};

/// An agent that picks uniformly among the legal actions.
///
/// Bets and raises are always the same fixed size. Handy for fuzzing the
/// engine with a lot of different lines.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    bet_size: u32,
    raise_size: u32,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            bet_size: 50,
            raise_size: 100,
        }
    }

    pub fn with_sizes(mut self, bet_size: u32, raise_size: u32) -> Self {
        self.bet_size = bet_size;
        self.raise_size = raise_size;
        self
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, view: &PlayerView<'_>) -> AgentAction {
        let kinds: Vec<ActionKind> = view.valid_actions.iter().collect();
        match kinds.choose(&mut self.rng) {
            Some(ActionKind::Check) => AgentAction::Check,
            Some(ActionKind::Call) => AgentAction::Call,
            Some(ActionKind::Bet) => AgentAction::Bet(self.bet_size),
            Some(ActionKind::Raise) => AgentAction::Raise(self.raise_size),
            Some(ActionKind::Fold) | None => AgentAction::Fold,
        }
    }
}
