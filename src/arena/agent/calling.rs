use crate::arena::action::AgentAction;

use super::{Agent, PlayerView};

/// A simple agent that always calls. This can
/// stand in for a player who is a calling
/// station for the rest of a hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingAgent;

impl Agent for CallingAgent {
    fn act(&mut self, view: &PlayerView<'_>) -> AgentAction {
        view.check_or_call()
    }
}
