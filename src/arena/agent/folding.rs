use crate::arena::action::{ActionKind, AgentAction};

use super::{Agent, PlayerView};

/// A simple agent that checks when it's free and folds otherwise.
#[derive(Default, Debug, Clone, Copy)]
pub struct FoldingAgent;

impl Agent for FoldingAgent {
    fn act(&mut self, view: &PlayerView<'_>) -> AgentAction {
        if view.can(ActionKind::Check) {
            AgentAction::Check
        } else {
            AgentAction::Fold
        }
    }
}
