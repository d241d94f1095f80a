use crate::arena::action::AgentAction;

use super::{Agent, PlayerView};

/// A replay agent that will replay a sequence of actions
/// from a vector. Once the actions run out it folds.
#[derive(Debug, Clone)]
pub struct VecReplayAgent {
    actions: Vec<AgentAction>,
    idx: usize,
    default: AgentAction,
}

impl VecReplayAgent {
    pub fn new(actions: Vec<AgentAction>) -> Self {
        Self {
            actions,
            idx: 0,
            default: AgentAction::Fold,
        }
    }

    /// Play `default` once the scripted actions are used up.
    pub fn with_default(mut self, default: AgentAction) -> Self {
        self.default = default;
        self
    }
}

impl Agent for VecReplayAgent {
    fn act(&mut self, _view: &PlayerView<'_>) -> AgentAction {
        let idx = self.idx;
        self.idx += 1;
        self.actions.get(idx).copied().unwrap_or(self.default)
    }
}
