use crate::arena::action::{ActionKind, AgentAction};

use super::{Agent, PlayerView};

/// An agent that puts its whole stack in at the first chance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllInAgent;

impl Agent for AllInAgent {
    fn act(&mut self, view: &PlayerView<'_>) -> AgentAction {
        if view.can(ActionKind::Bet) {
            AgentAction::Bet(view.stack)
        } else if view.can(ActionKind::Raise) {
            AgentAction::Raise(view.stack - view.amount_to_call)
        } else {
            view.check_or_call()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{
        action::AgentAction,
        agent::PlayerView,
        game_state::{Blinds, GameState},
    };

    use super::*;

    fn action_for(game_state: &GameState, idx: usize) -> AgentAction {
        let view: PlayerView<'_> = game_state.player_view(idx);
        AllInAgent.act(&view)
    }

    #[test]
    fn test_shoves() {
        let mut game_state = GameState::new(vec![100, 100, 30], Blinds::new(5, 10), 0);
        game_state.post_blinds();
        // Raise on top of the 10 to call.
        assert_eq!(AgentAction::Raise(20), action_for(&game_state, 2));

        game_state.apply_action(AgentAction::Raise(20));
        assert_eq!(AgentAction::Raise(70), action_for(&game_state, 0));
    }

    #[test]
    fn test_calls_when_cant_raise() {
        let mut game_state = GameState::new(vec![100, 100, 8], Blinds::new(5, 10), 0);
        game_state.post_blinds();
        // Seat 2 is first and has only 8 against a bet of 10.
        assert_eq!(AgentAction::Call, action_for(&game_state, 2));

        game_state.apply_action(AgentAction::Call);
        assert!(game_state.seats[2].is_all_in());
    }
}
