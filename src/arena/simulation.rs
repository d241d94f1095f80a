use std::fmt;

use tracing::event;

use crate::core::{Card, Deck, HandStrength};

use super::Agent;
use super::action::{Action, AwardPayload};
use super::errors::HoldemSimulationError;
use super::game_state::{BettingState, GameState, Round};
use super::showdown;

/// How the hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandEnding {
    /// Everyone else folded in `round`. No cards were shown.
    Uncontested { winner: usize, round: Round },
    /// Cards were compared after the river.
    Showdown { winners: Vec<usize> },
}

/// Everything needed to score a finished hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The pot before it was awarded.
    pub pot: u32,
    /// Chips won by each seat. Sums to `pot`.
    pub pot_distribution: Vec<u32>,
    pub final_board: Vec<Card>,
    pub hole_cards: Vec<Option<[Card; 2]>>,
    /// Evaluated strength for the seats that went to showdown.
    pub final_hands: Vec<Option<HandStrength>>,
    pub starting_stacks: Vec<u32>,
    pub final_stacks: Vec<u32>,
    pub ending: HandEnding,
    pub actions: Vec<Action>,
}

impl HandResult {
    /// Chips won or lost by the seat over the hand.
    pub fn net(&self, idx: usize) -> i64 {
        i64::from(self.final_stacks[idx]) - i64::from(self.starting_stacks[idx])
    }

    /// The hand as a json record, for writing out hand histories.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Plays a single hand of no-limit hold'em between agents.
///
/// Create one with `HoldemSimulationBuilder`.
pub struct HoldemSimulation {
    agents: Vec<Box<dyn Agent>>,
    pub game_state: GameState,
    pub deck: Deck,
    pub actions: Vec<Action>,
}

impl HoldemSimulation {
    pub fn new_with_agents_and_deck(
        game_state: GameState,
        deck: Deck,
        agents: Vec<Box<dyn Agent>>,
    ) -> Self {
        Self {
            agents,
            game_state,
            deck,
            actions: vec![],
        }
    }

    /// Play the hand from blinds to the awarding of the pot.
    pub fn run(&mut self) -> Result<HandResult, HoldemSimulationError> {
        self.start()?;

        loop {
            self.run_betting_round();
            match self.game_state.state() {
                BettingState::HandOverSingleSurvivor(_) => break,
                _ if self.game_state.round == Round::River => break,
                _ => {
                    let round = self.game_state.advance_round()?;
                    self.actions.push(Action::RoundAdvance(round));
                    self.deal_community(round.community_cards())?;
                }
            }
        }

        self.settle()
    }

    fn start(&mut self) -> Result<(), HoldemSimulationError> {
        self.actions.push(Action::GameStart);
        for payload in self.game_state.post_blinds() {
            self.actions.push(Action::ForcedBet(payload));
        }

        for idx in 0..self.game_state.num_players() {
            // Folded before the first card means the seat is sitting out.
            if self.game_state.seats[idx].folded {
                continue;
            }
            let cards = [self.deck.deal()?, self.deck.deal()?];
            event!(tracing::Level::TRACE, idx, ?cards, "Dealt starting hand");
            self.game_state.hands[idx] = Some(cards);
            self.actions.push(Action::DealStartingHand { idx, cards });
        }
        Ok(())
    }

    fn deal_community(&mut self, num_cards: usize) -> Result<(), HoldemSimulationError> {
        for _ in 0..num_cards {
            let card = self.deck.deal()?;
            event!(tracing::Level::TRACE, ?card, "Dealt community card");
            self.game_state.board.push(card);
            self.actions.push(Action::DealCommunity(card));
        }
        Ok(())
    }

    fn run_betting_round(&mut self) {
        while let BettingState::AwaitingAction(idx) = self.game_state.state() {
            let view = self.game_state.player_view(idx);
            let action = self.agents[idx].act(&view);
            let payload = self.game_state.apply_action(action);
            self.actions.push(Action::PlayedAction(payload));
        }
    }

    fn settle(&mut self) -> Result<HandResult, HoldemSimulationError> {
        let result = showdown::resolve(&self.game_state)?;
        let pot = self.game_state.take_pot();

        for (idx, award_amount) in result.winnings.iter().enumerate() {
            if *award_amount == 0 {
                continue;
            }
            self.game_state.award(idx, *award_amount);
            self.actions.push(Action::Award(AwardPayload {
                idx,
                award_amount: *award_amount,
                strength: result.strengths[idx],
            }));
        }

        let ending = match self.game_state.state() {
            BettingState::HandOverSingleSurvivor(winner) => HandEnding::Uncontested {
                winner,
                round: self.game_state.round,
            },
            _ => HandEnding::Showdown {
                winners: result.winners,
            },
        };
        event!(tracing::Level::INFO, pot, ?ending, "Hand complete");

        Ok(HandResult {
            pot,
            pot_distribution: result.winnings,
            final_board: self.game_state.board.clone(),
            hole_cards: self.game_state.hands.clone(),
            final_hands: result.strengths,
            starting_stacks: self.game_state.starting_stacks.clone(),
            final_stacks: self.game_state.seats.iter().map(|s| s.stack).collect(),
            ending,
            actions: self.actions.clone(),
        })
    }
}

impl fmt::Debug for HoldemSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoldemSimulation")
            .field("game_state", &self.game_state)
            .field("deck", &self.deck)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::arena::action::AgentAction;
    use crate::arena::agent::{AllInAgent, CallingAgent, RandomAgent, VecReplayAgent};
    use crate::arena::game_state::Blinds;
    use crate::arena::test_util::{assert_valid_game_state, assert_valid_hand_result, stacked_deck};
    use crate::arena::RngHoldemSimulationBuilder;
    use crate::core::{HandCategory, HoldemError};

    fn build(
        stacks: Vec<u32>,
        deck: Deck,
        agents: Vec<Box<dyn Agent>>,
    ) -> HoldemSimulation {
        RngHoldemSimulationBuilder::<StdRng>::default()
            .stacks(stacks)
            .blinds(Blinds::new(5, 10))
            .deck(deck)
            .agents(agents)
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn test_fold_on_flop_ends_hand() {
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(VecReplayAgent::new(vec![AgentAction::Call, AgentAction::Fold])),
            Box::new(VecReplayAgent::new(vec![AgentAction::Check, AgentAction::Bet(20)])),
            Box::new(VecReplayAgent::new(vec![AgentAction::Call, AgentAction::Fold])),
        ];
        let deck = stacked_deck("2c 3c 4d 5d 6h 7h 8s 9s Ts Js Qs");
        let mut sim = build(vec![100; 3], deck, agents);
        let result = sim.run().unwrap();

        assert_eq!(
            HandEnding::Uncontested {
                winner: 1,
                round: Round::Flop
            },
            result.ending
        );
        // Nothing after the flop is dealt.
        assert_eq!(3, result.final_board.len());
        assert!(!result.actions.contains(&Action::RoundAdvance(Round::Turn)));
        assert_eq!(50, result.pot);
        assert_eq!(vec![0, 50, 0], result.pot_distribution);
        assert_eq!(vec![90, 120, 90], result.final_stacks);
        assert!(result.final_hands.iter().all(Option::is_none));
        assert_valid_hand_result(&result);
        assert_valid_game_state(&sim.game_state);
    }

    #[test_log::test]
    fn test_showdown_best_hand_wins() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(CallingAgent), Box::new(CallingAgent)];
        let deck = stacked_deck("As Ad Kc Kd 2h 7s 9c Jd 3h");
        let mut sim = build(vec![100, 100], deck, agents);
        let result = sim.run().unwrap();

        assert_eq!(HandEnding::Showdown { winners: vec![0] }, result.ending);
        assert_eq!(20, result.pot);
        assert_eq!(vec![110, 90], result.final_stacks);
        assert_eq!(5, result.final_board.len());
        assert_eq!(
            HandCategory::OnePair,
            result.final_hands[0].unwrap().category()
        );
        assert!(result.final_hands[0] > result.final_hands[1]);
        assert_valid_hand_result(&result);
    }

    #[test_log::test]
    fn test_split_pot_odd_chip() {
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(VecReplayAgent::new(vec![AgentAction::Fold])),
            Box::new(CallingAgent),
            Box::new(CallingAgent),
        ];
        let deck = stacked_deck("2c 3c 4d 5d 4h 5h Ts Js Qs Ks As");
        let mut sim = build(vec![100; 3], deck, agents);
        let result = sim.run().unwrap();

        assert_eq!(25, result.pot);
        // Seat 1 is left of the button so takes the odd chip.
        assert_eq!(vec![0, 13, 12], result.pot_distribution);
        assert_eq!(vec![95, 103, 102], result.final_stacks);
        assert_eq!(HandEnding::Showdown { winners: vec![1, 2] }, result.ending);
        assert_eq!(result.final_hands[1], result.final_hands[2]);
        assert_valid_hand_result(&result);
    }

    #[test_log::test]
    fn test_all_in_runs_out_board() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(AllInAgent), Box::new(AllInAgent), Box::new(AllInAgent)];
        let mut sim = RngHoldemSimulationBuilder::default()
            .stacks(vec![300, 50, 120])
            .agents(agents)
            .rng(StdRng::seed_from_u64(420))
            .build()
            .unwrap();
        let result = sim.run().unwrap();

        assert_eq!(470, result.pot);
        assert_eq!(5, result.final_board.len());
        assert!(matches!(result.ending, HandEnding::Showdown { .. }));
        // Nobody had to act after the pre-flop shove.
        assert!(!result.actions.iter().any(|a| matches!(
            a,
            Action::PlayedAction(p) if p.idx == 0 && p.applied == AgentAction::Check
        )));
        assert_valid_hand_result(&result);
        assert_valid_game_state(&sim.game_state);
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn test_hand_result_json() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(CallingAgent), Box::new(CallingAgent)];
        let deck = stacked_deck("As Ad Kc Kd 2h 7s 9c Jd 3h");
        let mut sim = build(vec![100, 100], deck, agents);
        let result = sim.run().unwrap();

        let json = result.to_json().unwrap();
        let parsed: HandResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }

    #[test_log::test]
    fn test_deck_exhausted_is_error() {
        let agents: Vec<Box<dyn Agent>> =
            vec![Box::new(CallingAgent), Box::new(CallingAgent)];
        let deck = stacked_deck("As Ad Kc Kd 2h");
        let mut sim = build(vec![100, 100], deck, agents);

        assert_eq!(
            Err(HoldemSimulationError::Holdem(HoldemError::DeckExhausted {
                requested: 1,
                remaining: 0
            })),
            sim.run()
        );
    }

    #[test_log::test]
    fn test_random_agents_conserve_chips() {
        for seed in 0..200 {
            let num_players = 2 + (seed as usize % 8);
            let agents: Vec<Box<dyn Agent>> = (0..num_players)
                .map(|idx| -> Box<dyn Agent> {
                    Box::new(RandomAgent::new(seed * 31 + idx as u64))
                })
                .collect();
            let stacks: Vec<u32> = (0..num_players).map(|i| 40 + 37 * i as u32).collect();
            let mut sim = RngHoldemSimulationBuilder::default()
                .stacks(stacks)
                .button(seed as usize % num_players)
                .agents(agents)
                .rng(StdRng::seed_from_u64(seed))
                .build()
                .unwrap();
            let result = sim.run().unwrap();

            assert_valid_hand_result(&result);
            assert_valid_game_state(&sim.game_state);
        }
    }
}
