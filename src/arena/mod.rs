//! This is the arena module for playing hands between agents.
//!
//! # Single Simulation
//!
//! The tools allow explicit control over the
//! simulation all the way down to the rng and the deck.
//!
//! ## Single Simulation Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use rs_holdem::arena::agent::{CallingAgent, RandomAgent};
//! use rs_holdem::arena::{Agent, Blinds, RngHoldemSimulationBuilder};
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::<CallingAgent>::default(),
//!     Box::new(RandomAgent::new(42)),
//! ];
//! let rng = StdRng::seed_from_u64(420);
//!
//! let mut sim = RngHoldemSimulationBuilder::default()
//!     .stacks(vec![100, 100])
//!     .blinds(Blinds::new(5, 10))
//!     .agents(agents)
//!     .rng(rng)
//!     .build()
//!     .unwrap();
//!
//! let result = sim.run().unwrap();
//! assert_eq!(result.pot, result.pot_distribution.iter().sum::<u32>());
//! ```
//!
//! ## Writing an agent
//!
//! Agents only ever see a `PlayerView` of the seat they're playing. They
//! can't see other hole cards or change the game state.
//!
//! ```
//! use rs_holdem::arena::action::{ActionKind, AgentAction};
//! use rs_holdem::arena::agent::PlayerView;
//! use rs_holdem::arena::Agent;
//!
//! struct PotOddsAgent;
//!
//! impl Agent for PotOddsAgent {
//!     fn act(&mut self, view: &PlayerView<'_>) -> AgentAction {
//!         if view.can(ActionKind::Check) {
//!             AgentAction::Check
//!         } else if view.pot_odds() < 0.25 {
//!             AgentAction::Call
//!         } else {
//!             AgentAction::Fold
//!         }
//!     }
//! }
//! ```
pub mod action;
pub mod agent;
pub mod errors;
pub mod game_state;
pub mod showdown;
pub mod sim_builder;
pub mod simulation;

#[cfg(test)]
pub mod test_util;

pub use agent::Agent;
pub use game_state::{BettingState, Blinds, GameState, Round, Seat};
pub use sim_builder::{HoldemSimulationBuilder, RngHoldemSimulationBuilder, play_hand};
pub use simulation::{HandEnding, HandResult, HoldemSimulation};
