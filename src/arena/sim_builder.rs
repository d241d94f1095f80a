use rand::{Rng, rngs::ThreadRng};

use crate::core::Deck;

use super::{
    Agent, HoldemSimulation,
    agent::FoldingAgent,
    errors::HoldemSimulationError,
    game_state::{Blinds, GameState},
    simulation::HandResult,
};

/// Two hole cards each plus the board has to fit in one deck.
pub const MAX_PLAYERS: usize = 23;

fn build_agents(num_agents: usize) -> Vec<Box<dyn Agent>> {
    (0..num_agents)
        .map(|_| -> Box<dyn Agent> { Box::<FoldingAgent>::default() })
        .collect()
}

/// # HoldemSimulationBuilder
///
/// `RngHoldemSimulationBuilder` is a builder to allow for complex
/// configurations of a holdem simulation played via agents. Stacks are
/// required, other fields are optional.
///
/// `HoldemSimulationBuilder` is a type alias
/// for `RngHoldemSimulationBuilder<ThreadRng>` which is the default builder.
///
/// ## Setters
///
/// Each setter will set the optional value to the passed in value. Then return
/// the mutated builder.
///
/// While agents are not required the default is a full ring of folding agents.
/// So likely not that interesting a simulation.
///
/// ## Examples
///
/// ```
/// use rs_holdem::arena::HoldemSimulationBuilder;
///
/// let sim = HoldemSimulationBuilder::default()
///     .stacks(vec![100; 5])
///     .button(3)
///     .build()
///     .unwrap();
/// ```
/// However sometimes you want to use a known but random simulation. In that
/// case you can pass in the rng like this:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_holdem::arena::{Blinds, RngHoldemSimulationBuilder};
///
/// let rng = StdRng::seed_from_u64(420);
/// let sim = RngHoldemSimulationBuilder::default()
///     .stacks(vec![100; 5])
///     .blinds(Blinds::new(1, 2))
///     .rng(rng)
///     .build()
///     .unwrap();
/// ```
pub struct RngHoldemSimulationBuilder<R: Rng> {
    agents: Option<Vec<Box<dyn Agent>>>,
    stacks: Option<Vec<u32>>,
    button: usize,
    blinds: Blinds,
    deck: Option<Deck>,
    rng: Option<R>,
}

impl<R: Rng> RngHoldemSimulationBuilder<R> {
    /// Set the agents for the simulation created by this builder.
    /// There has to be one per seat.
    pub fn agents(mut self, agents: Vec<Box<dyn Agent>>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Set the chips each seat starts the hand with. A seat with no chips
    /// sits out.
    pub fn stacks(mut self, stacks: Vec<u32>) -> Self {
        self.stacks = Some(stacks);
        self
    }

    /// Set the dealer seat. Defaults to seat 0.
    pub fn button(mut self, button: usize) -> Self {
        self.button = button;
        self
    }

    pub fn blinds(mut self, blinds: Blinds) -> Self {
        self.blinds = blinds;
        self
    }

    /// Set the deck. If not set a full deck will be shuffled with
    /// the rng. A deck given here is dealt in order without shuffling.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Given the fields already specified build any that are not specified and
    /// create a new HoldemSimulation.
    pub fn build(self) -> Result<HoldemSimulation, HoldemSimulationError> {
        let stacks = self.stacks.ok_or(HoldemSimulationError::NeedStacks)?;
        let num_players = stacks.len();

        if num_players > MAX_PLAYERS {
            return Err(HoldemSimulationError::TooManyPlayers(num_players));
        }
        if stacks.iter().filter(|s| **s > 0).count() < 2 {
            return Err(HoldemSimulationError::NotEnoughPlayers);
        }
        // The whole table can end up in one pot.
        stacks
            .iter()
            .try_fold(0u32, |total, s| total.checked_add(*s))
            .ok_or(HoldemSimulationError::ChipOverflow)?;
        if self.button >= num_players {
            return Err(HoldemSimulationError::InvalidButton(self.button));
        }

        let agents = self.agents.unwrap_or_else(|| build_agents(num_players));
        if agents.len() != num_players {
            return Err(HoldemSimulationError::AgentCountMismatch {
                expected: num_players,
                actual: agents.len(),
            });
        }

        // If the deck was passed in use that with no shuffling to allow for
        // this to be a deterministic simulation
        let deck = match (self.deck, self.rng) {
            (Some(deck), _) => deck,
            (None, Some(mut rng)) => Deck::shuffled(&mut rng),
            (None, None) => Deck::shuffled(&mut rand::rng()),
        };

        let game_state = GameState::new(stacks, self.blinds, self.button);
        Ok(HoldemSimulation::new_with_agents_and_deck(
            game_state, deck, agents,
        ))
    }
}

impl<R: Rng> Default for RngHoldemSimulationBuilder<R> {
    fn default() -> Self {
        Self {
            agents: None,
            stacks: None,
            button: 0,
            blinds: Blinds::default(),
            deck: None,
            rng: None,
        }
    }
}

/// The rng is ThreadRng.
pub type HoldemSimulationBuilder = RngHoldemSimulationBuilder<ThreadRng>;

/// Build and run a single hand.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_holdem::arena::agent::CallingAgent;
/// use rs_holdem::arena::{Agent, Blinds, play_hand};
///
/// let agents: Vec<Box<dyn Agent>> = vec![Box::new(CallingAgent), Box::new(CallingAgent)];
/// let result = play_hand(
///     vec![100, 100],
///     0,
///     Blinds::new(5, 10),
///     agents,
///     StdRng::seed_from_u64(420),
/// )
/// .unwrap();
/// assert_eq!(20, result.pot);
/// assert_eq!(200, result.final_stacks.iter().sum::<u32>());
/// ```
pub fn play_hand<R: Rng>(
    stacks: Vec<u32>,
    button: usize,
    blinds: Blinds,
    agents: Vec<Box<dyn Agent>>,
    rng: R,
) -> Result<HandResult, HoldemSimulationError> {
    let mut sim = RngHoldemSimulationBuilder::default()
        .stacks(stacks)
        .button(button)
        .blinds(blinds)
        .agents(agents)
        .rng(rng)
        .build()?;
    sim.run()
}
