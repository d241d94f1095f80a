use thiserror::Error;

use crate::core::HoldemError;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GameStateError {
    #[error("Can't advance after the river")]
    CantAdvanceRound,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum HoldemSimulationError {
    #[error("Builder needs player stacks")]
    NeedStacks,
    #[error("At least two players with chips are needed to play a hand")]
    NotEnoughPlayers,
    #[error("{0} players is more than a single deck can deal")]
    TooManyPlayers(usize),
    #[error("Expected {expected} agents, got {actual}")]
    AgentCountMismatch { expected: usize, actual: usize },
    #[error("Button index {0} is not a seat at the table")]
    InvalidButton(usize),
    #[error("Total chips at the table overflow a u32")]
    ChipOverflow,
    #[error("Game state error: {0}")]
    GameState(#[from] GameStateError),
    #[error("Hand aborted: {0}")]
    Holdem(#[from] HoldemError),
}
