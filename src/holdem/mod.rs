/// Monte carlo equity estimation against random opponent hands.
mod monte_carlo_game;
/// Export `MonteCarloGame` and the one shot helpers.
pub use self::monte_carlo_game::{MonteCarloGame, estimate_equity, estimate_equity_with_rng};
