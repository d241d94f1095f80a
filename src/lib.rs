//! No-limit Texas Hold'em for benchmarking poker agents.
//!
//! The crate is split into three parts:
//!
//! - `core` has cards, decks, hands and the 5 to 7 card hand evaluator.
//! - `holdem` has monte carlo equity estimation built on the evaluator.
//! - `arena` (default feature) has the betting engine that plays a single
//!   hand between agents and settles the pot.
//!
//! ```
//! use rs_holdem::core::{Card, HandCategory, evaluate};
//!
//! let hole = [Card::try_from("As").unwrap(), Card::try_from("Ks").unwrap()];
//! let board: Vec<Card> = ["Qs", "Js", "Ts"]
//!     .iter()
//!     .map(|c| Card::try_from(*c).unwrap())
//!     .collect();
//!
//! let strength = evaluate(&hole, &board).unwrap();
//! assert_eq!(HandCategory::StraightFlush, strength.category());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to betting.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;

/// The arena is where agents play hands against each other.
#[cfg(feature = "arena")]
pub mod arena;
