use crate::core::{HandStrength, HoldemError, evaluate};

use super::game_state::GameState;

/// How the pot was settled, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Chips awarded to each seat. Sums to the pot.
    pub winnings: Vec<u32>,
    /// Hand strength for every seat that went to showdown.
    pub strengths: Vec<Option<HandStrength>>,
    /// Seats that won some part of the pot.
    pub winners: Vec<usize>,
}

/// Split `pot` between the contenders holding the strongest hand.
///
/// Each winner gets `pot / winners`. The odd chips go one at a time to
/// winners clockwise starting from the seat left of the button.
pub fn split_pot(
    pot: u32,
    contenders: &[(usize, HandStrength)],
    button_idx: usize,
    num_players: usize,
) -> Vec<u32> {
    let mut winnings = vec![0; num_players];
    let best = match contenders.iter().map(|(_, s)| *s).max() {
        Some(best) => best,
        None => return winnings,
    };

    let mut winners: Vec<usize> = contenders
        .iter()
        .filter(|(_, s)| *s == best)
        .map(|(idx, _)| *idx)
        .collect();
    // Order by distance clockwise from the seat after the button.
    winners.sort_by_key(|idx| (idx + num_players - (button_idx + 1) % num_players) % num_players);

    let share = pot / winners.len() as u32;
    let mut remainder = pot % winners.len() as u32;
    for idx in winners {
        winnings[idx] = share;
        if remainder > 0 {
            winnings[idx] += 1;
            remainder -= 1;
        }
    }
    winnings
}

/// Settle the pot of a finished hand.
///
/// A lone survivor takes everything without showing. Otherwise every seat
/// still holding cards is evaluated against the board.
pub fn resolve(game_state: &GameState) -> Result<ShowdownResult, HoldemError> {
    let num_players = game_state.num_players();
    let mut strengths = vec![None; num_players];
    let live: Vec<usize> = (0..num_players)
        .filter(|idx| !game_state.seats[*idx].folded)
        .collect();

    if let [only] = live.as_slice() {
        let mut winnings = vec![0; num_players];
        winnings[*only] = game_state.pot;
        return Ok(ShowdownResult {
            winnings,
            strengths,
            winners: vec![*only],
        });
    }

    let mut contenders = Vec::with_capacity(live.len());
    for idx in live {
        let hole = game_state.hands[idx].ok_or(HoldemError::InsufficientCards(0))?;
        let strength = evaluate(&hole, &game_state.board)?;
        strengths[idx] = Some(strength);
        contenders.push((idx, strength));
    }

    let winnings = split_pot(
        game_state.pot,
        &contenders,
        game_state.button_idx,
        num_players,
    );
    // Every seat tied for the best hand is a winner, chips or not.
    let best = contenders.iter().map(|(_, strength)| *strength).max();
    let winners = contenders
        .iter()
        .filter(|(_, strength)| Some(*strength) == best)
        .map(|(idx, _)| *idx)
        .collect();
    Ok(ShowdownResult {
        winnings,
        strengths,
        winners,
    })
}
