use crate::core::{Card, Deck};

use super::game_state::GameState;
use super::simulation::HandResult;

pub fn assert_valid_game_state(game_state: &GameState) {
    // No chips get created or lost.
    let total_start: u32 = game_state.starting_stacks.iter().sum();
    let total_now: u32 = game_state.seats.iter().map(|s| s.stack).sum::<u32>() + game_state.pot;
    let total_committed: u32 = game_state.seats.iter().map(|s| s.total_committed).sum();
    assert_eq!(total_start, total_now);
    assert!(total_committed >= game_state.pot);

    // Once the pot is awarded winners have chips again.
    let settled = game_state.pot == 0 && total_committed > 0;

    for (seat, start) in game_state.seats.iter().zip(game_state.starting_stacks.iter()) {
        assert!(seat.total_committed <= *start);
        assert!(seat.commitment <= seat.total_committed);
        // Only an all in can be short of the bet and still be live.
        if !settled && seat.can_act() && seat.has_acted {
            assert_eq!(game_state.current_bet, seat.commitment);
        }
    }
}

pub fn assert_valid_hand_result(result: &HandResult) {
    assert_eq!(result.pot, result.pot_distribution.iter().sum::<u32>());
    assert_eq!(
        result.starting_stacks.iter().sum::<u32>(),
        result.final_stacks.iter().sum::<u32>()
    );
    let net: i64 = (0..result.final_stacks.len()).map(|idx| result.net(idx)).sum();
    assert_eq!(0, net);

    // Only seats that showed down or won uncontested get chips.
    for (idx, won) in result.pot_distribution.iter().enumerate() {
        if *won > 0 {
            assert!(result.hole_cards[idx].is_some());
        }
    }
    if result.final_hands.iter().any(Option::is_some) {
        assert_eq!(5, result.final_board.len());
    }
}

/// A deck that deals the given cards in order.
pub fn stacked_deck(cards: &str) -> Deck {
    let cards: Vec<Card> = cards
        .split_whitespace()
        .map(|c| Card::try_from(c).unwrap())
        .collect();
    cards.into()
}
