use std::fmt;

use tracing::event;

use crate::core::Card;

use super::action::{
    ActionKind, ActionSet, AgentAction, ForcedBetPayload, ForcedBetType, PlayedActionPayload,
};
use super::agent::PlayerView;
use super::errors::GameStateError;

/// The betting rounds of a hand. They only ever move forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Round {
    pub fn next(&self) -> Option<Self> {
        match *self {
            Round::Preflop => Some(Round::Flop),
            Round::Flop => Some(Round::Turn),
            Round::Turn => Some(Round::River),
            Round::River => None,
        }
    }

    /// How many community cards get dealt when this round starts.
    pub fn community_cards(&self) -> usize {
        match *self {
            Round::Preflop => 0,
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blinds {
    pub small_blind: u32,
    pub big_blind: u32,
}

impl Blinds {
    pub fn new(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

/// Everything the engine tracks about one seat during a hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Chips behind.
    pub stack: u32,
    /// Chips put in during the current round.
    pub commitment: u32,
    /// Chips put in during the whole hand.
    pub total_committed: u32,
    pub folded: bool,
    /// Has acted since the round started or since the last raise.
    pub has_acted: bool,
}

impl Seat {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            commitment: 0,
            total_committed: 0,
            // Seats without chips sit the hand out.
            folded: stack == 0,
            has_acted: false,
        }
    }

    pub fn is_all_in(&self) -> bool {
        !self.folded && self.stack == 0 && self.total_committed > 0
    }

    /// Still has cards and chips, so can be asked to act.
    pub fn can_act(&self) -> bool {
        !self.folded && self.stack > 0
    }

    fn put_in(&mut self, amount: u32) -> u32 {
        let amount = amount.min(self.stack);
        self.stack -= amount;
        self.commitment += amount;
        self.total_committed += amount;
        amount
    }
}

/// Where the betting engine is at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BettingState {
    /// Waiting on the seat at this index.
    AwaitingAction(usize),
    /// Everyone has matched the bet or is all in.
    StreetComplete,
    /// Everyone else folded.
    HandOverSingleSurvivor(usize),
}

/// The full state of one hand.
///
/// This owns the pot, stacks and the round's betting. Only the methods
/// here change them.
#[derive(Clone)]
pub struct GameState {
    pub seats: Vec<Seat>,
    /// Stacks at the start of the hand, before blinds.
    pub starting_stacks: Vec<u32>,
    /// The hole cards for each player. `None` for seats sitting out.
    pub hands: Vec<Option<[Card; 2]>>,
    /// The community cards.
    pub board: Vec<Card>,
    /// The single pot for the hand.
    pub pot: u32,
    /// The commitment every seat has to match this round.
    pub current_bet: u32,
    pub blinds: Blinds,
    /// The index of the player who's the dealer
    pub button_idx: usize,
    pub round: Round,
    to_act_idx: usize,
}

impl GameState {
    pub fn new(stacks: Vec<u32>, blinds: Blinds, button_idx: usize) -> Self {
        let num_players = stacks.len();
        Self {
            seats: stacks.iter().map(|s| Seat::new(*s)).collect(),
            starting_stacks: stacks,
            hands: vec![None; num_players],
            board: vec![],
            pot: 0,
            current_bet: 0,
            blinds,
            button_idx,
            round: Round::Preflop,
            to_act_idx: button_idx,
        }
    }

    pub fn num_players(&self) -> usize {
        self.seats.len()
    }

    /// Seats that haven't folded, including any that are all in.
    pub fn num_active_players(&self) -> usize {
        self.seats.iter().filter(|s| !s.folded).count()
    }

    pub fn num_all_in_players(&self) -> usize {
        self.seats.iter().filter(|s| s.is_all_in()).count()
    }

    /// Seats that can still put chips in.
    pub fn num_players_can_act(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }

    /// Seat indices clockwise starting at `start`.
    fn clockwise_from(&self, start: usize) -> impl Iterator<Item = usize> + use<> {
        let n = self.num_players();
        (0..n).map(move |offset| (start + offset) % n)
    }

    fn next_seat(&self, after: usize, pred: impl Fn(&Seat) -> bool) -> Option<usize> {
        self.clockwise_from(after + 1)
            .find(|idx| pred(&self.seats[*idx]))
    }

    fn needs_action(&self, seat: &Seat) -> bool {
        seat.can_act() && (!seat.has_acted || seat.commitment < self.current_bet)
    }

    fn set_next_to_act(&mut self, after: usize) {
        if let Some(idx) = self.next_seat(after, |s| self.needs_action(s)) {
            self.to_act_idx = idx;
        }
    }

    pub fn to_act_idx(&self) -> usize {
        self.to_act_idx
    }

    /// Post the small blind at the button and the big blind one seat
    /// clockwise from it, then set up the first pre-flop actor.
    ///
    /// Heads up this means the button posts the small blind and acts first.
    pub fn post_blinds(&mut self) -> Vec<ForcedBetPayload> {
        let mut posted = vec![];
        let live = |s: &Seat| !s.folded;
        let sb_idx = match self.clockwise_from(self.button_idx).find(|i| live(&self.seats[*i])) {
            Some(idx) => idx,
            None => return posted,
        };
        let bb_idx = self.next_seat(sb_idx, live).unwrap_or(sb_idx);

        for (idx, amount, forced_bet_type) in [
            (sb_idx, self.blinds.small_blind, ForcedBetType::SmallBlind),
            (bb_idx, self.blinds.big_blind, ForcedBetType::BigBlind),
        ] {
            let bet = self.seats[idx].put_in(amount);
            self.pot += bet;
            self.current_bet = self.current_bet.max(self.seats[idx].commitment);
            posted.push(ForcedBetPayload {
                idx,
                bet,
                forced_bet_type,
            });
        }

        self.to_act_idx = bb_idx;
        self.set_next_to_act(bb_idx);
        posted
    }

    /// The legal actions for a seat given what it has in front of it and
    /// behind it.
    pub fn valid_actions(&self, idx: usize) -> ActionSet {
        let mut set = ActionSet::new();
        let seat = match self.seats.get(idx) {
            Some(seat) if !seat.folded => seat,
            _ => return set,
        };
        let to_call = self.current_bet.saturating_sub(seat.commitment);

        set.insert(ActionKind::Fold);
        if seat.commitment == self.current_bet {
            set.insert(ActionKind::Check);
        }
        if self.current_bet > seat.commitment && seat.stack > 0 {
            set.insert(ActionKind::Call);
        }
        if self.current_bet == 0 && seat.stack > 0 {
            set.insert(ActionKind::Bet);
        }
        if self.current_bet > 0 && seat.stack > to_call {
            set.insert(ActionKind::Raise);
        }
        set
    }

    /// How much more the seat needs to put in to call.
    pub fn amount_to_call(&self, idx: usize) -> u32 {
        self.current_bet.saturating_sub(self.seats[idx].commitment)
    }

    pub fn current_player_stack(&self) -> u32 {
        self.seats[self.to_act_idx].stack
    }

    /// Where the round is at right now.
    pub fn state(&self) -> BettingState {
        let mut live = self.seats.iter().enumerate().filter(|(_, s)| !s.folded);
        if let (Some((idx, _)), None) = (live.next(), live.next()) {
            return BettingState::HandOverSingleSurvivor(idx);
        }

        if self.is_round_complete() {
            BettingState::StreetComplete
        } else {
            BettingState::AwaitingAction(self.to_act_idx)
        }
    }

    fn is_round_complete(&self) -> bool {
        let mut can_act = self.seats.iter().filter(|s| s.can_act());
        match (can_act.next(), can_act.next()) {
            // Everyone is all in or folded.
            (None, _) => true,
            // Nobody left to bet against.
            (Some(only), None) if only.commitment >= self.current_bet => true,
            _ => self.seats.iter().all(|s| !self.needs_action(s)),
        }
    }

    /// Apply the action of the seat that is next to act.
    ///
    /// Anything that isn't legal for the seat right now is played as a
    /// fold. Wagers bigger than the stack are capped to an all in.
    pub fn apply_action(&mut self, action: AgentAction) -> PlayedActionPayload {
        let idx = self.to_act_idx;
        let valid = self.valid_actions(idx);
        let malformed = matches!(action, AgentAction::Bet(0) | AgentAction::Raise(0));

        let applied = if valid.contains(action.kind()) && !malformed {
            action
        } else {
            event!(
                tracing::Level::WARN,
                idx,
                ?action,
                ?valid,
                "Illegal action played as a fold"
            );
            AgentAction::Fold
        };

        let to_call = self.amount_to_call(idx);
        let put_in = match applied {
            AgentAction::Fold => {
                self.seats[idx].folded = true;
                0
            }
            AgentAction::Check => 0,
            AgentAction::Call => self.seats[idx].put_in(to_call),
            AgentAction::Bet(amount) | AgentAction::Raise(amount) => {
                let put_in = self.seats[idx].put_in(to_call.saturating_add(amount));
                let commitment = self.seats[idx].commitment;
                if commitment > self.current_bet {
                    self.current_bet = commitment;
                    // Betting is re-opened for everyone else.
                    for (other, seat) in self.seats.iter_mut().enumerate() {
                        if other != idx && seat.can_act() {
                            seat.has_acted = false;
                        }
                    }
                }
                put_in
            }
        };
        self.pot += put_in;
        self.seats[idx].has_acted = true;

        let seat = self.seats[idx];
        let payload = PlayedActionPayload {
            idx,
            action,
            applied,
            put_in,
            commitment: seat.commitment,
            all_in: seat.is_all_in(),
            pot: self.pot,
        };
        event!(tracing::Level::DEBUG, ?payload, "Played action");

        self.set_next_to_act(idx);
        payload
    }

    /// Move on to the next round. Commitments and the bet to match reset
    /// but the pot carries over.
    pub fn advance_round(&mut self) -> Result<Round, GameStateError> {
        let next = self.round.next().ok_or(GameStateError::CantAdvanceRound)?;
        self.round = next;
        self.current_bet = 0;
        for seat in self.seats.iter_mut() {
            seat.commitment = 0;
            seat.has_acted = false;
        }
        self.to_act_idx = self.button_idx;
        self.set_next_to_act(self.button_idx);
        event!(tracing::Level::DEBUG, round = ?next, pot = self.pot, "Advanced round");
        Ok(next)
    }

    /// Take everything out of the pot so that it can be awarded.
    pub fn take_pot(&mut self) -> u32 {
        std::mem::take(&mut self.pot)
    }

    pub fn award(&mut self, idx: usize, amount: u32) {
        self.seats[idx].stack += amount;
    }

    /// What the seat at `idx` gets to see when it's asked to act.
    pub fn player_view(&self, idx: usize) -> PlayerView<'_> {
        PlayerView {
            idx,
            hole_cards: self.hands[idx],
            board: &self.board,
            round: self.round,
            pot: self.pot,
            current_bet: self.current_bet,
            amount_to_call: self.amount_to_call(idx),
            stack: self.seats[idx].stack,
            commitment: self.seats[idx].commitment,
            num_players: self.num_players(),
            num_active_players: self.num_active_players(),
            button_idx: self.button_idx,
            blinds: self.blinds,
            seats: &self.seats,
            valid_actions: self.valid_actions(idx),
        }
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("num_players", &self.num_players())
            .field("num_active_players", &self.num_active_players())
            .field("seats", &self.seats)
            .field("pot", &self.pot)
            .field("current_bet", &self.current_bet)
            .field("blinds", &self.blinds)
            .field("hands", &self.hands)
            .field("button_idx", &self.button_idx)
            .field("round", &self.round)
            .field("to_act_idx", &self.to_act_idx)
            .field("board", &self.board)
            .finish()
    }
}
