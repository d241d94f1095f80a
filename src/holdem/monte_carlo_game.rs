use rand::Rng;

use crate::core::{Card, CardBitSet, Deck, HandStrength, HoldemError, evaluate};

/// Monte carlo equity of one known hand against random opponents.
///
/// The unseen cards are kept as a set and every trial deals from a
/// freshly shuffled deck of them. Each trial completes the board, deals
/// two cards to every opponent and compares the hero to the best
/// opponent hand.
///
/// Equity is the mean of the per trial scores: 1.0 for beating the best
/// opponent, 0.5 for tying it and 0.0 otherwise.
#[derive(Debug, Clone)]
pub struct MonteCarloGame {
    hole: [Card; 2],
    /// Board with room for the cards that still need to come.
    board: [Card; 5],
    /// How many of the board cards are known.
    known_board: usize,
    num_opponents: usize,
    /// Every card not in the hole or on the known board.
    unseen: CardBitSet,
}

impl MonteCarloGame {
    pub fn new(
        hole: [Card; 2],
        board: &[Card],
        num_opponents: usize,
    ) -> Result<Self, HoldemError> {
        if board.len() > 5 {
            return Err(HoldemError::HoldemHandSize);
        }

        let mut known = CardBitSet::new();
        for c in hole.iter().chain(board) {
            if !known.insert(*c) {
                return Err(HoldemError::DuplicateCardInHand(*c));
            }
        }

        let unseen = !known;
        let needed = num_opponents * 2 + (5 - board.len());
        if unseen.count() < needed {
            return Err(HoldemError::InsufficientDeck {
                needed,
                remaining: unseen.count(),
            });
        }

        let mut full_board = [hole[0]; 5];
        full_board[..board.len()].copy_from_slice(board);

        Ok(Self {
            hole,
            board: full_board,
            known_board: board.len(),
            num_opponents,
            unseen,
        })
    }

    /// Run one trial and return the hero's score for it.
    pub fn simulate<R: Rng>(&mut self, rng: &mut R) -> Result<f64, HoldemError> {
        let mut deck: Deck = self.unseen.into();
        deck.shuffle(rng);

        let missing = 5 - self.known_board;
        let dealt = deck.draw_slice(missing)?;
        self.board[self.known_board..].copy_from_slice(dealt);

        let hero = evaluate(&self.hole, &self.board)?;

        let mut best: Option<HandStrength> = None;
        for _ in 0..self.num_opponents {
            let cards = deck.draw_slice(2)?;
            let opponent = evaluate(&[cards[0], cards[1]], &self.board)?;
            best = best.max(Some(opponent));
        }

        Ok(match best {
            None => 1.0,
            Some(b) if hero > b => 1.0,
            Some(b) if hero == b => 0.5,
            Some(_) => 0.0,
        })
    }

    /// Average the score of `samples` independent trials.
    pub fn estimate_equity<R: Rng>(
        &mut self,
        samples: usize,
        rng: &mut R,
    ) -> Result<f64, HoldemError> {
        if self.num_opponents == 0 {
            return Ok(1.0);
        }
        if samples == 0 {
            return Err(HoldemError::NoSamples);
        }

        let mut total = 0.0;
        for _ in 0..samples {
            total += self.simulate(rng)?;
        }
        Ok(total / samples as f64)
    }
}

/// Estimate the probability that `hole` wins against `num_opponents` random
/// hands given the board so far.
///
/// ```
/// use rs_holdem::core::Card;
/// use rs_holdem::holdem::estimate_equity;
///
/// let hole = [Card::try_from("As").unwrap(), Card::try_from("Ah").unwrap()];
/// let equity = estimate_equity(hole, &[], 1, 1_000).unwrap();
/// assert!(equity > 0.5);
/// ```
pub fn estimate_equity(
    hole: [Card; 2],
    board: &[Card],
    num_opponents: usize,
    samples: usize,
) -> Result<f64, HoldemError> {
    let mut rng = rand::rng();
    estimate_equity_with_rng(hole, board, num_opponents, samples, &mut rng)
}

/// Same as `estimate_equity` with a caller supplied rng.
pub fn estimate_equity_with_rng<R: Rng>(
    hole: [Card; 2],
    board: &[Card],
    num_opponents: usize,
    samples: usize,
    rng: &mut R,
) -> Result<f64, HoldemError> {
    MonteCarloGame::new(hole, board, num_opponents)?.estimate_equity(samples, rng)
}
