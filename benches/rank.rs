use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use rs_holdem::core::{Card, Deck, Rankable, evaluate, rank_five};

fn rank_one(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::shuffled(&mut rng);
    let cards: Vec<Card> = deck.draw(5).unwrap();
    let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("Rank one 5 card hand", move |b| {
        b.iter(|| rank_five(&five))
    });
}

fn rank_best_seven(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::shuffled(&mut rng);
    let cards: Vec<Card> = deck.draw(7).unwrap();
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| cards.rank())
    });
}

fn evaluate_river(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("Evaluate hole cards on a random river", move |b| {
        b.iter(|| {
            let mut deck = Deck::shuffled(&mut rng);
            let hole = [deck.deal().unwrap(), deck.deal().unwrap()];
            let board = deck.draw_slice(5).unwrap();
            evaluate(&hole, board)
        })
    });
}

criterion_group!(benches, rank_one, rank_best_seven, evaluate_river);
criterion_main!(benches);
