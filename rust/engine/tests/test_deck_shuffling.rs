use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sevenpoker_engine::cards::Card;
use sevenpoker_engine::deck::Deck;

#[test]
fn new_deck_has_52_unique_cards() {
    let mut deck = Deck::new();
    let cards = deck.draw(52);
    assert_eq!(cards.len(), 52);
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52, "deck must not contain duplicates");
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::shuffled_with_seed(12345);
    let mut d2 = Deck::shuffled_with_seed(12345);
    assert_eq!(d1.draw(10), d2.draw(10), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::shuffled_with_seed(1);
    let mut d2 = Deck::shuffled_with_seed(2);
    assert_ne!(
        d1.draw(10),
        d2.draw(10),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_keeps_every_card() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn draw_takes_from_the_end() {
    let mut deck = Deck::new();
    let top = *deck.cards().last().unwrap();
    let drawn = deck.draw(1);
    assert_eq!(drawn, vec![top]);
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn draw_beyond_availability_returns_fewer() {
    let mut deck = Deck::new();
    deck.draw(50);
    let rest = deck.draw(7);
    assert_eq!(rest.len(), 2);
    assert!(deck.draw(3).is_empty());
}

#[test]
fn dealing_fourteen_cards_leaves_38() {
    let mut deck = Deck::shuffled_with_seed(777);
    let p1 = deck.draw(7);
    let p2 = deck.draw(7);
    let mut set = HashSet::new();
    for c in p1.iter().chain(p2.iter()) {
        assert!(set.insert(*c));
    }
    assert_eq!(deck.remaining(), 38);
}
