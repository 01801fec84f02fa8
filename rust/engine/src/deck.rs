use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Ordered pile of cards; the top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards in canonical order. Call [`Deck::shuffle`] before dealing.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle(&mut rng);
        deck
    }

    /// Uniform Fisher-Yates permutation driven by the supplied RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes up to `n` cards from the top. Returns fewer when the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut out = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(c) = self.cards.pop() {
                out.push(c);
            }
        }
        out
    }

    pub(crate) fn retain<F: FnMut(&Card) -> bool>(&mut self, keep: F) {
        self.cards.retain(keep);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
