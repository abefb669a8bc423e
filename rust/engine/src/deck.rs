use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A single 52-card deck used for one round.
///
/// Cards are kept as a stack: [`Deck::draw`] removes and returns the last
/// element. Shuffling happens once, at construction.
///
/// # Examples
///
/// ```
/// use blackjack_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 52 cards and shuffles them with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        // SliceRandom::shuffle is Fisher–Yates, swapping from the last index down
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Deck whose draw order is exactly `top_first`. Used to replay or
    /// force a specific deal; no uniqueness check is made.
    pub fn stacked(top_first: Vec<Card>) -> Self {
        let mut cards = top_first;
        cards.reverse();
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn stacked_deck_draws_in_given_order() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let b = Card::new(Rank::Two, Suit::Hearts);
        let mut deck = Deck::stacked(vec![a, b]);
        assert_eq!(deck.draw(), Ok(a));
        assert_eq!(deck.draw(), Ok(b));
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn draw_reduces_remaining() {
        let mut deck = Deck::new_with_seed(3);
        assert_eq!(deck.remaining(), 52);
        deck.draw().unwrap();
        assert_eq!(deck.remaining(), 51);
        assert!(!deck.is_empty());
    }

    #[test]
    fn shuffled_matches_slice_shuffle_with_same_rng_state() {
        let mut expected = full_deck();
        expected.shuffle(&mut ChaCha20Rng::seed_from_u64(2718));

        let mut deck = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(2718));
        let mut drawn = Vec::new();
        while let Ok(card) = deck.draw() {
            drawn.push(card);
        }
        drawn.reverse();
        assert_eq!(drawn, expected);
    }
}
