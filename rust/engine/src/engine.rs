use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{RoundState, Snapshot};
use crate::player::PlayerAction;

/// Session driver: owns the random source and one [`RoundState`].
/// Each command runs to completion and returns the resulting [`Snapshot`].
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
///
/// let mut engine = Engine::new(Some(12345));
/// let snap = engine.start_round().expect("fresh deck never runs out");
/// assert_eq!(snap.player.len(), 2);
/// assert_eq!(snap.dealer.len(), 2);
///
/// // Standing always finishes the round
/// let snap = engine.player_stand().unwrap();
/// assert!(snap.finished);
/// assert!(snap.result.is_some());
/// ```
#[derive(Debug)]
pub struct Engine<R = ChaCha20Rng> {
    /// Random source used to shuffle every new deck
    rng: R,
    /// Seed the random source was built from, when known
    seed: Option<u64>,
    /// Current round and session win count
    state: RoundState,
}

impl Engine<ChaCha20Rng> {
    /// Seeded engine; `None` picks a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed: Some(seed),
            state: RoundState::new(),
        }
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            seed: None,
            state: RoundState::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn start_round(&mut self) -> Result<Snapshot, GameError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<Snapshot, GameError> {
        self.state.start_round(deck)?;
        Ok(self.state.snapshot())
    }

    pub fn player_hit(&mut self) -> Result<Snapshot, GameError> {
        self.state.player_hit()?;
        Ok(self.state.snapshot())
    }

    pub fn player_stand(&mut self) -> Result<Snapshot, GameError> {
        self.state.player_stand()?;
        Ok(self.state.snapshot())
    }

    pub fn apply(&mut self, action: PlayerAction) -> Result<Snapshot, GameError> {
        self.state.apply(action)?;
        Ok(self.state.snapshot())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn wins(&self) -> u32 {
        self.state.wins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_same_rounds() {
        let mut a = Engine::new(Some(99));
        let mut b = Engine::new(Some(99));
        for _ in 0..5 {
            assert_eq!(a.start_round().unwrap(), b.start_round().unwrap());
            assert_eq!(a.player_stand().unwrap(), b.player_stand().unwrap());
        }
        assert_eq!(a.seed(), Some(99));
    }

    #[test]
    fn with_rng_accepts_any_generator() {
        let rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        let mut eng = Engine::with_rng(rng);
        assert_eq!(eng.seed(), None);
        let snap = eng.start_round().unwrap();
        assert_eq!(snap.player.len(), 2);
        assert_eq!(
            eng.state().deck_remaining(),
            52 - snap.player.len() - snap.dealer.len()
        );
    }
}
