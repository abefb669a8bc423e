use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Point value of a rank before any soft-ace reduction.
pub fn card_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        r => r as u32,
    }
}

/// Best total for a set of cards.
///
/// Every Ace starts at 11; while the total exceeds 21 and an Ace is still
/// counted high, one Ace drops to 1.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::hand_total;
///
/// let aces = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Diamonds),
///     Card::new(Rank::Ace, Suit::Clubs),
/// ];
/// assert_eq!(hand_total(&aces), 14);
/// ```
pub fn hand_total(cards: &[Card]) -> u32 {
    score(cards).0
}

/// True when at least one Ace is still counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    score(cards).1 > 0
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > BLACKJACK
}

/// Two cards totaling 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_total(cards) == BLACKJACK
}

// (total, aces still counted as 11)
fn score(cards: &[Card]) -> (u32, u32) {
    let mut total = 0;
    let mut high_aces = 0;
    for c in cards {
        total += card_value(c.rank);
        if c.rank == Rank::Ace {
            high_aces += 1;
        }
    }
    while total > BLACKJACK && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    (total, high_aces)
}

/// Ordered cards held by the player or the dealer.
/// Totals are always recomputed from the cards, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }
}
