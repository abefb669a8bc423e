use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never affect scoring; they only distinguish the 52 unique cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Represents the rank of a playing card from Ace through King.
/// Discriminants follow the conventional pip order (Ace = 1, King = 13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, scored as 11 or 1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Short label as printed on the card face ("A", "2".."10", "J", "Q", "K").
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: once dealt they never change.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card (Spades, Hearts, Diamonds or Clubs)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Canonical unshuffled order: suits outer, ranks inner.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_face_label_and_suit_symbol() {
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Q♣");
    }

    #[test]
    fn rank_discriminants_run_ace_to_king() {
        let values: Vec<u8> = all_ranks().iter().map(|&r| r as u8).collect();
        assert_eq!(values, (1..=13).collect::<Vec<u8>>());
    }
}
