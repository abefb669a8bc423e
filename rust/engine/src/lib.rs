//! # blackjack-engine: Blackjack Rules Core
//!
//! A deterministic single-player Blackjack engine: one player hand against
//! an automated dealer, one fresh 52-card deck per round, hit and stand only.
//! The engine owns all round state and hands out read-only snapshots for a
//! presentation layer to render.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Fisher–Yates shuffled deck with an injectable RNG
//! - [`hand`] - Card values and hand totals with soft-ace reduction
//! - [`rules`] - Dealer stand rule and outcome decision
//! - [`game`] - Round state machine and snapshots
//! - [`engine`] - Seeded session driver around a round
//! - [`player`] - Player actions (hit, stand)
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::hand_total;
//!
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Clubs),
//! ];
//! assert_eq!(hand_total(&hand), 21);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//!
//! let mut engine = Engine::new(Some(7));
//! let mut snap = engine.start_round().unwrap();
//! while !snap.finished && snap.player_total < 17 {
//!     snap = engine.player_hit().unwrap();
//! }
//! if !snap.finished {
//!     snap = engine.player_stand().unwrap();
//! }
//! println!("outcome: {:?}, wins: {}", snap.result, snap.wins);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
