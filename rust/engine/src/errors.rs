use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A draw was attempted with zero cards left. A single round never
    /// consumes a full deck, so reaching this means the deck was mismanaged.
    #[error("Deck exhausted: no cards remaining to draw")]
    EmptyDeck,
}
