use serde::{Deserialize, Serialize};

/// A decision the player can make during their turn.
/// Only hit and stand exist; there is no betting, split or double-down.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Take one more card
    Hit,
    /// Keep the current hand and pass the turn to the dealer
    Stand,
}

impl PlayerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::Hit => "hit",
            PlayerAction::Stand => "stand",
        }
    }
}
