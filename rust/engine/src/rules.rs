use serde::{Deserialize, Serialize};

use crate::hand::BLACKJACK;

/// The dealer keeps drawing while below this total, soft totals included.
pub const DEALER_STAND_TOTAL: u32 = 17;

/// Final outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Push => "push",
        }
    }
}

/// Why a round settled the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultReason {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Both hands stood and totals were compared.
    Comparison,
}

impl ResultReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultReason::PlayerBust => "player_bust",
            ResultReason::DealerBust => "dealer_bust",
            ResultReason::Comparison => "comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub reason: ResultReason,
}

pub fn dealer_should_draw(dealer_total: u32) -> bool {
    dealer_total < DEALER_STAND_TOTAL
}

/// Decides a round after the dealer has finished drawing.
///
/// A dealer bust is checked first; otherwise the higher total wins and equal
/// totals push. Player busts never reach this point because they settle
/// before the dealer plays.
///
/// # Examples
///
/// ```
/// use blackjack_engine::rules::{decide_outcome, Outcome, ResultReason};
///
/// let r = decide_outcome(19, 22);
/// assert_eq!(r.outcome, Outcome::Win);
/// assert_eq!(r.reason, ResultReason::DealerBust);
///
/// assert_eq!(decide_outcome(18, 18).outcome, Outcome::Push);
/// assert_eq!(decide_outcome(17, 20).outcome, Outcome::Lose);
/// ```
pub fn decide_outcome(player_total: u32, dealer_total: u32) -> RoundResult {
    if dealer_total > BLACKJACK {
        return RoundResult {
            outcome: Outcome::Win,
            reason: ResultReason::DealerBust,
        };
    }
    let outcome = match player_total.cmp(&dealer_total) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Lose,
        std::cmp::Ordering::Equal => Outcome::Push,
    };
    RoundResult {
        outcome,
        reason: ResultReason::Comparison,
    }
}

pub fn player_bust() -> RoundResult {
    RoundResult {
        outcome: Outcome::Lose,
        reason: ResultReason::PlayerBust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_draws_only_below_seventeen() {
        assert!(dealer_should_draw(16));
        assert!(dealer_should_draw(2));
        assert!(!dealer_should_draw(17));
        assert!(!dealer_should_draw(21));
    }

    #[test]
    fn dealer_bust_beats_comparison_even_with_lower_player_total() {
        let r = decide_outcome(12, 23);
        assert_eq!(r.outcome, Outcome::Win);
        assert_eq!(r.reason, ResultReason::DealerBust);
    }

    #[test]
    fn outcome_serializes_lowercase() {
        let s = serde_json::to_string(&Outcome::Push).unwrap();
        assert_eq!(s, "\"push\"");
        let s = serde_json::to_string(&ResultReason::DealerBust).unwrap();
        assert_eq!(s, "\"dealer_bust\"");
    }
}
