use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{hand_total, Hand, BLACKJACK};
use crate::player::PlayerAction;
use crate::rules::{decide_outcome, dealer_should_draw, player_bust, Outcome, RoundResult};

/// Where a round currently stands.
///
/// `Dealing` and `DealerTurn` are transient: every public operation runs to
/// completion and leaves the round in `PlayerTurn` or `Settled`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round has been dealt yet
    Idle,
    /// Initial four cards are being dealt
    Dealing,
    /// Waiting for the player to hit or stand
    PlayerTurn,
    /// Dealer is revealing and drawing
    DealerTurn,
    /// Outcome decided; only a new round is accepted
    Settled,
}

/// A card as the presentation layer may see it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "face", content = "card", rename_all = "snake_case")]
pub enum CardView {
    Up(Card),
    Down,
}

/// Read-only picture of a round after a transition.
///
/// The dealer's hole card appears as [`CardView::Down`] while concealed and
/// `dealer_visible_total` only counts face-up cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Vec<Card>,
    pub dealer: Vec<CardView>,
    pub player_total: u32,
    pub dealer_visible_total: u32,
    pub phase: Phase,
    pub finished: bool,
    pub result: Option<RoundResult>,
    pub wins: u32,
}

/// State of the current round plus the session win counter.
///
/// The dealer hand always holds real cards; concealment of the first card
/// is the separate `hole_hidden` flag. Everything except `wins` is replaced
/// by [`RoundState::start_round`].
#[derive(Debug, Clone)]
pub struct RoundState {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    /// Dealer's first card is face down; once cleared, stays cleared
    hole_hidden: bool,
    phase: Phase,
    result: Option<RoundResult>,
    /// Player decisions made this round, in order
    actions: Vec<PlayerAction>,
    /// Wins across all rounds of this session
    wins: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            deck: Deck::default(),
            player: Hand::new(),
            dealer: Hand::new(),
            hole_hidden: false,
            phase: Phase::Idle,
            result: None,
            actions: Vec::new(),
            wins: 0,
        }
    }

    /// Deals a fresh round from `deck`: player, dealer (face down), player,
    /// dealer. A player dealt 21 stands automatically and the round settles
    /// before this returns.
    pub fn start_round(&mut self, deck: Deck) -> Result<(), GameError> {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.hole_hidden = false;
        self.result = None;
        self.actions.clear();
        self.phase = Phase::Dealing;

        self.player.push(self.deck.draw()?);
        self.dealer.push(self.deck.draw()?);
        self.hole_hidden = true;
        self.player.push(self.deck.draw()?);
        self.dealer.push(self.deck.draw()?);
        self.phase = Phase::PlayerTurn;

        debug!(
            player_total = self.player.total(),
            dealer_upcard = %self.dealer.cards()[1],
            "round dealt"
        );

        if self.player.total() == BLACKJACK {
            debug!("player dealt 21, standing automatically");
            self.dealer_turn()?;
        }
        Ok(())
    }

    /// Draws one card for the player. A bust settles the round as a loss
    /// without a dealer turn. Ignored outside the player's turn.
    pub fn player_hit(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::PlayerTurn {
            debug!(phase = ?self.phase, "hit ignored outside player turn");
            return Ok(());
        }
        let card = self.deck.draw()?;
        self.player.push(card);
        self.actions.push(PlayerAction::Hit);
        debug!(%card, player_total = self.player.total(), "player hit");

        if self.player.is_bust() {
            self.settle(player_bust());
        }
        Ok(())
    }

    /// Ends the player's turn and plays out the dealer. Ignored outside the
    /// player's turn.
    pub fn player_stand(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::PlayerTurn {
            debug!(phase = ?self.phase, "stand ignored outside player turn");
            return Ok(());
        }
        self.actions.push(PlayerAction::Stand);
        debug!(player_total = self.player.total(), "player stand");
        self.dealer_turn()
    }

    pub fn apply(&mut self, action: PlayerAction) -> Result<(), GameError> {
        match action {
            PlayerAction::Hit => self.player_hit(),
            PlayerAction::Stand => self.player_stand(),
        }
    }

    fn dealer_turn(&mut self) -> Result<(), GameError> {
        self.phase = Phase::DealerTurn;
        self.reveal_hole();
        while dealer_should_draw(self.dealer.total()) {
            let card = self.deck.draw()?;
            self.dealer.push(card);
            debug!(%card, dealer_total = self.dealer.total(), "dealer draw");
        }
        let result = decide_outcome(self.player.total(), self.dealer.total());
        self.settle(result);
        Ok(())
    }

    fn reveal_hole(&mut self) {
        if self.hole_hidden {
            self.hole_hidden = false;
            debug!(hole = ?self.dealer.cards().first(), "hole card revealed");
        }
    }

    fn settle(&mut self, result: RoundResult) {
        if self.phase == Phase::Settled {
            return;
        }
        self.reveal_hole();
        self.phase = Phase::Settled;
        self.result = Some(result);
        if result.outcome == Outcome::Win {
            self.wins = self.wins.saturating_add(1);
        }
        info!(
            outcome = result.outcome.as_str(),
            reason = result.reason.as_str(),
            player_total = self.player.total(),
            dealer_total = self.dealer.total(),
            wins = self.wins,
            "round settled"
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        let dealer: Vec<CardView> = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i == 0 && self.hole_hidden {
                    CardView::Down
                } else {
                    CardView::Up(c)
                }
            })
            .collect();
        let visible: Vec<Card> = dealer
            .iter()
            .filter_map(|v| match v {
                CardView::Up(c) => Some(*c),
                CardView::Down => None,
            })
            .collect();
        Snapshot {
            player: self.player.cards().to_vec(),
            dealer,
            player_total: self.player.total(),
            dealer_visible_total: hand_total(&visible),
            phase: self.phase,
            finished: self.is_finished(),
            result: self.result,
            wins: self.wins,
        }
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
    pub fn hole_hidden(&self) -> bool {
        self.hole_hidden
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Settled
    }
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }
    pub fn actions(&self) -> &[PlayerAction] {
        &self.actions
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
