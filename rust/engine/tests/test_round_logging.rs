use std::fs;
use std::path::PathBuf;

use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::Engine;
use blackjack_engine::game::RoundState;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::player::PlayerAction;
use blackjack_engine::rules::{Outcome, ResultReason};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn settled_engine() -> Engine {
    let mut eng = Engine::new(Some(11));
    eng.start_round_with_deck(Deck::stacked(vec![
        Card::new(R::Ten, S::Clubs),
        Card::new(R::Six, S::Hearts),
        Card::new(R::Nine, S::Diamonds),
        Card::new(R::Ten, S::Spades),
        Card::new(R::Six, S::Clubs),
    ]))
    .unwrap();
    eng.player_stand().unwrap();
    eng
}

#[test]
fn record_captures_settled_round() {
    let eng = settled_engine();
    let rec = RoundRecord::from_state("20250102-000001".into(), eng.seed(), eng.state())
        .expect("round is settled");
    assert_eq!(rec.seed, Some(11));
    assert_eq!(rec.actions, vec![PlayerAction::Stand]);
    assert_eq!(rec.player.len(), 2);
    assert_eq!(rec.dealer.len(), 3);
    assert_eq!(rec.dealer[0], Card::new(R::Six, S::Hearts));
    assert_eq!(rec.player_total, 19);
    assert_eq!(rec.dealer_total, 22);
    assert_eq!(rec.outcome, Outcome::Win);
    assert_eq!(rec.reason, ResultReason::DealerBust);
    assert_eq!(rec.wins, 1);
}

#[test]
fn record_is_absent_while_round_in_progress() {
    let mut st = RoundState::new();
    assert!(RoundRecord::from_state("x".into(), None, &st).is_none());
    st.start_round(Deck::new_with_seed(4)).unwrap();
    if !st.is_finished() {
        assert!(RoundRecord::from_state("x".into(), None, &st).is_none());
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let eng = settled_engine();
    let rec = RoundRecord::from_state(logger.next_id(), eng.seed(), eng.state()).unwrap();
    logger.write(&rec).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let line = String::from_utf8(bytes).unwrap();
    let back: RoundRecord = serde_json::from_str(line.trim_end()).expect("parse back");
    assert_eq!(back.outcome, Outcome::Win);
    assert!(back.ts.is_some());
    assert!(line.contains("\"outcome\":\"win\""));
    assert!(line.contains("\"reason\":\"dealer_bust\""));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn preset_ts_is_preserved() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    let eng = settled_engine();
    let mut rec = RoundRecord::from_state(logger.next_id(), eng.seed(), eng.state()).unwrap();
    let preset = "2030-01-01T00:00:00Z".to_string();
    rec.ts = Some(preset.clone());
    logger.write(&rec).expect("write");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}
