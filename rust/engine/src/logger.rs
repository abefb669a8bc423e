use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::RoundState;
use crate::player::PlayerAction;
use crate::rules::{Outcome, ResultReason};

/// Complete record of a settled round.
/// Serialized to JSONL, one line per round, for round history and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Session RNG seed (rounds of one session share it)
    pub seed: Option<u64>,
    /// Player decisions in order; empty when the player was dealt 21
    pub actions: Vec<PlayerAction>,
    /// Player cards in deal order
    pub player: Vec<Card>,
    /// Dealer cards in deal order, hole card first
    pub dealer: Vec<Card>,
    pub player_total: u32,
    pub dealer_total: u32,
    pub outcome: Outcome,
    pub reason: ResultReason,
    /// Session win count after this round
    pub wins: u32,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Builds a record from a settled round; `None` while the round is
    /// still in progress.
    pub fn from_state(round_id: String, seed: Option<u64>, state: &RoundState) -> Option<Self> {
        let result = state.result()?;
        Some(Self {
            round_id,
            seed,
            actions: state.actions().to_vec(),
            player: state.player().cards().to_vec(),
            dealer: state.dealer().cards().to_vec(),
            player_total: state.player().total(),
            dealer_total: state.dealer().total(),
            outcome: result.outcome,
            reason: result.reason,
            wins: state.wins(),
            ts: None,
        })
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
