use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;

/// Outcome of one round for a single player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    /// Player identifier
    pub player_id: usize,
    /// The two cards dealt this round
    pub cards: [Card; 2],
    /// Classification of the two cards
    pub hand_rank: HandRank,
    /// Score assigned this round (0 = weakest hand)
    pub round_score: u32,
    /// Running total after this round
    pub overall_score: u32,
}

/// Complete record of one played round.
/// Serialized to JSONL for round history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN), assigned by the logger when absent
    #[serde(default)]
    pub round_id: Option<String>,
    /// 1-based round number within the game
    pub round: u32,
    /// Seed of the engine's RNG when it was seeded explicitly
    pub seed: Option<u64>,
    /// Number of shuffle passes applied to the round's deck
    pub shuffle_times: u32,
    /// Per-player results, weakest hand first
    pub results: Vec<SeatResult>,
    /// Timestamp when the round was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
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
        // inject id and timestamp if missing
        let mut rec = record.clone();
        if rec.round_id.is_none() {
            rec.round_id = Some(self.next_id());
        }
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
