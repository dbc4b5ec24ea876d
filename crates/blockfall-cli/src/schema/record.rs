use blockfall_engine::{Cell, PieceCells};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded game with metadata for replay functionality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when the recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Entropy the game was seeded from; replaying it reproduces the
    /// same piece sequence
    pub entropy: u64,
    /// Score when the recording was saved
    pub final_score: u64,
    /// Level when the recording was saved
    pub final_level: u64,
    /// Best score across restarts within the recorded run
    pub high_score: u64,
    /// Sequence of piece placements during the game
    pub turns: Vec<TurnRecord>,
}

/// A single turn record capturing the board just before a piece locked.
///
/// Each record represents one completed piece placement, storing the
/// stack immediately before the piece settled into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (0-indexed, increments with each placement)
    pub turn: u64,
    /// Settled stack before the piece locked
    pub settled: Vec<Cell>,
    /// The cells the piece locked into
    pub placed: PieceCells,
    /// Score after the placement, including rows it cleared
    pub score: u64,
    /// Level after the placement
    pub level: u64,
}
