use std::{
    collections::VecDeque,
    fs::{self, File},
    io::{BufWriter, Write as _},
    ops::Deref,
    path::{Path, PathBuf},
};

use anyhow::Context;
use blockfall_engine::{Action, GameState, reduce};
use chrono::Utc;

use crate::schema::record::{RecordedGame, TurnRecord};

/// A wrapper around [`GameState`] that records piece placements as they
/// happen.
///
/// Every action goes through [`apply`](Self::apply). Whenever a tick
/// locks the falling piece, the stack and the piece as they stood just
/// before the lock are pushed into a ring buffer. Use
/// [`into_history`](Self::into_history) to extract the recording once
/// the game is done.
#[derive(Debug)]
pub struct RecordingGame {
    state: GameState,
    history: GameHistory,
}

/// Read-only access to the wrapped state.
///
/// `DerefMut` is deliberately absent: every state change must go through
/// [`RecordingGame::apply`], or placements would escape the recording.
impl Deref for RecordingGame {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl RecordingGame {
    /// Creates a recording game from explicit entropy.
    ///
    /// The entropy is kept in the history, so a saved recording can
    /// reproduce the exact piece sequence of the game.
    pub fn with_seed(entropy: u64, history_size: usize) -> Self {
        Self {
            state: GameState::with_seed(entropy),
            history: GameHistory::new(entropy, history_size),
        }
    }

    /// Applies one action to the game.
    pub fn apply(&mut self, action: Action) {
        let next = reduce(&self.state, action);
        // Only a tick can lock a piece, and a lock always changes the
        // stack. A restart changes the stack too, but is not a placement.
        if matches!(action, Action::Tick { .. }) && next.settled() != self.state.settled() {
            self.history.record(&self.state, &next);
        }
        self.state = next;
    }

    /// Consumes the game and returns the recorded history, closing it
    /// with a snapshot of the final score.
    pub fn into_history(mut self) -> GameHistory {
        self.history.close(&self.state);
        self.history
    }
}

/// Recorded history of one game.
///
/// Holds the entropy that seeded the game, the closing score snapshot and
/// a ring buffer of the most recent placements. Created by
/// [`RecordingGame::into_history`] and written out by [`save`](Self::save).
#[derive(Debug)]
pub struct GameHistory {
    entropy: u64,
    next_turn: u64,
    final_score: u64,
    final_level: u64,
    high_score: u64,
    buffer: RingBuffer<TurnRecord>,
}

impl GameHistory {
    fn new(entropy: u64, capacity: usize) -> Self {
        Self {
            entropy,
            next_turn: 0,
            final_score: 0,
            final_level: 1,
            high_score: 0,
            buffer: RingBuffer::with_capacity(capacity),
        }
    }

    fn record(&mut self, before: &GameState, after: &GameState) {
        self.buffer.push(TurnRecord {
            turn: self.next_turn,
            settled: before.settled().to_vec(),
            placed: before.falling().clone(),
            score: after.score(),
            level: after.level(),
        });
        self.next_turn += 1;
    }

    fn close(&mut self, state: &GameState) {
        self.final_score = state.score();
        self.final_level = state.level();
        // The run's best score, whether or not the latching tick landed.
        self.high_score = state.high_score().max(state.score());
    }

    /// Saves the recording as pretty-printed JSON in `record_dir`.
    ///
    /// The directory is created if it does not exist, and the filename
    /// carries the current timestamp: `game_{YYYYMMDD_HHMMSS}.json`.
    /// Returns the path of the written file.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let timestamp = Utc::now();
        let filename = format!("game_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
        let filepath = record_dir.join(filename);

        let data = RecordedGame {
            recorded_at: timestamp,
            entropy: self.entropy,
            final_score: self.final_score,
            final_level: self.final_level,
            high_score: self.high_score,
            turns: self.buffer.to_vec(),
        };

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &data)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}

/// A fixed-capacity ring buffer that overwrites the oldest entries when
/// full. Bounds the memory of recordings of arbitrarily long games.
#[derive(Debug)]
struct RingBuffer<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> RingBuffer<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone().into()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_buffer_keeps_insertion_order() {
        let mut buf: RingBuffer<i32> = RingBuffer::with_capacity(5);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn ring_buffer_overwrites_oldest_when_full() {
        let mut buf: RingBuffer<i32> = RingBuffer::with_capacity(3);
        for i in 1..=5 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn ring_buffer_with_capacity_one_holds_the_newest() {
        let mut buf: RingBuffer<&str> = RingBuffer::with_capacity(1);
        buf.push("first");
        buf.push("second");
        assert_eq!(buf.to_vec(), vec!["second"]);
    }

    #[test]
    fn ring_buffer_with_capacity_zero_stores_nothing() {
        let mut buf: RingBuffer<i32> = RingBuffer::with_capacity(0);
        buf.push(1);
        buf.push(2);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.to_vec(), Vec::<i32>::new());
    }

    /// Hard-drops the falling piece and locks it with a due tick.
    fn drop_and_lock(game: &mut RecordingGame) {
        game.apply(Action::HardDrop);
        game.apply(Action::Tick { elapsed: 0 });
    }

    #[test]
    fn each_lock_is_recorded_with_the_prior_stack() {
        let mut game = RecordingGame::with_seed(0, 100);

        drop_and_lock(&mut game);
        drop_and_lock(&mut game);

        let turns = game.history.buffer.to_vec();
        assert_eq!(turns.len(), 2);

        assert_eq!(turns[0].turn, 0);
        assert!(turns[0].settled.is_empty());
        assert_eq!(turns[0].placed.len(), 4);
        assert!(turns[0].placed.iter().all(|cell| (18..=19).contains(&cell.y())));

        assert_eq!(turns[1].turn, 1);
        assert_eq!(turns[1].settled.len(), 4);
        assert_eq!(turns[1].placed.len(), 4);
    }

    #[test]
    fn idle_ticks_and_moves_are_not_recorded() {
        let mut game = RecordingGame::with_seed(0, 100);
        game.apply(Action::Move { dx: 1, dy: 0 });
        game.apply(Action::Tick { elapsed: 1 });
        game.apply(Action::Rotate(blockfall_engine::Spin::Clockwise));
        assert_eq!(game.history.buffer.len(), 0);
    }

    #[test]
    fn turn_numbers_survive_the_ring_buffer_window() {
        let mut game = RecordingGame::with_seed(0, 2);
        for _ in 0..3 {
            drop_and_lock(&mut game);
        }

        let turns = game.history.buffer.to_vec();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].turn, 1);
        assert_eq!(turns[1].turn, 2);
    }

    #[test]
    fn restart_and_latch_are_not_recorded_as_placements() {
        let mut game = RecordingGame::with_seed(0, 1_000);

        // Stack pieces until the game tops out and latches.
        let mut rounds = 0;
        while !game.ended() && rounds < 500 {
            drop_and_lock(&mut game);
            game.apply(Action::Tick { elapsed: 1 });
            rounds += 1;
        }
        assert!(game.ended());

        let placements = game.history.buffer.len();
        game.apply(Action::Restart);
        assert!(!game.ended());
        assert!(game.settled().is_empty());
        assert_eq!(game.history.buffer.len(), placements);
    }

    #[test]
    fn history_closes_with_the_final_snapshot() {
        let mut game = RecordingGame::with_seed(7, 10);
        drop_and_lock(&mut game);

        let history = game.into_history();
        assert_eq!(history.entropy, 7);
        assert_eq!(history.final_level, 1);
        assert_eq!(history.next_turn, 1);
    }
}
