//! Best finished sessions, kept for the lifetime of the process

use serde::{Deserialize, Serialize};

/// Leaderboard length
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Enemies destroyed
    pub kills: u32,
    /// Seconds the player stayed alive
    pub survived_secs: f32,
}

/// Sessions ordered by score, best first. Equal scores keep arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A score earns a slot if it is non-zero and the table has room or it
    /// beats the current last place
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|last| score > last.score))
    }

    /// Insert a finished session, returning its 1-based rank
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let slot = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(slot, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
