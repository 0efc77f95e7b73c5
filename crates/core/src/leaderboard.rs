//! Leaderboard module - finished rounds in the order they ended
//!
//! Entries are only ever appended; the list is never re-sorted by score.
//! It lives for the lifetime of the process.

/// One finished round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaderboardEntry {
    pub score: i32,
    /// Wall-clock time the round ended, already formatted for display.
    pub timestamp: String,
}

impl LeaderboardEntry {
    /// Display line for this entry at 1-based `rank`.
    pub fn line(&self, rank: usize) -> String {
        format!("{}. Score: {} - Time: {}", rank, self.score, self.timestamp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished round.
    pub fn record(&mut self, score: i32, timestamp: impl Into<String>) {
        self.entries.push(LeaderboardEntry {
            score,
            timestamp: timestamp.into(),
        });
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, ranked by insertion order starting at 1.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.line(i + 1))
    }
}
