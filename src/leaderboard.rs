//! High-score list persisted as JSON.
//!
//! The file holds an array of `[name, score]` pairs, best score first:
//!
//! ```json
//! [["Ada", 2350], ["Grace", 1200]]
//! ```

use core::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

/// Width of the rule lines framing the table.
const RULE_WIDTH: usize = 22;

/// A player's final chip count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry(pub String, pub usize);

impl ScoreEntry {
    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the final chip count.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.1
    }
}

/// The top scores, sorted descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl Leaderboard {
    /// Creates an empty leaderboard holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Builds a leaderboard from existing entries, sorting and truncating
    /// them.
    #[must_use]
    pub fn from_entries(entries: Vec<ScoreEntry>, capacity: usize) -> Self {
        let mut board = Self { entries, capacity };
        board.rank();
        board
    }

    /// Loads the leaderboard at `path`.
    ///
    /// A missing file is an empty leaderboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or does not
    /// hold a list of `[name, score]` pairs.
    pub fn load(path: &Path, capacity: usize) -> Result<Self, LeaderboardError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no leaderboard at {}, starting empty", path.display());
                return Ok(Self::new(capacity));
            }
            Err(err) => return Err(err.into()),
        };

        let entries: Vec<ScoreEntry> = serde_json::from_str(&contents)?;
        Ok(Self::from_entries(entries, capacity))
    }

    /// Writes the leaderboard to `path`, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string(&self.entries)?;
        fs::write(path, json)?;
        log::info!(
            "saved {} leaderboard entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Adds a score, keeping only the best `capacity` entries.
    pub fn record(&mut self, name: &str, score: usize) {
        self.entries.push(ScoreEntry(name.to_string(), score));
        self.rank();
    }

    /// Returns the entries, best score first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the leaderboard is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Stable, so equal scores keep the order they were recorded in.
    fn rank(&mut self) {
        self.entries.sort_by(|a, b| b.score().cmp(&a.score()));
        self.entries.truncate(self.capacity);
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{:-^width$}", "LeaderBoard", width = RULE_WIDTH)?;
        writeln!(f, "{:<15} {:<15}", "Name", "Score")?;
        writeln!(f, "{rule}")?;
        for entry in &self.entries {
            writeln!(f, "{:<15} {:<15}", entry.name(), entry.score())?;
        }
        writeln!(f, "{rule}")
    }
}
