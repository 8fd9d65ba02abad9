//! Table configuration options.

use std::path::{Path, PathBuf};

/// Chips every new player starts with.
pub const DEFAULT_STARTING_CHIPS: usize = 1000;

/// Number of entries kept on the leaderboard.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// File the leaderboard is stored in when no other path is given.
pub const DEFAULT_LEADERBOARD_PATH: &str = "blackjack.json";

/// Configuration for a table session.
///
/// The rules of play are fixed; only the bookkeeping around them can be
/// changed:
///
/// ```
/// use bjsolo::TableOptions;
///
/// let options = TableOptions::default()
///     .with_seed(7)
///     .with_leaderboard_path("scores.json");
/// assert_eq!(options.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips the player starts with.
    pub starting_chips: usize,
    /// Maximum number of leaderboard entries kept.
    pub leaderboard_size: usize,
    /// Where the leaderboard is read from and written to.
    pub leaderboard_path: PathBuf,
    /// Deck seed. `None` picks a random one.
    pub seed: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_PATH),
            seed: None,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets how many leaderboard entries are kept.
    #[must_use]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Sets the leaderboard file.
    #[must_use]
    pub fn with_leaderboard_path(mut self, path: impl AsRef<Path>) -> Self {
        self.leaderboard_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the deck seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, or a fresh random one.
    #[must_use]
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
