//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when starting the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been settled.
    #[error("the current round has not been settled")]
    InvalidState,
    /// The player has no chips left.
    #[error("the player has no chips left")]
    OutOfChips,
}

/// Errors that can occur while reading or writing the leaderboard.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The file could not be read or written.
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not hold a valid score list.
    #[error("leaderboard file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Fatal errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended before the session finished.
    #[error("input closed before the game finished")]
    InputClosed,
    /// The leaderboard could not be loaded or saved.
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
    /// The deck ran out of cards mid-round.
    #[error("the deck ran out of cards")]
    DeckExhausted,
    /// The round controller rejected a transition the session drove.
    #[error("unexpected table state: {0}")]
    Table(String),
}

impl From<DealError> for SessionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::NotEnoughCards => Self::DeckExhausted,
            DealError::InvalidState => Self::Table(err.to_string()),
        }
    }
}

impl From<ActionError> for SessionError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::NoCards => Self::DeckExhausted,
            ActionError::InvalidState => Self::Table(err.to_string()),
        }
    }
}

impl From<ShowdownError> for SessionError {
    fn from(err: ShowdownError) -> Self {
        match err {
            ShowdownError::NoCards => Self::DeckExhausted,
            ShowdownError::InvalidState => Self::Table(err.to_string()),
        }
    }
}

impl From<RoundError> for SessionError {
    fn from(err: RoundError) -> Self {
        Self::Table(err.to_string())
    }
}
