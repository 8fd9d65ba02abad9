//! A single-player blackjack table played against an automated dealer.
//!
//! The crate provides a [`Game`] type that runs one round at a time:
//! betting, the deal, the player's turn, the dealer's turn and settlement.
//! [`Session`] wraps it in a line-based text interface and keeps a small
//! [`Leaderboard`] of final chip counts.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameState, TableOptions};
//!
//! let mut game = Game::new("Ada", &TableOptions::default().with_seed(42));
//! game.bet(100).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.player().chips, 900);
//! assert_eq!(game.player().hand().len(), 2);
//! assert_ne!(game.state(), GameState::Betting);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod leaderboard;
pub mod options;
pub mod participant;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, LeaderboardError, RoundError, SessionError, ShowdownError,
};
pub use game::{Game, GameState, settle_hands};
pub use hand::{BLACKJACK, Hand};
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use options::TableOptions;
pub use participant::{MAX_NAME_LEN, Participant};
pub use result::{HandOutcome, RoundResult};
pub use session::{Session, SessionEnd};
