//! Game state types.

/// Where the table is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player's bet.
    Betting,
    /// Bet placed; initial cards not yet dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final; the bet can be settled.
    Settlement,
    /// Round settled; the player may continue or leave.
    RoundOver,
    /// Round settled and the player has no chips left.
    GameOver,
}

impl GameState {
    /// Returns whether the dealer's hole card may be shown.
    ///
    /// The hole card stays hidden until the player's turn is over.
    #[must_use]
    pub const fn dealer_revealed(self) -> bool {
        matches!(
            self,
            Self::DealerTurn | Self::Settlement | Self::RoundOver | Self::GameOver
        )
    }
}
