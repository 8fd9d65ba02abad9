//! Round result types for settlement.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player went over 21 and loses the bet.
    PlayerBust,
    /// Player has blackjack and the dealer does not; pays 3:2.
    Blackjack,
    /// Both have blackjack; the bet is returned.
    BlackjackPush,
    /// Dealer went over 21; pays 1:1.
    DealerBust,
    /// Dealer has blackjack and the player does not.
    DealerBlackjack,
    /// Equal totals; the bet is returned.
    Push,
    /// Dealer's total is higher.
    DealerWins,
    /// Player's total is higher; pays 1:1.
    PlayerWins,
}

impl HandOutcome {
    /// Returns the amount credited back to the player for a settled `bet`.
    ///
    /// The bet has already been taken from the player's chips, so a push
    /// credits exactly `bet` and a loss credits nothing.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Blackjack => bet * 5 / 2,
            Self::BlackjackPush | Self::Push => bet,
            Self::DealerBust | Self::PlayerWins => bet * 2,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWins => 0,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::DealerBust | Self::PlayerWins)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: HandOutcome,
    /// The bet amount.
    pub bet: usize,
    /// The payout amount (added back to the player's chips).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// The player's chips after the payout.
    pub chips: usize,
}

impl RoundResult {
    /// Net change to the player's chips over the round.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}
