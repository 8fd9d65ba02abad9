use crate::error::{BetError, DealError};

use super::{Game, GameState};

/// Cards dealt before anyone acts: two each for the player and the dealer.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Places a bet, taking the chips from the player straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bet is zero,
    /// or the player lacks funds.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if self.player.chips < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.player.chips -= amount;
        self.bet = amount;
        log::debug!("bet {amount}, {} chips left", self.player.chips);
        self.transition(GameState::Dealing);

        Ok(())
    }

    /// Deals the initial cards: dealer, player, dealer, player.
    ///
    /// A player blackjack skips both turns and goes straight to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or there are not enough
    /// cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            self.dealer
                .hit(&mut self.deck)
                .ok_or(DealError::NotEnoughCards)?;
            self.player
                .hit(&mut self.deck)
                .ok_or(DealError::NotEnoughCards)?;
        }

        if self.player.has_blackjack() {
            self.transition(GameState::Settlement);
        } else {
            self.transition(GameState::PlayerTurn);
        }

        Ok(())
    }
}
