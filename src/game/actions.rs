use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round for the player; reaching exactly 21 hands
    /// the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self
            .player
            .hit(&mut self.deck)
            .ok_or(ActionError::NoCards)?;

        let value = self.player.value();
        if value > BLACKJACK {
            self.transition(GameState::Settlement);
        } else if value == BLACKJACK {
            self.transition(GameState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.transition(GameState::DealerTurn);
        Ok(())
    }
}
