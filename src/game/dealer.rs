use core::cmp::Ordering;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

/// Decides the outcome of a round from the two final hands.
///
/// Checks run in order: player bust, player blackjack (push against a dealer
/// blackjack), dealer blackjack, dealer bust, then a plain comparison of
/// totals.
#[must_use]
pub fn settle_hands(player: &Hand, dealer: &Hand) -> HandOutcome {
    if player.is_bust() {
        return HandOutcome::PlayerBust;
    }

    if player.is_blackjack() {
        return if dealer.is_blackjack() {
            HandOutcome::BlackjackPush
        } else {
            HandOutcome::Blackjack
        };
    }

    if dealer.is_blackjack() {
        return HandOutcome::DealerBlackjack;
    }

    if dealer.is_bust() {
        return HandOutcome::DealerBust;
    }

    match player.value().cmp(&dealer.value()) {
        Ordering::Greater => HandOutcome::PlayerWins,
        Ordering::Equal => HandOutcome::Push,
        Ordering::Less => HandOutcome::DealerWins,
    }
}

impl Game {
    /// Dealer plays their hand.
    ///
    /// A dealer blackjack stands as dealt. Otherwise the dealer keeps drawing
    /// while behind the player and under 21.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if !self.dealer.has_blackjack() {
            let target = self.player.value();
            while self.dealer.value() < target && self.dealer.value() < BLACKJACK {
                let card = self
                    .dealer
                    .hit(&mut self.deck)
                    .ok_or(ShowdownError::NoCards)?;
                drawn_cards.push(card);
            }
        }

        self.transition(GameState::Settlement);

        Ok(drawn_cards)
    }

    /// Settles the round and credits the payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let outcome = settle_hands(self.player.hand(), self.dealer.hand());
        let bet = self.bet;
        let payout = outcome.payout(bet);

        self.player.chips += payout;
        self.bet = 0;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            chips: self.player.chips,
        };
        log::info!(
            "round settled: {outcome:?}, bet {bet}, payout {payout}, chips {}",
            result.chips
        );

        if self.player.chips == 0 {
            self.transition(GameState::GameOver);
        } else {
            self.transition(GameState::RoundOver);
        }

        Ok(result)
    }
}
