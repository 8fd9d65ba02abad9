//! Round controller and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::TableOptions;
use crate::participant::Participant;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::settle_hands;
pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the deck, the player, the dealer and the escrowed bet, and
/// moves through [`GameState`] one call at a time:
/// [`bet`](Self::bet), [`deal`](Self::deal), [`hit`](Self::hit) /
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play),
/// [`settle`](Self::settle) and finally [`next_round`](Self::next_round).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards still to be dealt.
    pub deck: Deck,
    /// The human player.
    player: Participant,
    /// The house.
    dealer: Participant,
    /// Current game state.
    state: GameState,
    /// Chips taken from the player for the current round.
    bet: usize,
}

impl Game {
    /// Creates a new table for `name`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameState, TableOptions};
    ///
    /// let game = Game::new("Ada", &TableOptions::default().with_seed(42));
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.player().chips, 1000);
    /// ```
    #[must_use]
    pub fn new(name: &str, options: &TableOptions) -> Self {
        Self::with_deck(
            name,
            options.starting_chips,
            Deck::new(options.seed_or_random()),
        )
    }

    /// Creates a new table that deals from `deck`.
    #[must_use]
    pub fn with_deck(name: &str, chips: usize, deck: Deck) -> Self {
        Self {
            deck,
            player: Participant::player(name, chips),
            dealer: Participant::dealer(),
            state: GameState::Betting,
            bet: 0,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the bet escrowed for the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.bet
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.dealer.hand().cards().first()
    }

    /// Returns the dealer cards the player is allowed to see.
    ///
    /// Only the up card is visible until the player's turn has ended.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer.hand().cards();
        if self.state.dealer_revealed() {
            cards
        } else {
            &cards[..cards.len().min(1)]
        }
    }

    fn transition(&mut self, next: GameState) {
        log::debug!("game state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Starts the next round with a freshly shuffled deck and empty hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been settled, or if the
    /// player has no chips left to bet.
    pub fn next_round(&mut self) -> Result<(), RoundError> {
        match self.state {
            GameState::RoundOver => {}
            GameState::GameOver => return Err(RoundError::OutOfChips),
            _ => return Err(RoundError::InvalidState),
        }

        self.deck.refresh();
        self.player.refresh();
        self.dealer.refresh();
        self.bet = 0;
        self.transition(GameState::Betting);

        Ok(())
    }
}
