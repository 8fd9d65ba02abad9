//! Player and dealer seats.

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

/// Longest name, in characters, kept for the human player.
pub const MAX_NAME_LEN: usize = 10;

/// Name shown for the house.
pub const DEALER_NAME: &str = "Dealer";

/// Someone sitting at the table: the human player or the dealer.
///
/// The dealer never bets, so its chip count stays at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    /// Chip balance. Persists across rounds.
    pub chips: usize,
    hand: Hand,
}

impl Participant {
    /// Creates the human player, truncating the name to [`MAX_NAME_LEN`]
    /// characters.
    #[must_use]
    pub fn player(name: &str, chips: usize) -> Self {
        Self {
            name: name.chars().take(MAX_NAME_LEN).collect(),
            chips,
            hand: Hand::new(),
        }
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: DEALER_NAME.to_string(),
            chips: 0,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the value of the current hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the current hand is a blackjack.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Draws one card from `deck` into the hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Option<Card> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Some(card)
    }

    /// Empties the hand for a new round. Chips are kept.
    pub fn refresh(&mut self) {
        self.hand.clear();
    }
}
