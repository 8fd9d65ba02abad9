//! Hand accumulation.

use core::fmt;

use crate::card::Card;

/// The best possible hand value.
pub const BLACKJACK: u8 = 21;

/// Value an incoming card adds to a hand currently worth `total`.
///
/// An Ace counts 11 unless that would take the total past 21. The choice is
/// made once, when the Ace arrives, and is never revisited.
const fn card_value(rank: u8, total: u8) -> u8 {
    match rank {
        1 if total <= BLACKJACK - 11 => 11,
        1 => 1,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Cards held by a player or the dealer, with a running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Running total, updated as each card arrives.
    total: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card to the hand and updates the total.
    pub fn add_card(&mut self, card: Card) {
        self.total = self
            .total
            .saturating_add(card_value(card.rank, self.total));
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently added card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the accumulated value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.total
    }

    /// Returns whether the hand is a blackjack (two cards worth 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
