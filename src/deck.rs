//! The single 52-card deck used at the table.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

/// A shuffled deck of cards.
///
/// The deck owns its random number generator so a whole session can be
/// replayed from a single seed. Cards are drawn from the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.refresh();
        deck
    }

    /// Creates a deck holding exactly `cards`, unshuffled.
    ///
    /// The last card of the slice is drawn first. The next [`Deck::refresh`]
    /// replaces the stacked cards with a full shuffled deck.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with one card per rank and suit, then shuffles.
    pub fn refresh(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in RANKS {
                self.cards.push(Card::new(suit, rank));
            }
        }

        self.cards.shuffle(&mut self.rng);
        log::debug!("deck refreshed with {} cards", self.cards.len());
    }

    /// Draws the top card.
    ///
    /// Returns `None` once all cards have been drawn; a single round never
    /// gets close to that.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
