//! Game integration tests.

use std::collections::HashSet;

use bjsolo::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Deck, Game, GameState, Hand, HandOutcome,
    Participant, RoundError, ShowdownError, Suit, settle_hands,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards, 1)
}

fn table(chips: usize, draws: &[Card]) -> Game {
    Game::with_deck("Ada", chips, deck_from_draws(draws))
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for card in cards {
        hand.add_card(*card);
    }
    hand
}

#[test]
fn refreshed_deck_holds_every_card_once() {
    let mut deck = Deck::new(3);
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        assert_eq!(deck.cards().iter().filter(|c| c.suit == suit).count(), 13);
    }
    for rank in 1..=13 {
        assert_eq!(deck.cards().iter().filter(|c| c.rank == rank).count(), 4);
    }

    for _ in 0..10 {
        deck.draw().unwrap();
    }
    deck.refresh();
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn refresh_reshuffles() {
    let mut deck = Deck::new(9);
    let first = deck.cards().to_vec();
    deck.refresh();
    assert_ne!(deck.cards(), first.as_slice());
}

#[test]
fn draw_removes_the_card() {
    let mut deck = Deck::new(5);
    let drawn = deck.draw().unwrap();
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.cards().contains(&drawn));

    let mut empty = Deck::from_cards(Vec::new(), 5);
    assert!(empty.is_empty());
    assert_eq!(empty.draw(), None);
}

#[test]
fn hand_values_follow_draw_order() {
    let blackjack = hand_of(&[card(Suit::Hearts, 10), card(Suit::Spades, 1)]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_blackjack());

    let aces = hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]);
    assert_eq!(aces.value(), 12);
    assert!(!aces.is_blackjack());

    let soft = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 1),
    ]);
    assert_eq!(soft.value(), 21);
    assert!(!soft.is_blackjack());

    let faces = hand_of(&[card(Suit::Hearts, 11), card(Suit::Clubs, 13)]);
    assert_eq!(faces.value(), 20);
    assert!(!faces.is_blackjack());
}

#[test]
fn early_ace_is_never_revalued() {
    let hand = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 5),
    ]);
    assert_eq!(hand.value(), 26);
    assert!(hand.is_bust());
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    let hand = hand_of(&[
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 7),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_blackjack());
}

#[test]
fn hand_display_joins_cards() {
    let hand = hand_of(&[card(Suit::Spades, 1), card(Suit::Hearts, 10)]);
    assert_eq!(hand.to_string(), "A♠ 10♥");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q♦");
    assert_eq!(Hand::new().to_string(), "");
}

#[test]
fn player_name_is_truncated() {
    let player = Participant::player("Bartholomew", 1000);
    assert_eq!(player.name(), "Bartholome");
    assert_eq!(player.chips, 1000);

    let wide = Participant::player("ÅÅÅÅÅÅÅÅÅÅÅÅ", 1000);
    assert_eq!(wide.name().chars().count(), 10);

    let dealer = Participant::dealer();
    assert_eq!(dealer.name(), "Dealer");
    assert_eq!(dealer.chips, 0);
}

#[test]
fn bet_errors() {
    let mut game = table(1000, &[]);

    assert_eq!(game.bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.bet(1001).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.player().chips, 1000);

    game.bet(1000).unwrap();
    assert_eq!(game.player().chips, 0);
    assert_eq!(game.current_bet(), 1000);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.bet(1).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_errors() {
    let mut game = table(1000, &[card(Suit::Hearts, 9), card(Suit::Clubs, 5)]);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.bet(10).unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn deal_alternates_dealer_and_player() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Hearts, 5),   // player
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Spades, 6),   // player
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.dealer().hand().cards(),
        &[card(Suit::Clubs, 9), card(Suit::Diamonds, 7)]
    );
    assert_eq!(
        game.player().hand().cards(),
        &[card(Suit::Hearts, 5), card(Suit::Spades, 6)]
    );
    assert_eq!(game.player().value(), 11);
    assert_eq!(game.up_card(), Some(&card(Suit::Clubs, 9)));
    assert_eq!(game.visible_dealer_cards(), &[card(Suit::Clubs, 9)]);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 9),
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
        ],
    );

    game.bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut game = table(1000, &[]);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Hearts, 1),   // player
            card(Suit::Diamonds, 9), // dealer hole
            card(Suit::Spades, 13),  // player
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::Settlement);
    assert_eq!(game.visible_dealer_cards().len(), 2);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Blackjack);
    assert_eq!(result.payout, 250);
    assert_eq!(result.net(), 150);
    assert_eq!(game.player().chips, 1150);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn both_blackjack_is_a_push() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 1),
            card(Suit::Hearts, 1),
            card(Suit::Diamonds, 13),
            card(Suit::Spades, 12),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::BlackjackPush);
    assert_eq!(result.payout, 100);
    assert_eq!(game.player().chips, 1000);
}

#[test]
fn dealer_bust_pays_double() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Spades, 13),  // player
            card(Suit::Spades, 9),   // dealer draw
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Spades, 9)]);
    assert_eq!(game.dealer().value(), 25);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::DealerBust);
    assert_eq!(result.payout, 200);
    assert_eq!(game.player().chips, 1100);
}

#[test]
fn higher_dealer_total_wins() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 8),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::DealerWins);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.payout, 0);
    assert_eq!(game.player().chips, 900);
}

#[test]
fn equal_totals_push() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 12),
            card(Suit::Spades, 13),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.payout, 100);
    assert_eq!(game.player().chips, 1000);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 6),
            card(Suit::Clubs, 9), // player hit
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();

    let hit = game.hit().unwrap();
    assert_eq!(hit, card(Suit::Clubs, 9));
    assert_eq!(game.player().value(), 25);
    assert_eq!(game.state(), GameState::Settlement);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::PlayerBust);
    assert_eq!(game.player().chips, 900);
}

#[test]
fn reaching_twenty_one_ends_player_turn() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Hearts, 5),   // player
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Spades, 6),   // player
            card(Suit::Hearts, 13),  // player hit
            card(Suit::Spades, 4),   // dealer draw
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.player().value(), 21);
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer().value(), 21);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(game.player().chips, 1000);
}

#[test]
fn dealer_blackjack_stands_and_wins() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 1),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 13),
            card(Suit::Spades, 12),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.visible_dealer_cards().len(), 1);

    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::DealerBlackjack);
    assert_eq!(game.player().chips, 900);
}

#[test]
fn dealer_draws_until_level_with_player() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Hearts, 10),  // player
            card(Suit::Diamonds, 3), // dealer hole
            card(Suit::Spades, 8),   // player
            card(Suit::Spades, 4),
            card(Suit::Hearts, 5),
            card(Suit::Spades, 3),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 13),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 4);
    assert_eq!(game.dealer().value(), 19);
    assert_eq!(game.cards_remaining(), 1);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::DealerWins);
}

#[test]
fn higher_player_total_wins_even_money() {
    let player = hand_of(&[card(Suit::Hearts, 10), card(Suit::Clubs, 12)]);
    let dealer = hand_of(&[card(Suit::Spades, 10), card(Suit::Diamonds, 8)]);

    let outcome = settle_hands(&player, &dealer);
    assert_eq!(outcome, HandOutcome::PlayerWins);
    assert_eq!(outcome.payout(100), 200);
    assert!(outcome.is_win());
}

#[test]
fn payouts_round_down() {
    assert_eq!(HandOutcome::Blackjack.payout(15), 37);
    assert_eq!(HandOutcome::Blackjack.payout(100), 250);
    assert_eq!(HandOutcome::BlackjackPush.payout(15), 15);
    assert_eq!(HandOutcome::DealerWins.payout(15), 0);
}

#[test]
fn next_round_resets_hands_and_deck() {
    let mut game = table(
        1000,
        &[
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 8),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();

    game.next_round().unwrap();
    assert_eq!(game.state(), GameState::Betting);
    assert!(game.player().hand().is_empty());
    assert_eq!(game.player().value(), 0);
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.dealer().value(), 0);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.player().chips, 900);
    assert_eq!(game.current_bet(), 0);
}

#[test]
fn losing_last_chip_ends_the_game() {
    let mut game = table(
        100,
        &[
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 8),
        ],
    );

    game.bet(100).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.next_round().unwrap_err(), RoundError::OutOfChips);
}
