//! Interactive text session: prompts, reveals and the leaderboard.
//!
//! [`Session`] is the only part of the crate that talks to a terminal. It
//! drives a [`Game`] through each round, re-prompting on any input the table
//! rejects, and reads/writes the leaderboard when the player leaves.

use std::io::{BufRead, Write};

use crate::error::{BetError, SessionError};
use crate::game::{Game, GameState};
use crate::hand::Hand;
use crate::leaderboard::Leaderboard;
use crate::options::TableOptions;
use crate::result::{HandOutcome, RoundResult};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to leave with this many chips.
    Exited {
        /// Final chip count, also written to the leaderboard.
        chips: usize,
    },
    /// The player lost every chip.
    Broke,
}

/// A blocking, line-based game session.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: TableOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing to
    /// `output`.
    pub const fn new(input: R, output: W, options: TableOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greets the player, asks for a name and plays until they leave or go
    /// broke.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends early, the terminal or leaderboard
    /// file fails, or the deck runs out mid-round.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        writeln!(self.output, "Welcome to the Blackjack Game")?;
        self.show_leaderboard()?;

        let name = self.prompt("Enter your name (maximum 10 characters):\n")?;
        let game = Game::new(&name, &self.options);
        log::info!("new session for {}", game.player().name());

        self.play(game)
    }

    /// Plays rounds on an already seated `game`.
    ///
    /// # Errors
    ///
    /// See [`Session::run`].
    pub fn play(&mut self, mut game: Game) -> Result<SessionEnd, SessionError> {
        loop {
            self.take_bet(&mut game)?;
            game.deal()?;

            if let Some(card) = game.up_card() {
                writeln!(self.output, "Dealer's first card:  {card}")?;
            }
            let hand = game.player().hand();
            writeln!(self.output, "Your cards: {hand} ({})", hand.value())?;

            if game.state() == GameState::PlayerTurn {
                self.player_turn(&mut game)?;
            }

            if game.state() == GameState::DealerTurn {
                self.dealer_turn(&mut game)?;
            } else if game.player().has_blackjack() {
                self.reveal_dealer(&game)?;
            }

            let result = game.settle()?;
            self.announce(&result)?;

            if game.state() == GameState::GameOver {
                writeln!(self.output, "Game over! Good luck next time!")?;
                return Ok(SessionEnd::Broke);
            }

            if let Some(end) = self.continue_or_exit(&mut game)? {
                return Ok(end);
            }
        }
    }

    fn take_bet(&mut self, game: &mut Game) -> Result<(), SessionError> {
        writeln!(self.output, "Your current chips:  {}", game.player().chips)?;

        loop {
            let answer = self.prompt("How much do you want to bet? ")?;
            let amount = match answer.trim().parse::<i64>() {
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
                Ok(amount) if amount <= 0 => {
                    writeln!(self.output, "Please enter a positive number.")?;
                    continue;
                }
                Ok(amount) => usize::try_from(amount).unwrap_or(usize::MAX),
            };

            match game.bet(amount) {
                Ok(()) => return Ok(()),
                Err(BetError::ZeroBet) => {
                    writeln!(self.output, "Please enter a positive number.")?;
                }
                Err(BetError::InsufficientFunds) => {
                    writeln!(self.output, "You don't have enough chips.")?;
                }
                Err(err @ BetError::InvalidState) => {
                    return Err(SessionError::Table(err.to_string()));
                }
            }
        }
    }

    fn player_turn(&mut self, game: &mut Game) -> Result<(), SessionError> {
        while game.state() == GameState::PlayerTurn {
            let action = self.prompt("What is your action?\n\t1. Hit\n\t2. Stand\n")?;
            match action.trim() {
                "1" => {
                    let card = game.hit()?;
                    writeln!(self.output, "You drawn {card} ({})", game.player().value())?;
                    if game.player().hand().is_bust() {
                        writeln!(self.output, "You bust.")?;
                    }
                }
                "2" => game.stand()?,
                _ => writeln!(self.output, "Please input valid action.")?,
            }
        }

        Ok(())
    }

    fn dealer_turn(&mut self, game: &mut Game) -> Result<(), SessionError> {
        self.reveal_dealer(game)?;

        let drawn = game.dealer_play()?.len();
        let cards = game.dealer().hand().cards();
        let first_drawn = cards.len() - drawn;

        // Replaying the hand gives the running total after each draw.
        let mut running = Hand::new();
        for (index, card) in cards.iter().enumerate() {
            running.add_card(*card);
            if index >= first_drawn {
                writeln!(self.output, "Dealer drawn {card} ({})", running.value())?;
            }
        }

        Ok(())
    }

    fn reveal_dealer(&mut self, game: &Game) -> Result<(), SessionError> {
        let hand = game.dealer().hand();
        writeln!(self.output, "Dealer cards: {hand} ({})", hand.value())?;
        Ok(())
    }

    fn announce(&mut self, result: &RoundResult) -> Result<(), SessionError> {
        match result.outcome {
            HandOutcome::PlayerBust | HandOutcome::DealerBlackjack | HandOutcome::DealerWins => {
                writeln!(self.output, "Dealer wins.")?;
            }
            HandOutcome::Blackjack => {
                writeln!(
                    self.output,
                    "You win {} chips with Blackjack!",
                    result.payout
                )?;
            }
            HandOutcome::BlackjackPush => {
                writeln!(self.output, "Both have Blackjack. It's a Tie.")?;
            }
            HandOutcome::DealerBust => {
                writeln!(self.output, "Dealer busts.")?;
                writeln!(self.output, "You win {}!", result.payout)?;
            }
            HandOutcome::PlayerWins => {
                writeln!(self.output, "You win {}!", result.payout)?;
            }
            HandOutcome::Push => writeln!(self.output, "It's a tie.")?,
        }

        Ok(())
    }

    fn continue_or_exit(&mut self, game: &mut Game) -> Result<Option<SessionEnd>, SessionError> {
        loop {
            let action = self.prompt("Do you want to continue?\n\t1. Yes\n\t2. No\n")?;
            match action.trim() {
                "1" => {
                    game.next_round()?;
                    return Ok(None);
                }
                "2" => return self.leave(game).map(Some),
                _ => writeln!(self.output, "Please enter a valid action.")?,
            }
        }
    }

    fn leave(&mut self, game: &Game) -> Result<SessionEnd, SessionError> {
        let player = game.player();
        writeln!(self.output, "Your final score: {}", player.chips)?;

        let path = &self.options.leaderboard_path;
        let mut board = Leaderboard::load(path, self.options.leaderboard_size)?;
        board.record(player.name(), player.chips);
        board.save(path)?;

        write!(self.output, "{board}")?;
        writeln!(self.output, "See you again {}!", player.name())?;

        Ok(SessionEnd::Exited {
            chips: player.chips,
        })
    }

    fn show_leaderboard(&mut self) -> Result<(), SessionError> {
        let board = Leaderboard::load(
            &self.options.leaderboard_path,
            self.options.leaderboard_size,
        )?;
        write!(self.output, "{board}")?;
        Ok(())
    }

    /// Prints `message` and reads one line, without its line ending.
    fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
