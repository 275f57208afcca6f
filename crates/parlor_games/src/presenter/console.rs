//! Plain-text console rendering.

use super::Presenter;
use crate::orchestrator::{TicTacToeEvent, TwentyOneEvent};
use crate::score::{MatchResult, OutcomeTag, ScoreSnapshot, Side};
use anyhow::Result;
use parlor_tictactoe::{Board, Position, Seat, Square};
use parlor_twentyone::Hand;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Joins items as `a`, `a or b`, or `a, b, or c`.
pub fn joinor<T: Display>(items: &[T]) -> String {
    join_words(items, "or")
}

/// Joins items as a list ending in `word`.
pub fn join_words<T: Display>(items: &[T], word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, word, second),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}, {} {}", head.join(", "), word, last)
        }
    }
}

fn square_text(square: Square) -> String {
    match square {
        Square::Empty => " ".to_string(),
        Square::Occupied(mark) => mark.to_string(),
    }
}

/// Draws the board as a 3x3 grid of 5-wide cells.
pub fn draw_board(board: &Board) -> String {
    let spacer = "     |     |";
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&p| format!("  {}  ", square_text(board.get(p))))
                .collect();
            format!("{}\n{}\n{}", spacer, cells.join("|").trim_end(), spacer)
        })
        .collect();
    rows.join("\n-----+-----+-----\n")
}

/// Writes human-readable lines for every event.
///
/// Names come from the session's welcome event; until then both sides are
/// called by role.
pub struct ConsolePresenter<W> {
    out: W,
    player: String,
    opponent: String,
}

impl ConsolePresenter<Stdout> {
    /// Presenter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            player: "Player".to_string(),
            opponent: "Computer".to_string(),
        }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn name_of(&self, side: Side) -> String {
        match side {
            Side::Human => self.player.clone(),
            Side::Computer => self.opponent.clone(),
        }
    }

    fn seat_name(&self, seat: Seat) -> String {
        match seat {
            Seat::Human => self.player.clone(),
            Seat::Agent => self.opponent.clone(),
        }
    }

    fn greet(&mut self, player: &str, opponent: &str, title: &str) -> Result<()> {
        self.player = player.to_string();
        self.opponent = opponent.to_string();
        writeln!(self.out, "{}", title)?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Hello, {}. My name is {}.",
            self.player, self.opponent
        )?;
        Ok(())
    }

    fn score(&mut self, score: &ScoreSnapshot) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{} has {} points.", self.player, score.human)?;
        writeln!(self.out, "{} has {} points.", self.opponent, score.computer)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn match_over(&mut self, result: &MatchResult) -> Result<()> {
        let name = self.name_of(result.winner);
        writeln!(
            self.out,
            "{} won the match {} to {}!",
            name,
            result.final_score.human.max(result.final_score.computer),
            result.final_score.human.min(result.final_score.computer)
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    fn hand_line(&mut self, label: &str, hand: &Hand) -> Result<()> {
        writeln!(
            self.out,
            "{}: {} (total {}).",
            label,
            join_words(hand.cards(), "and"),
            hand.total()
        )?;
        Ok(())
    }
}

impl<W: Write> Presenter<TicTacToeEvent> for ConsolePresenter<W> {
    fn present(&mut self, event: &TicTacToeEvent) -> Result<()> {
        match event {
            TicTacToeEvent::Welcome { player, opponent } => {
                self.greet(player, opponent, "Welcome to Tic Tac Toe!")?;
            }
            TicTacToeEvent::RoundStarted {
                board,
                seats,
                first,
                ..
            } => {
                writeln!(self.out)?;
                writeln!(self.out, "{} is an {}.", self.player, seats.human())?;
                writeln!(self.out, "{} is an {}.", self.opponent, seats.agent())?;
                let first = self.seat_name(*first);
                writeln!(self.out, "{} goes first.", first)?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", draw_board(board))?;
            }
            TicTacToeEvent::MoveMade {
                seat,
                position,
                board,
                ..
            } => {
                writeln!(self.out)?;
                let name = self.seat_name(*seat);
                writeln!(self.out, "{} marks square {}.", name, position)?;
                writeln!(self.out, "{}", draw_board(board))?;
            }
            TicTacToeEvent::MoveRejected { error } => {
                writeln!(self.out, "Sorry, {}.", error)?;
            }
            TicTacToeEvent::RoundOver { tag, score, .. } => {
                writeln!(self.out)?;
                match tag {
                    OutcomeTag::HumanWin => writeln!(self.out, "You won!")?,
                    OutcomeTag::Tie => writeln!(self.out, "It's a tie!")?,
                    OutcomeTag::AgentWin | OutcomeTag::Bust => {
                        writeln!(self.out, "{} won!", self.opponent)?
                    }
                }
                self.score(score)?;
            }
            TicTacToeEvent::MatchOver(result) => self.match_over(result)?,
            TicTacToeEvent::Farewell => {
                writeln!(self.out, "Thanks for playing Tic Tac Toe! Goodbye!")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter<TwentyOneEvent> for ConsolePresenter<W> {
    fn present(&mut self, event: &TwentyOneEvent) -> Result<()> {
        match event {
            TwentyOneEvent::Welcome { player, opponent } => {
                self.greet(player, opponent, "Welcome to 21. Let's play some cards!")?;
            }
            TwentyOneEvent::Dealt {
                player,
                dealer_upcard,
                ..
            } => {
                writeln!(self.out)?;
                self.hand_line("Your cards", player)?;
                if let Some(card) = dealer_upcard {
                    writeln!(self.out, "The dealer's card: {}", card)?;
                }
                writeln!(self.out)?;
            }
            TwentyOneEvent::PlayerHit { card, hand, .. } => {
                writeln!(self.out, "The new card is: {}.", card)?;
                self.hand_line("Your cards", hand)?;
            }
            TwentyOneEvent::PlayerStood { hand, .. } => {
                writeln!(self.out, "You stay at {}.", hand.total())?;
            }
            TwentyOneEvent::DealerHit { card, hand, .. } => {
                writeln!(self.out, "Dealer hits and draws {}.", card)?;
                self.hand_line("Dealer's cards", hand)?;
            }
            TwentyOneEvent::DealerStood { hand, .. } => {
                writeln!(self.out, "Dealer stays at {}.", hand.total())?;
            }
            TwentyOneEvent::RoundOver {
                tag,
                player,
                dealer,
                score,
                ..
            } => {
                writeln!(self.out)?;
                match tag {
                    OutcomeTag::Bust => writeln!(self.out, "You've busted! You lose!")?,
                    OutcomeTag::HumanWin => {
                        if dealer.is_bust() {
                            writeln!(self.out, "Dealer has busted!")?;
                        }
                        writeln!(self.out, "You win!")?;
                    }
                    OutcomeTag::Tie => writeln!(self.out, "It's a tie!")?,
                    OutcomeTag::AgentWin => writeln!(self.out, "Dealer wins!")?,
                }
                if *tag != OutcomeTag::Bust {
                    writeln!(
                        self.out,
                        "You: {}, Dealer: {}",
                        player.total(),
                        dealer.total()
                    )?;
                }
                self.score(score)?;
            }
            TwentyOneEvent::MatchOver(result) => self.match_over(result)?,
            TwentyOneEvent::Farewell => {
                writeln!(self.out, "Thanks for playing 21!")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
