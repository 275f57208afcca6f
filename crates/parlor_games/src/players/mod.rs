//! Input collaborators.
//!
//! The engines never read text. A session asks one of these traits for a
//! square, a command or a yes/no answer, and the implementation decides how
//! to get it and whether to re-prompt on nonsense.

mod console;

pub use console::ConsoleInput;

use crate::{Answer, Question};
use anyhow::Result;
use parlor_tictactoe::{Board, Position};
use parlor_twentyone::{Card, Command, Hand};

/// Supplies the human's tic-tac-toe moves.
pub trait SquarePicker {
    /// Picks a square; `open` lists the unmarked ones in board order.
    ///
    /// Returning an occupied square is allowed: the round rejects it and
    /// asks again.
    fn pick_square(&mut self, board: &Board, open: &[Position]) -> Result<Position>;
}

/// Supplies the human's 21 commands.
pub trait CommandSource {
    /// Hit or stand, given the human's hand and the dealer's face-up card.
    fn choose_command(&mut self, hand: &Hand, dealer_upcard: Option<Card>) -> Result<Command>;
}

/// Answers the session's questions.
pub trait Prompter {
    /// Answers `question`.
    fn ask(&mut self, question: Question) -> Result<Answer>;

    /// The human's name, when the configuration has none.
    fn ask_name(&mut self) -> Result<String>;
}
