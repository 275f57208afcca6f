//! Scripted collaborators shared by the session tests.

#![allow(dead_code)]

use anyhow::Result;
use parlor_games::{Answer, CommandSource, Prompter, Question, SquarePicker};
use parlor_tictactoe::{Board, Position};
use parlor_twentyone::{Card, Command, Hand};
use std::collections::VecDeque;

/// Plays back queued replies.
///
/// With the square queue empty it takes the first open square; with the
/// command queue empty it hits; with the answer queue empty it says no.
/// Asked for a name, it answers "Tester".
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub squares: VecDeque<Position>,
    pub commands: VecDeque<Command>,
    pub answers: VecDeque<Answer>,
    pub questions: Vec<Question>,
    pub names_asked: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn squares(mut self, squares: impl IntoIterator<Item = Position>) -> Self {
        self.squares.extend(squares);
        self
    }

    pub fn commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands.extend(commands);
        self
    }

    pub fn answers(mut self, answers: impl IntoIterator<Item = Answer>) -> Self {
        self.answers.extend(answers);
        self
    }
}

impl SquarePicker for ScriptedInput {
    fn pick_square(&mut self, _board: &Board, open: &[Position]) -> Result<Position> {
        match self.squares.pop_front() {
            Some(position) => Ok(position),
            None => open
                .first()
                .copied()
                .ok_or_else(|| anyhow::anyhow!("No open square")),
        }
    }
}

impl CommandSource for ScriptedInput {
    fn choose_command(&mut self, _hand: &Hand, _dealer_upcard: Option<Card>) -> Result<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Hit))
    }
}

impl Prompter for ScriptedInput {
    fn ask(&mut self, question: Question) -> Result<Answer> {
        self.questions.push(question);
        Ok(self.answers.pop_front().unwrap_or(Answer::No))
    }

    fn ask_name(&mut self) -> Result<String> {
        self.names_asked += 1;
        Ok("Tester".to_string())
    }
}
