//! Line-oriented console input.

use super::{CommandSource, Prompter, SquarePicker};
use crate::presenter::joinor;
use crate::{Answer, Question};
use anyhow::{Context, Result, bail};
use parlor_tictactoe::{Board, MoveError, Position};
use parlor_twentyone::{Card, Command, Hand};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Reads answers line by line from `reader`, writing prompts to `writer`.
///
/// Every prompt loops until the line parses; end of input is an error.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console input on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, prompt: impl Display) -> Result<String> {
        writeln!(self.writer, "=> {}", prompt)?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD and fail to parse like any other typo.
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        debug!(line = %line.trim(), "Read input");
        Ok(line)
    }

    fn complain(&mut self, message: impl Display) -> Result<()> {
        warn!(%message, "Rejected input");
        writeln!(self.writer, "=> Sorry, {}", message)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> SquarePicker for ConsoleInput<R, W> {
    #[instrument(skip(self, _board))]
    fn pick_square(&mut self, _board: &Board, open: &[Position]) -> Result<Position> {
        loop {
            let line = self.read_line(format_args!("Choose a square ({}):", joinor(open)))?;
            let Ok(number) = line.trim().parse::<u8>() else {
                self.complain("that's not a valid choice.")?;
                continue;
            };
            match Position::try_from(number) {
                Ok(position) if open.contains(&position) => return Ok(position),
                Ok(position) => self.complain(MoveError::SquareOccupied(position))?,
                Err(e) => self.complain(e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> CommandSource for ConsoleInput<R, W> {
    #[instrument(skip_all, fields(total = hand.total()))]
    fn choose_command(&mut self, hand: &Hand, _dealer_upcard: Option<Card>) -> Result<Command> {
        loop {
            let line = self.read_line("Would you like to hit or stay?")?;
            match line.parse::<Command>() {
                Ok(command) => return Ok(command),
                Err(e) => self.complain(e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn ask(&mut self, question: Question) -> Result<Answer> {
        loop {
            let line = self.read_line(format_args!("{} (y/n)", question))?;
            match line.parse::<Answer>() {
                Ok(answer) => return Ok(answer),
                Err(e) => self.complain(e)?,
            }
        }
    }

    #[instrument(skip(self))]
    fn ask_name(&mut self) -> Result<String> {
        loop {
            let line = self.read_line("What shall I call you?")?;
            let name = line.trim();
            if name.is_empty() {
                self.complain("a name can't be blank.")?;
                continue;
            }
            return Ok(name.to_string());
        }
    }
}
