//! Parlor Games - console tic-tac-toe and 21 against a computer opponent.
//!
//! The game rules live in `parlor_tictactoe` and `parlor_twentyone`. This
//! crate adds what turns a rule engine into something playable:
//!
//! - [`SessionConfig`] - TOML-backed settings with CLI overrides
//! - [`Scoreboard`] - points across rounds and the match threshold
//! - [`players`] - input collaborators (console, or anything implementing the traits)
//! - [`presenter`] - presentation collaborators receiving game events
//! - [`orchestrator`] - the per-round loops that drive an engine round
//! - [`TicTacToeSession`], [`TwentyOneSession`] - multi-round sessions

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod answer;
mod config;
pub mod orchestrator;
pub mod players;
pub mod presenter;
mod score;
mod session;

pub use answer::{Answer, AnswerError, Question};
pub use config::{ConfigError, SessionConfig};
pub use orchestrator::{TicTacToeEvent, TwentyOneEvent};
pub use players::{CommandSource, ConsoleInput, Prompter, SquarePicker};
pub use presenter::{ConsolePresenter, Presenter};
pub use score::{MatchResult, OutcomeTag, ScoreSnapshot, Scoreboard, Scored, Side};
pub use session::{TicTacToeSession, TwentyOneSession};
