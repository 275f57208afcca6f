//! Round orchestration between the human and the computer.
//!
//! An orchestrator owns one engine round, asks the input collaborator for
//! the human's moves, plays the computer's, and reports every state
//! transition to the presenter as an event carrying read-only snapshots.

mod tictactoe;
mod twentyone;

pub use tictactoe::{TicTacToeEvent, TicTacToeOrchestrator};
pub use twentyone::{TwentyOneEvent, TwentyOneOrchestrator};
