//! Pure tic-tac-toe game logic.
//!
//! The crate has four layers, each depending only on the ones above it:
//!
//! - **State**: [`Board`], [`Square`], [`Mark`], [`Position`]
//! - **Rules**: [`rules`] - winner, full board, and the shared line scan
//! - **Agent**: [`HeuristicAgent`] - win, center, block, random
//! - **Round**: [`Round`] - turn order between [`Seat::Human`] and [`Seat::Agent`]
//!
//! No I/O happens here. Callers feed validated [`Position`]s in and read
//! board snapshots and [`Verdict`]s out.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Mark, Phase, Position, Round, Seat, Seats};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut round = Round::new(Seats::new(Mark::X), Seat::Human);
//!
//! round.play_human(Position::TopLeft)?;
//! let decision = round.play_agent(&mut rng)?;
//! assert_eq!(decision.position, Position::Center);
//! assert_eq!(round.phase(), Phase::AwaitingHuman);
//! # Ok::<(), parlor_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod agent;
mod contracts;
mod position;
mod round;
pub mod rules;
mod seats;
mod types;

pub use action::{Move, MoveError};
pub use agent::{Decision, HeuristicAgent, Priority};
pub use position::Position;
pub use round::{Phase, Round, Verdict};
pub use rules::{LINES, Line, is_full, is_terminal, scan_lines, winner};
pub use seats::{Seat, Seats};
pub use types::{Board, Mark, Square};
