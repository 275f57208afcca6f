//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state. Every
//! question the engine asks about lines (is there a winner, can a mark win
//! next move, must the opponent be blocked) goes through [`scan_lines`].

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal};
pub use lines::{LINES, Line, completing_square, open_square, scan_lines};
pub use win::winner;
