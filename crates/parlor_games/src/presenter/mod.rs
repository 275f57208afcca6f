//! Presentation collaborators.

mod console;

pub use console::{ConsolePresenter, draw_board, join_words, joinor};

use anyhow::Result;

/// Receives every event a session emits, in order.
pub trait Presenter<E> {
    /// Shows `event`.
    fn present(&mut self, event: &E) -> Result<()>;
}

/// Records events, for replays and tests.
impl<E: Clone> Presenter<E> for Vec<E> {
    fn present(&mut self, event: &E) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
