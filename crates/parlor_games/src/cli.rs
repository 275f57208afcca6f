//! Command-line interface for parlor.

use clap::{Args, Parser, Subcommand, ValueEnum};
use parlor_games::SessionConfig;
use parlor_tictactoe::Mark;
use std::path::PathBuf;

/// Parlor - tic-tac-toe and 21 against the computer
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Console tic-tac-toe and 21 against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the heuristic agent
    Tictactoe(SessionArgs),

    /// Play 21 against the dealer
    Twentyone(SessionArgs),
}

/// Mark choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Play X
    X,
    /// Play O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Options shared by both games; each overrides the config file.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Path to the session config file (defaults apply when missing)
    #[arg(short, long, default_value = "parlor.toml")]
    pub config: PathBuf,

    /// Your tic-tac-toe mark
    #[arg(long, value_enum)]
    pub mark: Option<MarkArg>,

    /// Let the computer move first in the opening round
    #[arg(long)]
    pub computer_first: bool,

    /// RNG seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Points needed to win the match
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Your display name
    #[arg(long)]
    pub name: Option<String>,
}

impl SessionArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(mark) = self.mark {
            config = config.with_human_mark(mark.into());
        }
        if self.computer_first {
            config = config.with_human_first(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(threshold) = self.threshold {
            config = config.with_score_threshold(threshold);
        }
        if let Some(name) = &self.name {
            config = config.with_player_name(Some(name.clone()));
        }
        config
    }
}
