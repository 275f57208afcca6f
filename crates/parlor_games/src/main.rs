//! Parlor - console tic-tac-toe and 21.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SessionArgs};
use parlor_games::{
    ConsoleInput, ConsolePresenter, SessionConfig, TicTacToeSession, TwentyOneSession,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,parlor=info,parlor_games=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Tictactoe(args) => run_tictactoe(&args),
        Command::Twentyone(args) => run_twentyone(&args),
    }
}

/// Loads the config file and layers the CLI flags on top.
#[instrument(skip(args), fields(path = %args.config.display()))]
fn load_config(args: &SessionArgs) -> Result<SessionConfig> {
    let config = SessionConfig::load_or_default(&args.config)
        .with_context(|| format!("Loading {}", args.config.display()))?;
    let config = args.apply(config);
    config.validate()?;
    Ok(config)
}

/// Run a tic-tac-toe session on the console
fn run_tictactoe(args: &SessionArgs) -> Result<()> {
    let config = load_config(args)?;
    info!("Starting tic-tac-toe");

    let mut session = TicTacToeSession::new(config);
    let mut input = ConsoleInput::stdio();
    let mut presenter = ConsolePresenter::stdout();
    session.run(&mut input, &mut presenter)
}

/// Run a 21 session on the console
fn run_twentyone(args: &SessionArgs) -> Result<()> {
    let config = load_config(args)?;
    info!("Starting 21");

    let mut session = TwentyOneSession::new(config);
    let mut input = ConsoleInput::stdio();
    let mut presenter = ConsolePresenter::stdout();
    session.run(&mut input, &mut presenter)
}
