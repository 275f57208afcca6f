//! Multi-round sessions.
//!
//! A session owns everything that outlives a single round: the
//! configuration, the seat assignment, the scoreboard and the RNG. Each
//! round starts from a fresh engine value.

use crate::orchestrator::{
    TicTacToeEvent, TicTacToeOrchestrator, TwentyOneEvent, TwentyOneOrchestrator,
};
use crate::players::{CommandSource, Prompter, SquarePicker};
use crate::presenter::Presenter;
use crate::score::{Scoreboard, Scored};
use crate::{Question, SessionConfig};
use anyhow::Result;
use parlor_tictactoe::{Round as TicTacToeRound, Seat, Seats};
use parlor_twentyone::{DealerPolicy, Round as TwentyOneRound};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

/// Seeds from the configuration, or from entropy.
fn session_rng(config: &SessionConfig) -> ChaCha8Rng {
    match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Picks the computer's display name.
fn pick_opponent(config: &SessionConfig, rng: &mut ChaCha8Rng) -> String {
    let names: Vec<&String> = config
        .computer_names()
        .iter()
        .filter(|name| !name.trim().is_empty())
        .collect();
    names
        .choose(rng)
        .map(|name| name.to_string())
        .unwrap_or_else(|| "Computer".to_string())
}

/// The configured name, or the one the human gives when asked.
fn player_name<I: Prompter>(config: &SessionConfig, input: &mut I) -> Result<String> {
    match config.player_name() {
        Some(name) => Ok(name.clone()),
        None => input.ask_name(),
    }
}

/// Tic-tac-toe against the heuristic agent, round after round.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    config: SessionConfig,
    seats: Seats,
    scoreboard: Scoreboard,
    opponent: String,
    rng: ChaCha8Rng,
}

impl TicTacToeSession {
    /// Opens a session; the human plays the configured mark.
    #[instrument(skip_all, fields(mark = %config.human_mark()))]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = session_rng(&config);
        let opponent = pick_opponent(&config, &mut rng);
        info!(%opponent, "Tic-tac-toe session opened");
        Self {
            seats: Seats::new(*config.human_mark()),
            scoreboard: Scoreboard::new(*config.score_threshold()),
            opponent,
            rng,
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Who plays which mark.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Points so far in the current match.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The computer's display name.
    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    /// Plays one round with `first` to move, then records the verdict.
    #[instrument(skip(self, input, presenter))]
    pub fn play_round<I, P>(
        &mut self,
        first: Seat,
        input: &mut I,
        presenter: &mut P,
    ) -> Result<parlor_tictactoe::Verdict>
    where
        I: SquarePicker,
        P: Presenter<TicTacToeEvent>,
    {
        let round = TicTacToeRound::new(self.seats, first);
        let score = self.scoreboard.snapshot();
        let mut orchestrator = TicTacToeOrchestrator::new(round, score, input, presenter);
        let verdict = orchestrator.run(&mut self.rng)?;
        let board = orchestrator.round().board().clone();

        let result = self.scoreboard.record(&verdict);
        presenter.present(&TicTacToeEvent::RoundOver {
            verdict,
            tag: verdict.tag(),
            board,
            score: self.scoreboard.snapshot(),
        })?;
        if let Some(result) = result {
            presenter.present(&TicTacToeEvent::MatchOver(result))?;
        }
        Ok(verdict)
    }

    /// Plays rounds until the human declines another.
    ///
    /// The human is asked for a name first unless the configuration has one.
    /// The opening round follows the configured first mover; later rounds
    /// ask the human.
    #[instrument(skip_all)]
    pub fn run<I, P>(&mut self, input: &mut I, presenter: &mut P) -> Result<()>
    where
        I: SquarePicker + Prompter,
        P: Presenter<TicTacToeEvent>,
    {
        let player = player_name(&self.config, input)?;
        presenter.present(&TicTacToeEvent::Welcome {
            player,
            opponent: self.opponent.clone(),
        })?;

        let mut human_first = *self.config.human_first();
        loop {
            let first = if human_first { Seat::Human } else { Seat::Agent };
            self.play_round(first, input, presenter)?;

            if !input.ask(Question::PlayAgain)?.is_yes() {
                break;
            }
            human_first = input.ask(Question::GoFirst)?.is_yes();
        }

        info!("Tic-tac-toe session closed");
        presenter.present(&TicTacToeEvent::Farewell)
    }
}

/// 21 against the threshold dealer, round after round.
#[derive(Debug, Clone)]
pub struct TwentyOneSession {
    config: SessionConfig,
    policy: DealerPolicy,
    scoreboard: Scoreboard,
    opponent: String,
    rng: ChaCha8Rng,
}

impl TwentyOneSession {
    /// Opens a session with the configured dealer threshold.
    #[instrument(skip_all, fields(stand_on = %config.dealer_stand_on()))]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = session_rng(&config);
        let opponent = pick_opponent(&config, &mut rng);
        info!(%opponent, "21 session opened");
        Self {
            policy: DealerPolicy::new(*config.dealer_stand_on()),
            scoreboard: Scoreboard::new(*config.score_threshold()),
            opponent,
            rng,
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The dealer's policy.
    pub fn policy(&self) -> DealerPolicy {
        self.policy
    }

    /// Points so far in the current match.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The dealer's display name.
    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    /// Deals and plays one round on a fresh deck, then records the verdict.
    #[instrument(skip_all)]
    pub fn play_round<I, P>(
        &mut self,
        input: &mut I,
        presenter: &mut P,
    ) -> Result<parlor_twentyone::Verdict>
    where
        I: CommandSource,
        P: Presenter<TwentyOneEvent>,
    {
        let round = TwentyOneRound::deal(self.policy, &mut self.rng)?;
        let score = self.scoreboard.snapshot();
        let mut orchestrator = TwentyOneOrchestrator::new(round, score, input, presenter);
        let verdict = orchestrator.run(&mut self.rng)?;
        let player = orchestrator.round().player().clone();
        let dealer = orchestrator.round().dealer().clone();

        let result = self.scoreboard.record(&verdict);
        presenter.present(&TwentyOneEvent::RoundOver {
            verdict,
            tag: verdict.tag(),
            player,
            dealer,
            score: self.scoreboard.snapshot(),
        })?;
        if let Some(result) = result {
            presenter.present(&TwentyOneEvent::MatchOver(result))?;
        }
        Ok(verdict)
    }

    /// Plays rounds until the human declines another, asking for a name
    /// first unless the configuration has one.
    #[instrument(skip_all)]
    pub fn run<I, P>(&mut self, input: &mut I, presenter: &mut P) -> Result<()>
    where
        I: CommandSource + Prompter,
        P: Presenter<TwentyOneEvent>,
    {
        let player = player_name(&self.config, input)?;
        presenter.present(&TwentyOneEvent::Welcome {
            player,
            opponent: self.opponent.clone(),
        })?;

        loop {
            self.play_round(input, presenter)?;
            if !input.ask(Question::PlayAgain)?.is_yes() {
                break;
            }
        }

        info!("21 session closed");
        presenter.present(&TwentyOneEvent::Farewell)
    }
}
