//! Session management: mode selection, restart, and the auto-playing
//! computer opponent.

use crate::bot;
use crate::game::{Game, MoveError};
use crate::types::{Board, GameStatus, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time;
use tracing::{debug, info, instrument, warn};

/// Who plays the `O` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[serde(rename = "pvp")]
    HumanVsHuman,
    /// `O` is played by the built-in heuristic.
    #[serde(rename = "ai")]
    HumanVsHeuristic,
}

impl Mode {
    /// Returns the mark the heuristic plays, if any.
    pub fn heuristic_mark(self) -> Option<Mark> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsHeuristic => Some(Mark::O),
        }
    }
}

/// Snapshot handed to the presentation layer after every accepted call.
///
/// The caller renders entirely from this value: the full board, the
/// status (which carries the winning line for highlighting), and the
/// active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// All nine cells.
    pub board: Board,
    /// Current status, including the winner and line when won.
    pub status: GameStatus,
    /// Active play mode.
    pub mode: Mode,
}

/// One game session: a game, a mode, and the opponent's RNG.
///
/// The session is the only owner of game state; every change flows
/// through [`Session::submit_human_move`] or [`Session::reset`].
#[derive(Debug)]
pub struct Session {
    game: Game,
    mode: Mode,
    bot_delay: Duration,
    rng: StdRng,
}

impl Session {
    /// Creates a new session with an empty board, `X` to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "Creating new session");
        Self {
            game: Game::new(),
            mode,
            bot_delay: Duration::ZERO,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a session with a seeded RNG, for deterministic opponents.
    #[instrument]
    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(mode)
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the pacing delay awaited before the heuristic's reply.
    pub fn bot_delay(&self) -> Duration {
        self.bot_delay
    }

    /// Sets the pacing delay before the heuristic's reply.
    ///
    /// Purely cosmetic; a zero delay (the default) changes nothing but
    /// timing.
    pub fn set_bot_delay(&mut self, delay: Duration) {
        self.bot_delay = delay;
    }

    /// Returns the current snapshot.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: *self.game.board(),
            status: self.game.status(),
            mode: self.mode,
        }
    }

    /// Starts a fresh game, keeping the mode unless a new one is given.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Option<Mode>) -> SessionView {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self.game = Game::new();
        info!(mode = ?self.mode, "Session reset");
        self.view()
    }

    /// Switches mode and starts a fresh game.
    pub fn set_mode(&mut self, mode: Mode) -> SessionView {
        self.reset(Some(mode))
    }

    /// Submits a human move at `index`.
    ///
    /// In [`Mode::HumanVsHeuristic`], when the move leaves the game in
    /// progress with `O` to play, exactly one automatic opponent move is
    /// made before this returns, after awaiting the pacing delay.
    ///
    /// # Errors
    ///
    /// Rejections from the move engine (`GameOver`, `OccupiedCell`,
    /// `IndexOutOfRange`); the session is untouched on failure.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn submit_human_move(&mut self, index: usize) -> Result<SessionView, MoveError> {
        self.game.apply(index).inspect_err(|error| {
            warn!(index, %error, "Rejected human move");
        })?;
        info!(index, status = ?self.game.status(), "Human move accepted");

        if let Some(mark) = self.mode.heuristic_mark()
            && self.game.turn() == Some(mark)
        {
            if !self.bot_delay.is_zero() {
                time::sleep(self.bot_delay).await;
            }
            let reply = bot::choose_move(self.game.board(), mark, &mut self.rng)?;
            self.game.apply(reply)?;
            debug!(reply, status = ?self.game.status(), "Heuristic replied");
        }

        Ok(self.view())
    }
}
