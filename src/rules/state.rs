//! Game state: board, seats, turn controller, and move history.
//!
//! ## GameState
//!
//! Created in `Setup` with the default roster, mutated turn by turn while
//! `Playing`, and frozen once `Over`. The board is written only by the move
//! resolver; phase, outcome, current seat, and clocks only by the turn
//! controller.
//!
//! ## GameSnapshot
//!
//! Serializable read-only view for the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::clock::{TurnClock, TurnToken};
use crate::ai::ThinkTimer;
use crate::board::{Board, Coord};
use crate::core::error::Result;
use crate::core::{EngineConfig, GameRng, Player, PlayerId, PlayerMap};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Playing,
    Paused,
    Over,
}

/// Game result so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(PlayerId),
    Draw,
}

/// Who produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    Human,
    /// Random cell forced by an expired countdown.
    Timeout,
    Computer,
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number within the game.
    pub number: u32,
    pub player: PlayerId,
    pub at: Coord,
    pub source: MoveSource,
}

/// Phase, outcome, seat rotation, and timers.
#[derive(Clone, Debug)]
pub(crate) struct TurnController {
    pub(crate) current: usize,
    pub(crate) outcome: Outcome,
    pub(crate) phase: Phase,
    pub(crate) clock: TurnClock,
    pub(crate) token: TurnToken,
    pub(crate) think: ThinkTimer,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: EngineConfig,
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) turn: TurnController,
    pub(crate) history: Vector<MoveRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Fresh `Setup`-phase state with the default roster.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Build a setup state from an already validated config.
    pub(crate) fn fresh(config: EngineConfig) -> Self {
        let board = Board::with_size(config.board_size.max(1));
        let players = PlayerMap::from_vec(config.default_players());
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            turn: TurnController::setup(&config),
            board,
            players,
            history: Vector::new(),
            rng,
            config,
        }
    }

    /// Discard this game and return to setup with defaults.
    ///
    /// Available from every phase. Board size returns to the configured
    /// default and every marker choice is cleared.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Self::fresh(self.config.clone());
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.turn.outcome
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.turn.current
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players.as_slice()[self.turn.current]
    }

    #[must_use]
    pub fn clock(&self) -> TurnClock {
        self.turn.clock
    }

    /// Current timer token; changes on every turn, pause, resume, and end.
    #[must_use]
    pub fn turn_token(&self) -> TurnToken {
        self.turn.token
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            players: self.players.as_slice().to_vec(),
            current_player: self.active_player().id,
            outcome: self.turn.outcome,
            phase: self.turn.phase,
            clock: self.turn.clock,
        }
    }
}

/// Serializable view of a game for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub players: Vec<Player>,
    pub current_player: PlayerId,
    pub outcome: Outcome,
    pub phase: Phase,
    pub clock: TurnClock,
}
