//! Setup-phase operations: roster, markers, board size, and game start.

use rustc_hash::FxHashSet;
use tracing::{info, instrument};

use super::state::{GameState, Phase, TurnController};
use crate::board::Board;
use crate::core::error::{EngineError, Result};
use crate::core::{EngineConfig, GameRng, Marker, Player, PlayerId, PlayerMap};

impl GameState {
    /// Start a game with `players` on a fresh `board_size` board.
    ///
    /// Seats are renumbered by position and move counts reset. Fails with
    /// `IncompleteSetup` naming the first human seat without a marker.
    #[instrument(skip(players, config), fields(seats = players.len()))]
    pub fn start_game(mut players: Vec<Player>, board_size: usize, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if players.len() < 2 || players.len() > 255 {
            return Err(EngineError::NotEnoughPlayers(players.len()));
        }
        if !(config.min_board_size..=config.max_board_size).contains(&board_size) {
            return Err(EngineError::InvalidSize(board_size));
        }

        let mut seen = FxHashSet::default();
        for (i, player) in players.iter_mut().enumerate() {
            player.id = PlayerId::new(i as u8);
            player.move_count = 0;
            if !player.is_ready() {
                return Err(EngineError::IncompleteSetup(player.id));
            }
            if let Some(marker) = player.claimed_marker() {
                if !seen.insert(marker.clone()) {
                    return Err(EngineError::MarkerTaken(marker.to_string()));
                }
            }
        }

        let board = Board::new(board_size)?;
        let players = PlayerMap::from_vec(players);
        let mut turn = TurnController::setup(&config);
        turn.start(&board, &players, &config);
        info!(board_size, players = players.player_count(), "game started");

        Ok(Self {
            rng: config.seed.map_or_else(GameRng::from_entropy, GameRng::new),
            board,
            players,
            turn,
            history: im::Vector::new(),
            config,
        })
    }

    /// Start a game from the setup roster and current board size.
    ///
    /// On failure the setup state is left untouched.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_setup()?;
        *self = Self::start_game(
            self.players.as_slice().to_vec(),
            self.board.size(),
            self.config.clone(),
        )?;
        Ok(())
    }

    fn ensure_setup(&self) -> Result<()> {
        if self.turn.phase == Phase::Setup {
            Ok(())
        } else {
            Err(EngineError::GameInProgress)
        }
    }

    fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))
    }

    /// Record `player`'s marker choice.
    ///
    /// Markers are unique per game, including the default marker a computer
    /// seat plays with.
    #[instrument(skip(self))]
    pub fn choose_marker(&mut self, player: PlayerId, marker: Marker) -> Result<()> {
        self.ensure_setup()?;
        let taken = self
            .players
            .iter()
            .any(|(id, p)| id != player && p.claimed_marker() == Some(&marker));
        if taken {
            return Err(EngineError::MarkerTaken(marker.to_string()));
        }
        self.seat_mut(player)?.chosen_marker = Some(marker);
        Ok(())
    }

    /// Hand a seat to the computer or back to a human.
    pub fn set_computer_controlled(&mut self, player: PlayerId, computer: bool) -> Result<()> {
        self.ensure_setup()?;
        self.seat_mut(player)?.computer_controlled = computer;
        Ok(())
    }

    pub fn rename_player(&mut self, player: PlayerId, name: impl Into<String>) -> Result<()> {
        self.ensure_setup()?;
        self.seat_mut(player)?.name = name.into();
        Ok(())
    }

    /// Grow the board by `by` cells per side before the game starts.
    ///
    /// The new board is empty. Fails with `GameInProgress` outside setup and
    /// `InvalidExtension` unless `by > 0` and the new size lies above the
    /// configured minimum and within the configured maximum.
    #[instrument(skip(self))]
    pub fn extend_board(&mut self, by: usize) -> Result<usize> {
        self.ensure_setup()?;
        self.board = self
            .board
            .extend(by, self.config.min_board_size, self.config.max_board_size)?;
        info!(size = self.board.size(), "board extended");
        Ok(self.board.size())
    }
}
