//! Move resolver: the only path that writes the board.
//!
//! Preconditions are checked in order, each with its own error: the game
//! must be playing (`NotPlaying`), not paused (`Paused`), and the target
//! cell in bounds and empty (`OutOfBounds`, `CellOccupied`). Human input
//! additionally fails with `ComputerTurn` while a computer seat is to move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::state::{GameState, MoveRecord, MoveSource, Outcome, Phase};
use crate::board::{winning_line, Coord};
use crate::core::error::{EngineError, Result};
use crate::core::PlayerId;

/// What a move led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Turn passed to the next seat.
    Continued,
    /// The mover completed five in a row.
    Won,
    /// The move filled the last empty cell without winning.
    Draw,
}

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub at: Coord,
    pub source: MoveSource,
    pub resolution: Resolution,
    /// Mover's placements this game, including this one.
    pub move_count: u32,
    /// Cells of the completed run when `resolution` is `Won`.
    pub line: SmallVec<[Coord; 9]>,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.resolution == Resolution::Won
    }
}

impl GameState {
    /// Place the active human player's marker at `at`.
    #[instrument(skip(self))]
    pub fn place_marker(&mut self, at: Coord) -> Result<MoveOutcome> {
        self.ensure_playing()?;
        if self.active_player().computer_controlled {
            return Err(EngineError::ComputerTurn);
        }
        self.resolve(at, MoveSource::Human)
    }

    fn ensure_playing(&self) -> Result<()> {
        match self.turn.phase {
            Phase::Playing => Ok(()),
            Phase::Paused => Err(EngineError::Paused),
            Phase::Setup | Phase::Over => Err(EngineError::NotPlaying),
        }
    }

    /// Apply a move for the active seat and settle the turn.
    pub(crate) fn resolve(&mut self, at: Coord, source: MoveSource) -> Result<MoveOutcome> {
        self.ensure_playing()?;

        let player = self.active_player().id;
        self.board.place(at, player)?;

        let seat = &mut self.players[player];
        seat.move_count += 1;
        let move_count = seat.move_count;

        self.history.push_back(MoveRecord {
            number: self.history.len() as u32 + 1,
            player,
            at,
            source,
        });
        debug!(%player, %at, ?source, move_count, "move applied");

        let line = winning_line(&self.board, at, player);
        let resolution = if line.is_some() {
            info!(%player, %at, "game won");
            self.turn.finish(Outcome::Won(player));
            Resolution::Won
        } else if self.board.is_full() {
            self.declare_draw();
            Resolution::Draw
        } else {
            self.turn.advance(&self.board, &self.players, &self.config);
            Resolution::Continued
        };

        Ok(MoveOutcome {
            player,
            at,
            source,
            resolution,
            move_count,
            line: line.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, Marker, Player};

    fn two_humans() -> GameState {
        let players = (0..2)
            .map(|i| {
                Player::human(PlayerId::new(i), format!("P{i}"), Marker::new("x"))
                    .with_marker(Marker::new(format!("m{i}")))
            })
            .collect();
        GameState::start_game(players, 12, EngineConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_move_advances_turn() {
        let mut game = two_humans();
        let outcome = game.place_marker(Coord::new(4, 4)).unwrap();

        assert_eq!(outcome.resolution, Resolution::Continued);
        assert_eq!(outcome.move_count, 1);
        assert!(outcome.line.is_empty());
        assert_eq!(game.current_player_index(), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].source, MoveSource::Human);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = two_humans();
        game.place_marker(Coord::new(4, 4)).unwrap();

        let err = game.place_marker(Coord::new(4, 4)).unwrap_err();
        assert_eq!(err, EngineError::CellOccupied { row: 4, col: 4 });
        assert_eq!(game.current_player_index(), 1);
        assert_eq!(game.players()[PlayerId::new(1)].move_count, 0);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = two_humans();
        let err = game.place_marker(Coord::new(0, 12)).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { .. }));
    }

    #[test]
    fn test_phase_checks_come_first() {
        let mut game = two_humans();
        game.place_marker(Coord::new(4, 4)).unwrap();

        game.pause().unwrap();
        assert_eq!(game.place_marker(Coord::new(4, 4)), Err(EngineError::Paused));

        let mut setup = GameState::new(EngineConfig::default()).unwrap();
        assert_eq!(setup.place_marker(Coord::new(0, 0)), Err(EngineError::NotPlaying));
    }

    #[test]
    fn test_win_stops_turn_rotation() {
        let mut game = two_humans();
        for col in 0..4 {
            game.place_marker(Coord::new(0, col)).unwrap();
            game.place_marker(Coord::new(1, col)).unwrap();
        }
        let outcome = game.place_marker(Coord::new(0, 4)).unwrap();

        assert!(outcome.is_win());
        assert_eq!(outcome.move_count, 5);
        assert_eq!(outcome.line.len(), 5);
        assert_eq!(game.outcome(), Outcome::Won(PlayerId::new(0)));
        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.place_marker(Coord::new(5, 5)), Err(EngineError::NotPlaying));
    }
}
