//! Turn controller: phase transitions, seat rotation, and timers.
//!
//! ## States
//!
//! `Setup → Playing ⇄ Paused → Over`. Pausing and resuming never touch the
//! board or the seat order.
//!
//! ## Ticks
//!
//! `tick()` advances one second. On a human turn it counts the countdown
//! down and, at zero, plays a uniformly random empty cell for that player.
//! On a computer turn the countdown is suppressed and the tick feeds the
//! computer's grace-period timer instead, which applies the heuristic
//! selector's move when it fires.

use tracing::{debug, info, instrument};

use super::clock::{TurnClock, TurnToken};
use super::resolver::MoveOutcome;
use super::state::{GameState, MoveSource, Outcome, Phase, TurnController};
use crate::ai::{HeuristicSelector, Selection, ThinkTimer};
use crate::board::Board;
use crate::core::error::{EngineError, Result};
use crate::core::{EngineConfig, Player, PlayerMap, ResumePolicy};

/// What a single tick did.
#[derive(Clone, Debug, PartialEq)]
pub enum TickResult {
    /// Not playing, or paused. Nothing happened.
    Idle,
    /// Human countdown still running.
    Counting { remaining: u32 },
    /// Computer grace period still running.
    Thinking { remaining: u32 },
    /// Countdown expired and a random move was forced.
    TimedOut(MoveOutcome),
    /// Computer grace period fired and its move was applied.
    ComputerMoved(MoveOutcome),
    /// No empty cell was left to play; the game is a draw.
    ///
    /// `resolve` already ends the game on the move that fills the board, so
    /// this only reports a full board reached some other way.
    Drawn,
}

impl TickResult {
    /// Move applied by this tick, if any.
    #[must_use]
    pub fn applied_move(&self) -> Option<&MoveOutcome> {
        match self {
            TickResult::TimedOut(outcome) | TickResult::ComputerMoved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether the countdown forced a move.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, TickResult::TimedOut(_))
    }
}

/// Result of asking the computer seat to move.
#[derive(Clone, Debug, PartialEq)]
pub enum ComputerPlay {
    Moved(MoveOutcome),
    /// No empty cell was left; the game is now a draw.
    Drawn,
    /// Token no longer current, game not playing, or not a computer turn.
    Stale,
}

impl TurnController {
    pub(crate) fn setup(config: &EngineConfig) -> Self {
        let speed_seconds = config.slow_turn_seconds;
        Self {
            current: 0,
            outcome: Outcome::InProgress,
            phase: Phase::Setup,
            clock: TurnClock {
                remaining_seconds: speed_seconds,
                speed_seconds,
            },
            token: TurnToken::default(),
            think: ThinkTimer::default(),
        }
    }

    /// Enter `Playing` with the first seat to move.
    pub(crate) fn start(&mut self, board: &Board, players: &PlayerMap<Player>, config: &EngineConfig) {
        self.current = 0;
        self.outcome = Outcome::InProgress;
        self.phase = Phase::Playing;
        self.begin_turn(board, players, config);
    }

    /// Reset the clock and arm timers for the current seat.
    fn begin_turn(&mut self, board: &Board, players: &PlayerMap<Player>, config: &EngineConfig) {
        self.clock = TurnClock::for_board(board, config);
        self.token = self.token.next();
        self.arm_think(players, config);
        debug!(
            seat = self.current,
            speed = self.clock.speed_seconds,
            token = self.token.0,
            "turn started"
        );
    }

    fn arm_think(&mut self, players: &PlayerMap<Player>, config: &EngineConfig) {
        self.think.disarm();
        if players.as_slice()[self.current].computer_controlled {
            self.think.arm(self.token, config.computer_think_ticks);
        }
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance(&mut self, board: &Board, players: &PlayerMap<Player>, config: &EngineConfig) {
        self.current = (self.current + 1) % players.player_count();
        self.begin_turn(board, players, config);
    }

    /// End the game. Every armed timer goes stale.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.phase = Phase::Over;
        self.token = self.token.next();
        self.think.disarm();
    }

    pub(crate) fn pause(&mut self) -> Result<()> {
        match self.phase {
            Phase::Paused => Ok(()),
            Phase::Playing => {
                self.phase = Phase::Paused;
                self.token = self.token.next();
                self.think.disarm();
                Ok(())
            }
            Phase::Setup | Phase::Over => Err(EngineError::NotPlaying),
        }
    }

    pub(crate) fn resume(&mut self, players: &PlayerMap<Player>, config: &EngineConfig) -> Result<()> {
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Paused => {
                self.phase = Phase::Playing;
                if config.resume_policy == ResumePolicy::Restart {
                    self.clock.restart();
                }
                self.token = self.token.next();
                self.arm_think(players, config);
                Ok(())
            }
            Phase::Setup | Phase::Over => Err(EngineError::NotPlaying),
        }
    }
}

impl GameState {
    /// Advance the game by one second.
    #[instrument(skip(self), fields(seat = self.turn.current))]
    pub fn tick(&mut self) -> Result<TickResult> {
        if self.turn.phase != Phase::Playing {
            return Ok(TickResult::Idle);
        }

        if self.active_player().computer_controlled {
            // An unarmed timer on a computer turn moves now rather than waiting
            // on a timer that will never fire.
            let fired = match self.turn.think.pending() {
                Some(_) => self.turn.think.tick(self.turn.token),
                None => true,
            };
            if !fired {
                let remaining = self.turn.think.remaining().unwrap_or(1);
                return Ok(TickResult::Thinking { remaining });
            }
            return Ok(match self.computer_move()? {
                ComputerPlay::Moved(outcome) => TickResult::ComputerMoved(outcome),
                ComputerPlay::Drawn => TickResult::Drawn,
                ComputerPlay::Stale => TickResult::Idle,
            });
        }

        if !self.turn.clock.tick() {
            return Ok(TickResult::Counting {
                remaining: self.turn.clock.remaining_seconds,
            });
        }

        match self.rng.pick_empty(&self.board) {
            Some(at) => {
                debug!(%at, "countdown expired, forcing move");
                let outcome = self.resolve(at, MoveSource::Timeout)?;
                Ok(TickResult::TimedOut(outcome))
            }
            None => {
                self.declare_draw();
                Ok(TickResult::Drawn)
            }
        }
    }

    /// Token of the armed computer timer, if a computer move is pending.
    #[must_use]
    pub fn pending_computer_move(&self) -> Option<TurnToken> {
        self.turn.think.pending()
    }

    /// Apply the computer's move now, if `token` is still current.
    ///
    /// For hosts that run their own grace-period timer: pass the token from
    /// `pending_computer_move()` when the timer fires. A stale token yields
    /// `ComputerPlay::Stale` and changes nothing.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self, token: TurnToken) -> Result<ComputerPlay> {
        if token != self.turn.token || self.turn.phase != Phase::Playing {
            return Ok(ComputerPlay::Stale);
        }
        if !self.active_player().computer_controlled {
            return Ok(ComputerPlay::Stale);
        }
        self.turn.think.disarm();
        self.computer_move()
    }

    fn computer_move(&mut self) -> Result<ComputerPlay> {
        let player = self.active_player().id;
        let selector = HeuristicSelector::for_seat(&self.players, player);
        match selector.select(&self.board) {
            Selection::Place { at, priority } => {
                debug!(%player, %at, ?priority, "computer move");
                let outcome = self.resolve(at, MoveSource::Computer)?;
                Ok(ComputerPlay::Moved(outcome))
            }
            Selection::Draw => {
                self.declare_draw();
                Ok(ComputerPlay::Drawn)
            }
        }
    }

    pub(crate) fn declare_draw(&mut self) {
        info!(moves = self.history.len(), "game drawn");
        self.turn.finish(Outcome::Draw);
    }

    /// Suspend the countdown and every pending computer move.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<()> {
        self.turn.pause()?;
        info!("game paused");
        Ok(())
    }

    /// Resume a paused game. The clock restarts or continues per the
    /// configured `ResumePolicy`.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<()> {
        self.turn.resume(&self.players, &self.config)?;
        info!(remaining = self.turn.clock.remaining_seconds, "game resumed");
        Ok(())
    }

    /// Pause if playing, resume if paused.
    pub fn toggle_pause(&mut self) -> Result<()> {
        if self.turn.phase == Phase::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;
    use crate::core::{Marker, PlayerId};

    fn humans(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| {
                Player::human(PlayerId::new(i as u8), format!("P{i}"), Marker::new("x"))
                    .with_marker(Marker::new(format!("m{i}")))
            })
            .collect()
    }

    fn config() -> EngineConfig {
        EngineConfig::default().with_seed(42).with_turn_seconds(3, 1)
    }

    fn started(players: Vec<Player>) -> GameState {
        GameState::start_game(players, 12, config()).unwrap()
    }

    #[test]
    fn test_tick_counts_down() {
        let mut game = started(humans(2));
        assert_eq!(game.clock().remaining_seconds, 3);

        assert_eq!(game.tick().unwrap(), TickResult::Counting { remaining: 2 });
        assert_eq!(game.tick().unwrap(), TickResult::Counting { remaining: 1 });
    }

    #[test]
    fn test_timeout_forces_random_move() {
        let mut game = started(humans(2));
        game.tick().unwrap();
        game.tick().unwrap();
        let result = game.tick().unwrap();

        let outcome = result.applied_move().cloned().unwrap();
        assert!(result.is_timeout());
        assert_eq!(outcome.player, PlayerId::new(0));
        assert_eq!(outcome.source, MoveSource::Timeout);
        assert_eq!(game.board().occupant_at(outcome.at), Some(PlayerId::new(0)));
        assert_eq!(game.current_player_index(), 1);
        assert_eq!(game.clock().remaining_seconds, 3);
    }

    #[test]
    fn test_timeout_is_reproducible_with_seed() {
        let run = || {
            let mut game = started(humans(2));
            for _ in 0..9 {
                game.tick().unwrap();
            }
            game.history().iter().map(|m| m.at).collect::<Vec<_>>()
        };
        let first = run();
        assert_eq!(first.len(), 3);
        assert_eq!(first, run());
    }

    #[test]
    fn test_tick_idle_outside_play() {
        let mut game = GameState::new(config()).unwrap();
        assert_eq!(game.tick().unwrap(), TickResult::Idle);

        let mut game = started(humans(2));
        game.pause().unwrap();
        assert_eq!(game.tick().unwrap(), TickResult::Idle);
        assert_eq!(game.clock().remaining_seconds, 3);
    }

    #[test]
    fn test_pause_resume_restarts_clock() {
        let mut game = started(humans(2));
        game.tick().unwrap();
        game.tick().unwrap();
        assert_eq!(game.clock().remaining_seconds, 1);

        game.pause().unwrap();
        assert_eq!(game.phase(), Phase::Paused);
        assert_eq!(game.clock().remaining_seconds, 1);

        game.resume().unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.clock().remaining_seconds, 3);
    }

    #[test]
    fn test_pause_resume_preserve_policy() {
        let config = config().with_resume_policy(ResumePolicy::Preserve);
        let mut game = GameState::start_game(humans(2), 12, config).unwrap();
        game.tick().unwrap();

        game.toggle_pause().unwrap();
        game.toggle_pause().unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.clock().remaining_seconds, 2);
    }

    #[test]
    fn test_pause_requires_game() {
        let mut game = GameState::new(config()).unwrap();
        assert_eq!(game.pause(), Err(EngineError::NotPlaying));
        assert_eq!(game.resume(), Err(EngineError::NotPlaying));
    }

    #[test]
    fn test_computer_tick_suppresses_countdown() {
        let mut players = humans(1);
        players.push(Player::computer(PlayerId::new(1), "CPU", Marker::new("c")));
        let config = config().with_think_ticks(2);
        let mut game = GameState::start_game(players, 12, config).unwrap();

        game.place_marker(Coord::new(0, 0)).unwrap();
        assert!(game.pending_computer_move().is_some());

        assert_eq!(game.tick().unwrap(), TickResult::Thinking { remaining: 1 });
        assert_eq!(game.clock().remaining_seconds, 3);

        let result = game.tick().unwrap();
        let outcome = result.applied_move().cloned().unwrap();
        assert_eq!(outcome.source, MoveSource::Computer);
        assert_eq!(outcome.player, PlayerId::new(1));
        assert_eq!(game.current_player_index(), 0);
        assert!(game.pending_computer_move().is_none());
    }

    /// Replace the board with a full 1x1 one while the game is playing.
    fn fill_board(game: &mut GameState) {
        let mut board = Board::new(1).unwrap();
        board.place(Coord::new(0, 0), PlayerId::new(0)).unwrap();
        game.board = board;
    }

    #[test]
    fn test_timeout_on_full_board_declares_draw() {
        let mut game = started(humans(2));
        fill_board(&mut game);

        assert!(matches!(game.tick().unwrap(), TickResult::Counting { .. }));
        assert!(matches!(game.tick().unwrap(), TickResult::Counting { .. }));
        assert_eq!(game.tick().unwrap(), TickResult::Drawn);
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.phase(), Phase::Over);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_computer_on_full_board_declares_draw() {
        let mut players = humans(1);
        players.push(Player::computer(PlayerId::new(1), "CPU", Marker::new("c")));
        let mut game = GameState::start_game(players, 12, config()).unwrap();
        game.place_marker(Coord::new(0, 0)).unwrap();
        fill_board(&mut game);

        let token = game.pending_computer_move().unwrap();
        assert_eq!(game.play_computer_turn(token).unwrap(), ComputerPlay::Drawn);
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.pending_computer_move().is_none());
    }

    #[test]
    fn test_unarmed_computer_turn_moves_on_next_tick() {
        let mut players = humans(1);
        players.push(Player::computer(PlayerId::new(1), "CPU", Marker::new("c")));
        let mut game = GameState::start_game(players, 12, config().with_think_ticks(5)).unwrap();
        game.place_marker(Coord::new(0, 0)).unwrap();
        game.turn.think.disarm();

        let result = game.tick().unwrap();
        assert_eq!(result.applied_move().map(|m| m.source), Some(MoveSource::Computer));
        assert_eq!(game.current_player_index(), 0);
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut players = humans(1);
        players.push(Player::computer(PlayerId::new(1), "CPU", Marker::new("c")));
        let mut game = GameState::start_game(players, 12, config()).unwrap();
        game.place_marker(Coord::new(0, 0)).unwrap();

        let token = game.pending_computer_move().unwrap();
        game.pause().unwrap();
        game.resume().unwrap();

        let before = game.board().clone();
        assert_eq!(game.play_computer_turn(token).unwrap(), ComputerPlay::Stale);
        assert_eq!(game.board(), &before);

        let fresh = game.pending_computer_move().unwrap();
        assert!(matches!(game.play_computer_turn(fresh).unwrap(), ComputerPlay::Moved(_)));
    }
}
