//! # gomoku-arena
//!
//! Engine for an N-player five-in-a-row game with a per-turn countdown and
//! an optional heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: seats rotate through any number of players; the
//!    computer seat is a per-player flag, never a fixed index.
//!
//! 2. **Deterministic Timing**: there are no wall-clock timers inside the
//!    engine. The host calls `tick()` once per second and every countdown,
//!    forced move, and computer grace period advances from that.
//!
//! 3. **Single Writer**: only the move resolver writes the board, and only
//!    the turn controller changes phase, outcome, and the current seat.
//!
//! ## Modules
//!
//! - `core`: player ids, markers, RNG, configuration, errors
//! - `board`: the grid and the line scanner
//! - `rules`: turn controller, move resolver, `GameState`
//! - `ai`: heuristic move selector and its grace-period timer
//!
//! ## Example
//!
//! ```
//! use gomoku_arena::{Coord, EngineConfig, GameState, Marker, PlayerId, Resolution};
//!
//! let mut game = GameState::new(EngineConfig::default().with_seed(1)).unwrap();
//! game.choose_marker(PlayerId::new(0), Marker::new("🚀")).unwrap();
//! game.choose_marker(PlayerId::new(1), Marker::new("🍕")).unwrap();
//! game.start().unwrap();
//!
//! let outcome = game.place_marker(Coord::new(5, 5)).unwrap();
//! assert_eq!(outcome.resolution, Resolution::Continued);
//! assert_eq!(game.current_player_index(), 1);
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, GameRng, Marker, Player, PlayerId, PlayerMap, ResumePolicy,
    Result,
};

pub use crate::board::{consecutive_run, is_winning, Board, Cell, Coord, Orientation, Probe, WIN_LENGTH};

pub use crate::rules::{
    ComputerPlay, GameSnapshot, GameState, MoveOutcome, MoveRecord, MoveSource, Outcome, Phase, Resolution,
    TickResult, TurnClock, TurnToken,
};

pub use crate::ai::{HeuristicSelector, Priority, Selection, ThinkTimer};
