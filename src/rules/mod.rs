//! Game rules: turn controller, move resolver, and game state.
//!
//! `GameState` is the entry point for the presentation layer:
//! - setup: `new`, `choose_marker`, `set_computer_controlled`,
//!   `extend_board`, `start` / `start_game`
//! - play: `place_marker`, `tick`, `pause`, `resume`, `play_computer_turn`
//! - any phase: `reset`, `snapshot`
//!
//! The board is written only by the resolver. Phase, outcome, the current
//! seat, and every timer are owned by the turn controller.

pub mod clock;
pub mod controller;
pub mod resolver;
pub mod setup;
pub mod state;

pub use clock::{TurnClock, TurnToken};
pub use controller::{ComputerPlay, TickResult};
pub use resolver::{MoveOutcome, Resolution};
pub use state::{GameSnapshot, GameState, MoveRecord, MoveSource, Outcome, Phase};
