//! Computer opponent.
//!
//! - `heuristic`: the priority ladder that picks one move per turn.
//! - `timer`: the cancellable grace period between a computer turn starting
//!   and its move landing.
//!
//! The decision itself is synchronous and deterministic for a given board;
//! only its timing is deferred.

pub mod heuristic;
pub mod timer;

pub use heuristic::{HeuristicSelector, Priority, Selection};
pub use timer::ThinkTimer;
