//! Core engine types: players, markers, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{EngineConfig, ResumePolicy, DEFAULT_MARKERS};
pub use error::{EngineError, Result};
pub use player::{Marker, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
