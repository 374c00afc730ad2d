//! Turn countdown and timer tokens.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::EngineConfig;

/// Per-turn countdown in whole seconds.
///
/// `speed_seconds` is recomputed from the board's fill ratio at the start of
/// every turn and `remaining_seconds` is reset to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    pub remaining_seconds: u32,
    pub speed_seconds: u32,
}

impl TurnClock {
    /// Turn length for a board at `fill_ratio`.
    #[must_use]
    pub fn speed_for(fill_ratio: f64, config: &EngineConfig) -> u32 {
        if fill_ratio >= config.fast_fill_ratio {
            config.fast_turn_seconds
        } else {
            config.slow_turn_seconds
        }
    }

    /// Fresh clock for a turn starting on `board`.
    #[must_use]
    pub fn for_board(board: &Board, config: &EngineConfig) -> Self {
        let speed_seconds = Self::speed_for(board.fill_ratio(), config);
        Self {
            remaining_seconds: speed_seconds,
            speed_seconds,
        }
    }

    /// Put the full turn length back on the clock.
    pub fn restart(&mut self) {
        self.remaining_seconds = self.speed_seconds;
    }

    /// Count down one second. Returns true when the clock reaches zero.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }
}

/// Identifies one arming of the turn timers.
///
/// A new token is issued whenever a turn begins, the game pauses or
/// resumes, or the game ends. A timer holding an older token is stale and
/// must never apply a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnToken(pub u64);

impl TurnToken {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
