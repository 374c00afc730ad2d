//! Engine configuration.
//!
//! Board sizing, countdown timings, the computer's grace period, pause
//! behavior, and the timeout RNG seed. Defaults reproduce the classic
//! three-seat game on a 12x12 board.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::board::MAX_BOARD_SIZE;
use super::player::{Marker, Player, PlayerId};

/// Default seat markers, in seat order.
pub const DEFAULT_MARKERS: [&str; 3] = ["🔴", "🔵", "🟢"];

/// How the countdown behaves when a paused game resumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumePolicy {
    /// Restart the turn's full `speed_seconds`.
    #[default]
    Restart,
    /// Continue from the `remaining_seconds` held at pause time.
    Preserve,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board size used by a fresh setup (default: 12).
    pub board_size: usize,

    /// Smallest playable board. Extension must produce a size strictly
    /// greater than this.
    pub min_board_size: usize,

    /// Largest board a setup or extension may produce (default: 64).
    pub max_board_size: usize,

    /// Turn length while the board is less than `fast_fill_ratio` full.
    pub slow_turn_seconds: u32,

    /// Turn length once the board is at least `fast_fill_ratio` full.
    pub fast_turn_seconds: u32,

    /// Fill ratio at which turns switch to `fast_turn_seconds`.
    pub fast_fill_ratio: f64,

    /// Ticks the computer "thinks" before its move is applied.
    pub computer_think_ticks: u32,

    /// Countdown behavior on resume.
    pub resume_policy: ResumePolicy,

    /// Whether the default roster's last seat is computer-controlled.
    pub computer_opponent: bool,

    /// Seed for timeout-forced moves. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 12,
            min_board_size: 12,
            max_board_size: 64,
            slow_turn_seconds: 20,
            fast_turn_seconds: 5,
            fast_fill_ratio: 0.5,
            computer_think_ticks: 2,
            resume_policy: ResumePolicy::Restart,
            computer_opponent: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the timeout RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the slow and fast turn lengths.
    #[must_use]
    pub fn with_turn_seconds(mut self, slow: u32, fast: u32) -> Self {
        self.slow_turn_seconds = slow;
        self.fast_turn_seconds = fast;
        self
    }

    /// Set the computer's grace period in ticks.
    #[must_use]
    pub fn with_think_ticks(mut self, ticks: u32) -> Self {
        self.computer_think_ticks = ticks;
        self
    }

    /// Set the resume policy.
    #[must_use]
    pub fn with_resume_policy(mut self, policy: ResumePolicy) -> Self {
        self.resume_policy = policy;
        self
    }

    /// Make the default roster all-human or keep a computer seat.
    #[must_use]
    pub fn with_computer_opponent(mut self, enabled: bool) -> Self {
        self.computer_opponent = enabled;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.min_board_size == 0 {
            return Err(EngineError::InvalidConfig("min_board_size must be positive".into()));
        }
        if self.max_board_size < self.min_board_size || self.max_board_size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "max_board_size {} not in [{}, {}]",
                self.max_board_size, self.min_board_size, MAX_BOARD_SIZE
            )));
        }
        if !(self.min_board_size..=self.max_board_size).contains(&self.board_size) {
            return Err(EngineError::InvalidSize(self.board_size));
        }
        if self.slow_turn_seconds == 0 || self.fast_turn_seconds == 0 {
            return Err(EngineError::InvalidConfig("turn seconds must be positive".into()));
        }
        if !(self.fast_fill_ratio > 0.0 && self.fast_fill_ratio <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "fast_fill_ratio {} not in (0, 1]",
                self.fast_fill_ratio
            )));
        }
        Ok(())
    }

    /// Default three-seat roster with no markers chosen.
    #[must_use]
    pub fn default_players(&self) -> Vec<Player> {
        let last = DEFAULT_MARKERS.len() - 1;
        DEFAULT_MARKERS
            .iter()
            .enumerate()
            .map(|(i, glyph)| {
                let id = PlayerId::new(i as u8);
                let name = format!("Player {}", i + 1);
                if self.computer_opponent && i == last {
                    Player::computer(id, name, Marker::new(*glyph))
                } else {
                    Player::human(id, name, Marker::new(*glyph))
                }
            })
            .collect()
    }
}
