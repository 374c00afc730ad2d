//! One-shot grace-period timer for the computer player.

use serde::{Deserialize, Serialize};

use crate::rules::TurnToken;

/// Delay between a computer turn starting and its move being applied.
///
/// Armed with the token of the turn it belongs to. Ticking with any other
/// token disarms it without firing, so a timer left over from an earlier
/// turn or from before a pause never applies a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkTimer {
    armed: Option<(TurnToken, u32)>,
}

impl ThinkTimer {
    /// Arm for `token`, firing on the `ticks`-th tick (the first if zero).
    pub fn arm(&mut self, token: TurnToken, ticks: u32) {
        self.armed = Some((token, ticks.max(1)));
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Token the timer is armed for.
    #[must_use]
    pub fn pending(&self) -> Option<TurnToken> {
        self.armed.map(|(token, _)| token)
    }

    /// Ticks left before firing.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.armed.map(|(_, ticks)| ticks)
    }

    /// Advance one tick. Returns true exactly once, when the timer fires for
    /// `current`.
    pub fn tick(&mut self, current: TurnToken) -> bool {
        match self.armed {
            Some((token, _)) if token != current => {
                self.armed = None;
                false
            }
            Some((_, ticks)) if ticks <= 1 => {
                self.armed = None;
                true
            }
            Some((token, ticks)) => {
                self.armed = Some((token, ticks - 1));
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_ticks() {
        let token = TurnToken(3);
        let mut timer = ThinkTimer::default();
        timer.arm(token, 2);

        assert_eq!(timer.pending(), Some(token));
        assert!(!timer.tick(token));
        assert_eq!(timer.remaining(), Some(1));
        assert!(timer.tick(token));
        assert_eq!(timer.pending(), None);
        assert!(!timer.tick(token));
    }

    #[test]
    fn test_zero_ticks_fires_on_first_tick() {
        let mut timer = ThinkTimer::default();
        timer.arm(TurnToken(0), 0);
        assert!(timer.tick(TurnToken(0)));
    }

    #[test]
    fn test_stale_token_never_fires() {
        let mut timer = ThinkTimer::default();
        timer.arm(TurnToken(1), 1);

        assert!(!timer.tick(TurnToken(2)));
        assert_eq!(timer.pending(), None);
    }

    #[test]
    fn test_disarm() {
        let mut timer = ThinkTimer::default();
        timer.arm(TurnToken(1), 1);
        timer.disarm();
        assert!(!timer.tick(TurnToken(1)));
    }
}
