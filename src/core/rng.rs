//! Random cell selection for timeout-forced moves.
//!
//! The only randomness in a game is the cell picked when a human player's
//! countdown expires. A fixed seed makes whole games replayable.
//!
//! ```
//! use gomoku_arena::{Board, GameRng};
//!
//! let board = Board::new(12).unwrap();
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.pick_empty(&board), b.pick_empty(&board));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Coord};

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed drawn from the thread RNG, for unseeded configs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly random empty cell, or `None` on a full board.
    pub fn pick_empty(&mut self, board: &Board) -> Option<Coord> {
        board.empty_cells().choose(&mut self.inner).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_same_seed_same_cells() {
        let board = Board::new(12).unwrap();
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(a.pick_empty(&board), b.pick_empty(&board));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let board = Board::new(12).unwrap();
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let seq_a: Vec<_> = (0..10).map(|_| a.pick_empty(&board)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.pick_empty(&board)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_picks_only_empty_cells() {
        let mut board = Board::new(3).unwrap();
        for i in 0..8 {
            board.place(Coord::new(i / 3, i % 3), PlayerId::new(0)).unwrap();
        }
        let mut rng = GameRng::new(5);
        assert_eq!(rng.pick_empty(&board), Some(Coord::new(2, 2)));

        board.place(Coord::new(2, 2), PlayerId::new(1)).unwrap();
        assert_eq!(rng.pick_empty(&board), None);
    }
}
