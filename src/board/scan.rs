//! Line scanning: consecutive-run lengths through a probe cell.
//!
//! A probe treats its own cell as occupied by the probing player whatever
//! the cell actually holds, so the same code checks an applied move and
//! scores a hypothetical one without copying the board. Each direction
//! walks at most `WIN_LENGTH - 1` steps, so a probe is O(1) in board size.

use smallvec::SmallVec;

use super::grid::{Board, Coord};
use crate::core::PlayerId;

/// Run length that wins the game.
pub const WIN_LENGTH: usize = 5;

const REACH: isize = WIN_LENGTH as isize - 1;

/// The four line orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Forward step as (row_delta, col_delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }
}

/// Read-only view of a board with one cell assumed taken by `player`.
#[derive(Clone, Copy, Debug)]
pub struct Probe<'a> {
    board: &'a Board,
    at: Coord,
    player: PlayerId,
}

impl<'a> Probe<'a> {
    #[must_use]
    pub fn new(board: &'a Board, at: Coord, player: PlayerId) -> Self {
        Self { board, at, player }
    }

    /// Cells of `player` contiguous with the probe going `sign` along
    /// `orientation`, nearest first.
    fn walk(&self, orientation: Orientation, sign: isize) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = orientation.delta();
        (1..=REACH)
            .map(move |step| self.at.offset(dr * sign, dc * sign, step, self.board.size()))
            .take_while(move |cell| {
                cell.is_some_and(|c| self.board.occupant_at(c) == Some(self.player))
            })
            .flatten()
    }

    /// Run length through the probe along one orientation.
    #[must_use]
    pub fn run(&self, orientation: Orientation) -> usize {
        1 + self.walk(orientation, 1).count() + self.walk(orientation, -1).count()
    }

    /// Longest run through the probe over `orientations`.
    #[must_use]
    pub fn longest(&self, orientations: &[Orientation]) -> usize {
        orientations
            .iter()
            .map(|&o| self.run(o))
            .max()
            .unwrap_or(1)
    }

    /// Run lengths in `Orientation::ALL` order.
    #[must_use]
    pub fn runs(&self) -> SmallVec<[usize; 4]> {
        Orientation::ALL.iter().map(|&o| self.run(o)).collect()
    }

    /// Cells of the first winning run through the probe, ordered along the
    /// line, or `None` if no orientation reaches `WIN_LENGTH`.
    #[must_use]
    pub fn winning_line(&self) -> Option<SmallVec<[Coord; 9]>> {
        Orientation::ALL.iter().find_map(|&o| {
            if self.run(o) < WIN_LENGTH {
                return None;
            }
            let mut backward: SmallVec<[Coord; 9]> = self.walk(o, -1).collect();
            backward.reverse();
            backward.push(self.at);
            backward.extend(self.walk(o, 1));
            Some(backward)
        })
    }
}

/// Longest run of `player` through `at` over `orientations`, counting `at`
/// as occupied by `player`.
#[must_use]
pub fn consecutive_run(
    board: &Board,
    at: Coord,
    player: PlayerId,
    orientations: &[Orientation],
) -> usize {
    Probe::new(board, at, player).longest(orientations)
}

/// Whether `player` holding `at` completes five in a row.
#[must_use]
pub fn is_winning(board: &Board, at: Coord, player: PlayerId) -> bool {
    consecutive_run(board, at, player, &Orientation::ALL) >= WIN_LENGTH
}

/// Cells of the winning run through `at`, if any.
#[must_use]
pub fn winning_line(board: &Board, at: Coord, player: PlayerId) -> Option<SmallVec<[Coord; 9]>> {
    Probe::new(board, at, player).winning_line()
}
