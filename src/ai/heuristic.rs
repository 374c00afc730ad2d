//! Priority-ladder move selection for computer-controlled seats.
//!
//! Every empty cell is scored once: the run the computer would make by
//! taking it, and the longest run any opponent would make there. The ladder
//! is then walked top to bottom; the first rung that any cell satisfies
//! wins, and within a rung the first cell in row-major order is taken.
//! If no rung matches, the cell nearest the board center is played.
//!
//! This is a one-ply greedy heuristic. It never looks past the current
//! board.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::{consecutive_run, Board, Coord, Orientation, WIN_LENGTH};
use crate::core::{Player, PlayerId, PlayerMap};

/// Ladder rung that chose a move, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Complete five for the computer.
    TakeWin,
    /// Occupy a cell where an opponent would complete five.
    BlockWin,
    /// Occupy a cell where an opponent would make four.
    BlockFour,
    /// Make four for the computer.
    BuildFour,
    /// Occupy a cell where an opponent would make three.
    BlockThree,
    /// Make three for the computer.
    BuildThree,
    /// Nothing urgent; play near the center.
    Center,
}

#[derive(Clone, Copy)]
enum Side {
    Own,
    Opponent,
}

const LADDER: [(Priority, Side, usize); 6] = [
    (Priority::TakeWin, Side::Own, WIN_LENGTH),
    (Priority::BlockWin, Side::Opponent, WIN_LENGTH),
    (Priority::BlockFour, Side::Opponent, 4),
    (Priority::BuildFour, Side::Own, 4),
    (Priority::BlockThree, Side::Opponent, 3),
    (Priority::BuildThree, Side::Own, 3),
];

/// What the selector decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Place { at: Coord, priority: Priority },
    /// No empty cell remains.
    Draw,
}

impl Selection {
    #[must_use]
    pub fn coord(&self) -> Option<Coord> {
        match self {
            Selection::Place { at, .. } => Some(*at),
            Selection::Draw => None,
        }
    }
}

struct Candidate {
    at: Coord,
    own: usize,
    threat: usize,
}

/// Heuristic selector for one computer seat.
#[derive(Clone, Debug)]
pub struct HeuristicSelector {
    player: PlayerId,
    opponents: SmallVec<[PlayerId; 4]>,
}

impl HeuristicSelector {
    pub fn new(player: PlayerId, opponents: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            player,
            opponents: opponents.into_iter().filter(|&p| p != player).collect(),
        }
    }

    /// Selector for `player`, treating every other seat as an opponent.
    pub fn for_seat(players: &PlayerMap<Player>, player: PlayerId) -> Self {
        Self::new(player, players.player_ids())
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    fn score(&self, board: &Board, at: Coord) -> Candidate {
        let own = consecutive_run(board, at, self.player, &Orientation::ALL);
        let threat = self
            .opponents
            .iter()
            .map(|&p| consecutive_run(board, at, p, &Orientation::ALL))
            .max()
            .unwrap_or(0);
        Candidate { at, own, threat }
    }

    /// Pick a move on `board`.
    pub fn select(&self, board: &Board) -> Selection {
        let candidates: Vec<Candidate> = board
            .empty_cells()
            .into_iter()
            .map(|at| self.score(board, at))
            .collect();

        if candidates.is_empty() {
            return Selection::Draw;
        }

        for (priority, side, threshold) in LADDER {
            let hit = candidates.iter().find(|c| match side {
                Side::Own => c.own >= threshold,
                Side::Opponent => c.threat >= threshold,
            });
            if let Some(c) = hit {
                debug!(player = %self.player, at = %c.at, ?priority, "selected move");
                return Selection::Place { at: c.at, priority };
            }
        }

        let size = board.size();
        let nearest = candidates
            .iter()
            .min_by_key(|c| center_distance(size, c.at))
            .map(|c| c.at);

        match nearest {
            Some(at) => {
                debug!(player = %self.player, %at, "selected center move");
                Selection::Place {
                    at,
                    priority: Priority::Center,
                }
            }
            None => Selection::Draw,
        }
    }
}

/// Manhattan distance to the geometric center, doubled so even sizes stay
/// integral.
fn center_distance(size: usize, at: Coord) -> usize {
    let span = size - 1;
    (2 * at.row).abs_diff(span) + (2 * at.col).abs_diff(span)
}
