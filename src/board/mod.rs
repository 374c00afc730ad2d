//! The board and the line scanner.
//!
//! - `grid`: `Board`, `Cell`, `Coord`. Pure data with bounds-checked
//!   placement.
//! - `scan`: run lengths through a probe cell, shared by win detection and
//!   the heuristic selector.

pub mod grid;
pub mod scan;

pub use grid::{Board, Cell, Coord, MAX_BOARD_SIZE};
pub use scan::{consecutive_run, is_winning, winning_line, Orientation, Probe, WIN_LENGTH};
