//! Player identification, markers, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Ids are assigned by
//! seat order when a game starts and stay stable for its lifetime.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Seat data: display name, marker, move count, and whether the seat is
//! computer-controlled.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier, 0-based in turn order.
///
/// `Display` is 1-based to match the default seat names, so `PlayerId(0)`
/// prints as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Position in the seat vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", u16::from(self.0) + 1)
    }
}

/// Opaque display glyph supplied by the presentation layer.
///
/// The engine compares markers for equality and never looks inside them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(String);

impl Marker {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat id; reassigned by position when a game starts.
    pub id: PlayerId,

    /// Display name (opaque to the engine).
    pub name: String,

    /// Marker shown until the player picks one.
    pub default_marker: Marker,

    /// Marker the player picked during setup.
    pub chosen_marker: Option<Marker>,

    /// Successful placements this game.
    pub move_count: u32,

    /// Seat is played by the heuristic selector.
    pub computer_controlled: bool,
}

impl Player {
    /// Create a human player with no marker chosen yet.
    pub fn human(id: PlayerId, name: impl Into<String>, default_marker: Marker) -> Self {
        Self {
            id,
            name: name.into(),
            default_marker,
            chosen_marker: None,
            move_count: 0,
            computer_controlled: false,
        }
    }

    /// Create a computer-controlled player.
    pub fn computer(id: PlayerId, name: impl Into<String>, default_marker: Marker) -> Self {
        Self {
            computer_controlled: true,
            ..Self::human(id, name, default_marker)
        }
    }

    /// Set the chosen marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.chosen_marker = Some(marker);
        self
    }

    /// Marker to render: the chosen one, else the default.
    #[must_use]
    pub fn display_marker(&self) -> &Marker {
        self.chosen_marker.as_ref().unwrap_or(&self.default_marker)
    }

    /// Marker this seat holds against others: its chosen one, or for a
    /// computer seat its default. A human seat without a choice holds none.
    #[must_use]
    pub fn claimed_marker(&self) -> Option<&Marker> {
        match (&self.chosen_marker, self.computer_controlled) {
            (Some(marker), _) => Some(marker),
            (None, true) => Some(&self.default_marker),
            (None, false) => None,
        }
    }

    /// Whether this seat may start a game. Computer seats need no choice.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.computer_controlled || self.chosen_marker.is_some()
    }
}

/// Seat-ordered per-player values, indexed by `PlayerId`.
///
/// Never empty once a game exists; callers validate the seat count before
/// building one.
///
/// ```
/// use gomoku_arena::core::{PlayerId, PlayerMap};
///
/// let mut moves = PlayerMap::from_vec(vec![0u32; 3]);
/// moves[PlayerId::new(1)] += 1;
/// assert_eq!(moves.as_slice(), &[0, 1, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    pub fn from_vec(seats: Vec<T>) -> Self {
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Value for `player`, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.seats.get_mut(player.index())
    }

    /// `(PlayerId, &T)` in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, value)| (PlayerId::new(seat as u8), value))
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.seats
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}
