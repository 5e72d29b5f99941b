//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects: they can be validated
//! before application, recorded for history, and logged for replay.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// A pair of board coordinates, row then column.
///
/// Legal values are in `[0,2]`; the board checks range, not the
/// constructor, so out-of-range input can be surfaced as a
/// [`MoveError`] rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate pair.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into the board's cell array.
    ///
    /// Only meaningful for in-range coordinates.
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

/// A move: a player claiming a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{marker} -> {coord}")]
pub struct Move {
    /// The marker making the move.
    pub marker: Marker,
    /// The claimed cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, coord: Coord) -> Self {
        Self { marker, coord }
    }
}

/// Error raised when validating a move against the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 board.
    #[display("the spot {_0} is off the board")]
    OutOfRange(Coord),

    /// The target cell already holds a marker.
    #[display("the spot {_0} is already taken")]
    CellOccupied(Coord),

    /// A move was requested after the game reached a terminal state.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
