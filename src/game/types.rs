//! Core domain types for tic-tac-toe.

use super::action::{Coord, MoveError};
use serde::{Deserialize, Serialize};

/// Marker identifying one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The `X` marker.
    X,
    /// The `O` marker.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell claimed by a player.
    Occupied(Marker),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major. The engine is the sole mutator; move
/// sources and renderers only ever see a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Reads the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if row or column is not in `[0,2]`.
    pub fn get(&self, coord: Coord) -> Result<Cell, MoveError> {
        if coord.row > 2 || coord.col > 2 {
            return Err(MoveError::OutOfRange(coord));
        }
        Ok(self.cells[coord.index()])
    }

    /// Claims the cell at the given coordinates for `marker`.
    ///
    /// The board is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` for invalid coordinates and
    /// `MoveError::CellOccupied` if the cell already holds a marker.
    pub fn set(&mut self, coord: Coord, marker: Marker) -> Result<(), MoveError> {
        match self.get(coord)? {
            Cell::Empty => {
                self.cells[coord.index()] = Cell::Occupied(marker);
                Ok(())
            }
            Cell::Occupied(_) => Err(MoveError::CellOccupied(coord)),
        }
    }

    /// Checks if the cell at the given coordinates is empty.
    ///
    /// Out-of-range coordinates are not empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(Cell::Empty))
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut open = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row * 3 + col] == Cell::Empty {
                    open.push(Coord::new(row, col));
                }
            }
        }
        open
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
