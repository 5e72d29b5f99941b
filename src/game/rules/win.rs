//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the 3 rows, 3 columns, and 2 diagonals in that fixed order and
/// returns the marker of the first line fully occupied by one player.
/// The board is not validated for reachability: a malformed board with
/// lines for both markers still yields the first match by scan order.
#[instrument]
pub fn winner(board: &Board) -> Option<Marker> {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
        [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
        [0, 4, 8], [2, 4, 6],            // Diagonals
    ];

    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(marker) = cells[a]
            && cells[a] == cells[b]
            && cells[b] == cells[c]
        {
            return Some(marker);
        }
    }

    None
}
