//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the game is drawn: every cell occupied and no winner.
///
/// A full board with a winning line is a win, not a draw - the winner
/// check takes precedence.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
