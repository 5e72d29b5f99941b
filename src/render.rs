//! Text rendering for board snapshots.

use crate::game::{Board, Cell, Marker};

/// Renders the board as a four-line grid.
///
/// First a header of column indices, then one line per row with the
/// row index followed by the space-joined cells, blank for empty:
///
/// ```text
///   0 1 2
/// 0 X   O
/// 1   X
/// 2     O
/// ```
pub fn render(board: &Board) -> String {
    let mut out = String::from("  0 1 2\n");
    let cells = board.cells();
    for row in 0..3 {
        out.push_str(&row.to_string());
        for col in 0..3 {
            out.push(' ');
            out.push(match cells[row * 3 + col] {
                Cell::Empty => ' ',
                Cell::Occupied(Marker::X) => 'X',
                Cell::Occupied(Marker::O) => 'O',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Coord;

    #[test]
    fn test_empty_board() {
        assert_eq!(render(&Board::new()), "  0 1 2\n0      \n1      \n2      \n");
    }

    #[test]
    fn test_marked_board() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), Marker::X).unwrap();
        board.set(Coord::new(0, 2), Marker::O).unwrap();
        board.set(Coord::new(1, 1), Marker::X).unwrap();
        board.set(Coord::new(2, 2), Marker::O).unwrap();
        assert_eq!(render(&board), "  0 1 2\n0 X   O\n1   X  \n2     O\n");
    }

    #[test]
    fn test_four_lines() {
        assert_eq!(render(&Board::new()).lines().count(), 4);
    }
}
