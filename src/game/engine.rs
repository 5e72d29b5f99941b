//! Turn state machine for tic-tac-toe.
//!
//! The engine owns the board and two seats tagged current/other. Each
//! turn it asks the current seat's move source for coordinates,
//! validates them, applies the move, and re-evaluates the rules. Move
//! sources only ever receive a read-only board snapshot: the engine is
//! the sole mutator of game state.

use super::action::{Move, MoveError};
use super::rules;
use super::types::{Board, Marker};
use crate::players::MoveSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Marker),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A player's seat: their marker plus the source of their moves.
pub struct Seat {
    marker: Marker,
    source: Box<dyn MoveSource>,
}

impl Seat {
    /// Creates a seat for `marker` drawing moves from `source`.
    pub fn new(marker: Marker, source: Box<dyn MoveSource>) -> Self {
        Self { marker, source }
    }

    /// The seat's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The move source's display name.
    pub fn name(&self) -> &str {
        self.source.name()
    }
}

/// Error raised by [`Game::play_turn`].
#[derive(Debug, derive_more::Display)]
pub enum TurnError {
    /// The move was rejected by validation, or the game is already
    /// over. State is unchanged and the turn is not consumed.
    #[display("{_0}")]
    Rejected(MoveError),

    /// The move source failed to produce coordinates (malformed input,
    /// closed input channel). State is unchanged.
    #[display("no move supplied: {_0}")]
    Source(anyhow::Error),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Rejected(err) => Some(err),
            TurnError::Source(err) => Some(AsRef::<dyn std::error::Error>::as_ref(err)),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Constructed from two already-built seats; the first seat takes the
/// opening turn regardless of its marker. Once the status is terminal
/// the engine rejects further turns.
pub struct Game {
    board: Board,
    current: Seat,
    other: Seat,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game. `first` moves first.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Seat, second: Seat) -> Self {
        Self {
            board: Board::new(),
            current: first,
            other: second,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays one turn: asks the current seat for a move, validates it,
    /// applies it, and updates the status.
    ///
    /// On success exactly one cell transitions from empty to a marker;
    /// the current/other roles swap only when the game continues.
    ///
    /// # Errors
    ///
    /// - `TurnError::Rejected(MoveError::GameOver)` when called in a
    ///   terminal state.
    /// - `TurnError::Rejected` with `OutOfRange` or `CellOccupied` when
    ///   the supplied move is illegal; the board is unchanged and the
    ///   same seat stays current, so the caller can re-prompt.
    /// - `TurnError::Source` when the move source itself fails.
    #[instrument(skip(self), fields(player = %self.current.name(), marker = %self.current.marker))]
    pub fn play_turn(&mut self) -> Result<GameStatus, TurnError> {
        if self.status.is_terminal() {
            return Err(TurnError::Rejected(MoveError::GameOver));
        }

        let coord = self
            .current
            .source
            .decide(&self.board)
            .map_err(TurnError::Source)?;
        debug!(%coord, "move proposed");

        self.board
            .set(coord, self.current.marker)
            .map_err(TurnError::Rejected)?;
        self.history.push(Move::new(self.current.marker, coord));

        if let Some(marker) = rules::winner(&self.board) {
            info!(winner = %marker, "game won");
            self.status = GameStatus::Won(marker);
        } else if self.board.is_full() {
            info!("game drawn");
            self.status = GameStatus::Draw;
        } else {
            std::mem::swap(&mut self.current, &mut self.other);
        }

        Ok(self.status)
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning marker, if the game has been won.
    pub fn winner(&self) -> Option<Marker> {
        match self.status {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }

    /// True if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// The marker that moves next.
    pub fn to_move(&self) -> Marker {
        self.current.marker
    }

    /// The seat that moves next.
    pub fn current(&self) -> &Seat {
        &self.current
    }

    /// The ordered list of moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Coord};
    use anyhow::Result;
    use std::collections::VecDeque;

    /// Replays a fixed move list, for driving the engine in tests.
    struct Scripted {
        name: String,
        moves: VecDeque<Coord>,
    }

    impl Scripted {
        fn new(name: &str, moves: &[(usize, usize)]) -> Self {
            Self {
                name: name.to_string(),
                moves: moves.iter().map(|&(r, c)| Coord::new(r, c)).collect(),
            }
        }
    }

    impl MoveSource for Scripted {
        fn decide(&mut self, _board: &Board) -> Result<Coord> {
            self.moves
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn game(x_moves: &[(usize, usize)], o_moves: &[(usize, usize)]) -> Game {
        Game::new(
            Seat::new(Marker::X, Box::new(Scripted::new("x", x_moves))),
            Seat::new(Marker::O, Box::new(Scripted::new("o", o_moves))),
        )
    }

    #[test]
    fn test_first_seat_opens() {
        let game = game(&[], &[]);
        assert_eq!(game.to_move(), Marker::X);
        assert_eq!(game.current().name(), "x");
    }

    #[test]
    fn test_markers_alternate_strictly() {
        let mut game = game(&[(0, 0), (1, 1), (2, 0)], &[(0, 1), (0, 2)]);
        for _ in 0..5 {
            assert_eq!(game.play_turn().unwrap(), GameStatus::InProgress);
        }
        let markers: Vec<_> = game.history().iter().map(|m| m.marker).collect();
        assert_eq!(
            markers,
            [Marker::X, Marker::O, Marker::X, Marker::O, Marker::X]
        );
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        assert_eq!(occupied, 5);
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut game = game(&[(0, 0), (1, 1), (2, 2)], &[(0, 1), (0, 2)]);
        for _ in 0..4 {
            assert_eq!(game.play_turn().unwrap(), GameStatus::InProgress);
        }
        assert_eq!(game.play_turn().unwrap(), GameStatus::Won(Marker::X));
        assert_eq!(game.winner(), Some(Marker::X));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // Ends at X O X / X O O / O X X with no winning line.
        let mut game = game(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        for _ in 0..8 {
            assert_eq!(game.play_turn().unwrap(), GameStatus::InProgress);
        }
        assert_eq!(game.play_turn().unwrap(), GameStatus::Draw);
        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_occupied_cell_rejected_without_consuming_turn() {
        let mut game = game(&[(0, 0)], &[(0, 0), (1, 1)]);
        game.play_turn().unwrap();
        let before = game.board().clone();

        // O aims at X's cell; the turn stays with O.
        match game.play_turn() {
            Err(TurnError::Rejected(MoveError::CellOccupied(coord))) => {
                assert_eq!(coord, Coord::new(0, 0));
            }
            other => panic!("expected CellOccupied, got {other:?}"),
        }
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Marker::O);
        assert_eq!(game.history().len(), 1);

        // O's retry lands.
        game.play_turn().unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Marker::X);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = game(&[(5, 0), (1, 1)], &[]);
        match game.play_turn() {
            Err(TurnError::Rejected(MoveError::OutOfRange(coord))) => {
                assert_eq!(coord, Coord::new(5, 0));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
        assert_eq!(game.to_move(), Marker::X);
        game.play_turn().unwrap();
        assert_eq!(game.to_move(), Marker::O);
    }

    #[test]
    fn test_turn_after_win_rejected() {
        let mut game = game(&[(0, 0), (0, 1), (0, 2), (2, 2)], &[(1, 0), (1, 1)]);
        for _ in 0..4 {
            game.play_turn().unwrap();
        }
        assert_eq!(game.play_turn().unwrap(), GameStatus::Won(Marker::X));
        let before = game.board().clone();

        match game.play_turn() {
            Err(TurnError::Rejected(MoveError::GameOver)) => {}
            other => panic!("expected GameOver, got {other:?}"),
        }
        assert_eq!(*game.board(), before);
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_turn_after_draw_rejected() {
        let mut game = game(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        for _ in 0..9 {
            game.play_turn().unwrap();
        }
        assert!(matches!(
            game.play_turn(),
            Err(TurnError::Rejected(MoveError::GameOver))
        ));
    }

    #[test]
    fn test_source_failure_surfaces() {
        let mut game = game(&[], &[]);
        assert!(matches!(game.play_turn(), Err(TurnError::Source(_))));
        assert_eq!(game.history().len(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_no_swap_on_winning_move() {
        let mut game = game(&[(0, 0), (0, 1), (0, 2)], &[(1, 0), (1, 1)]);
        for _ in 0..5 {
            game.play_turn().unwrap();
        }
        // X played the winning move and keeps the current seat.
        assert_eq!(game.to_move(), Marker::X);
    }
}
