//! Flat-file session recorder.
//!
//! Persists finished games under a log directory: an append-only
//! winners file (one line per game), a per-move table rewritten per
//! game, and optional board snapshots. The engine knows nothing about
//! any of this; it only exposes the status and move history.

use crate::game::{GameStatus, Move};
use derive_more::{Display, Error, From};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Recorder failure wrapping the underlying filesystem error.
#[derive(Debug, Display, Error, From)]
#[display("recorder error: {_0}")]
pub struct RecorderError(std::io::Error);

/// Win counts parsed back out of the winners file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total number of recorded games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Writes game outcomes and move logs to flat files in one directory.
#[derive(Debug, Clone)]
pub struct SessionRecorder {
    dir: PathBuf,
}

impl SessionRecorder {
    /// Append-only outcome log: one line per finished game.
    pub const WINNERS_FILE: &'static str = "winners.csv";
    /// Per-move table for the most recent game.
    pub const MOVES_FILE: &'static str = "game_log.csv";
    /// Rendered board snapshots.
    pub const BOARD_FILE: &'static str = "game_board.txt";

    /// Creates a recorder rooted at `dir`, creating the directory if
    /// it does not exist.
    #[instrument(skip(dir))]
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RecorderError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "session recorder ready");
        Ok(Self { dir })
    }

    /// The log directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends the outcome of a finished game to the winners file: the
    /// winning marker, or `draw`.
    ///
    /// Calling this with an in-progress game records nothing.
    #[instrument(skip(self))]
    pub fn record_outcome(&self, status: GameStatus) -> Result<(), RecorderError> {
        let field = match status {
            GameStatus::Won(marker) => marker.to_string(),
            GameStatus::Draw => "draw".to_string(),
            GameStatus::InProgress => {
                debug!("game still in progress, nothing to record");
                return Ok(());
            }
        };
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.dir.join(Self::WINNERS_FILE))?;
        writeln!(file, "{field}")?;
        info!(outcome = %field, "recorded game outcome");
        Ok(())
    }

    /// Writes the per-move table: `player,row,col,winner`, one row per
    /// applied move. The winner column is filled only on the final move
    /// of a won game.
    #[instrument(skip(self, moves))]
    pub fn save_moves(&self, moves: &[Move], status: GameStatus) -> Result<(), RecorderError> {
        let mut file = std::fs::File::create(self.dir.join(Self::MOVES_FILE))?;
        writeln!(file, "player,row,col,winner")?;
        for (i, mv) in moves.iter().enumerate() {
            let winner = match status {
                GameStatus::Won(marker) if i + 1 == moves.len() => marker.to_string(),
                _ => String::new(),
            };
            writeln!(file, "{},{},{},{}", mv.marker, mv.coord.row, mv.coord.col, winner)?;
        }
        debug!(moves = moves.len(), "saved move log");
        Ok(())
    }

    /// Appends a rendered board snapshot to the board file.
    pub fn append_board(&self, rendered: &str) -> Result<(), RecorderError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.dir.join(Self::BOARD_FILE))?;
        file.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Counts wins and draws recorded in the winners file.
    #[instrument(skip(self))]
    pub fn tally(&self) -> Result<Tally, RecorderError> {
        let path = self.dir.join(Self::WINNERS_FILE);
        if !path.exists() {
            return Ok(Tally::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut tally = Tally::default();
        for line in content.lines() {
            match line.trim() {
                "X" => tally.x_wins += 1,
                "O" => tally.o_wins += 1,
                "draw" => tally.draws += 1,
                _ => {}
            }
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Marker};

    #[test]
    fn test_creates_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let recorder = SessionRecorder::new(&dir).unwrap();
        assert!(recorder.dir().is_dir());
    }

    #[test]
    fn test_outcomes_append() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        recorder.record_outcome(GameStatus::Won(Marker::X)).unwrap();
        recorder.record_outcome(GameStatus::Draw).unwrap();
        recorder.record_outcome(GameStatus::Won(Marker::X)).unwrap();

        let content =
            std::fs::read_to_string(tmp.path().join(SessionRecorder::WINNERS_FILE)).unwrap();
        assert_eq!(content, "X\ndraw\nX\n");
        assert_eq!(
            recorder.tally().unwrap(),
            Tally {
                x_wins: 2,
                o_wins: 0,
                draws: 1
            }
        );
        assert_eq!(recorder.tally().unwrap().games(), 3);
    }

    #[test]
    fn test_in_progress_records_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        recorder.record_outcome(GameStatus::InProgress).unwrap();
        assert!(!tmp.path().join(SessionRecorder::WINNERS_FILE).exists());
    }

    #[test]
    fn test_move_table_marks_winning_move() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        let moves = [
            Move::new(Marker::X, Coord::new(0, 0)),
            Move::new(Marker::O, Coord::new(1, 1)),
            Move::new(Marker::X, Coord::new(0, 1)),
            Move::new(Marker::O, Coord::new(2, 2)),
            Move::new(Marker::X, Coord::new(0, 2)),
        ];
        recorder
            .save_moves(&moves, GameStatus::Won(Marker::X))
            .unwrap();

        let content =
            std::fs::read_to_string(tmp.path().join(SessionRecorder::MOVES_FILE)).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "player,row,col,winner");
        assert_eq!(lines[1], "X,0,0,");
        assert_eq!(lines[2], "O,1,1,");
        assert_eq!(lines[5], "X,0,2,X");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_move_table_for_draw_has_no_winner_column() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        let moves = [Move::new(Marker::X, Coord::new(0, 0))];
        recorder.save_moves(&moves, GameStatus::Draw).unwrap();

        let content =
            std::fs::read_to_string(tmp.path().join(SessionRecorder::MOVES_FILE)).unwrap();
        assert_eq!(content, "player,row,col,winner\nX,0,0,\n");
    }

    #[test]
    fn test_board_snapshots_append() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        recorder.append_board("  0 1 2\n").unwrap();
        recorder.append_board("  0 1 2\n").unwrap();

        let content =
            std::fs::read_to_string(tmp.path().join(SessionRecorder::BOARD_FILE)).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_tally_without_winners_file() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = SessionRecorder::new(tmp.path()).unwrap();
        assert_eq!(recorder.tally().unwrap(), Tally::default());
    }
}
