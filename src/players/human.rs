//! Human player that delegates to an input collaborator.

use super::MoveSource;
use crate::game::{Board, Coord, Marker};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Collaborator that obtains a coordinate pair from the outside world.
///
/// Prompting and parsing live behind this trait so tests can script
/// input and the engine never sees raw text.
pub trait CoordInput {
    /// Reads one coordinate pair, blocking until available.
    fn read_coord(&mut self, prompt: &str) -> Result<Coord>;
}

/// Raised when the input stream ends before a move is supplied.
///
/// Unlike malformed text this is not worth a re-prompt; the driving
/// loop should give up on the game.
#[derive(Debug, Clone, Copy, derive_more::Display)]
#[display("input closed before a move was entered")]
pub struct InputClosed;

impl std::error::Error for InputClosed {}

/// Reads `row,col` pairs from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl CoordInput for StdinInput {
    fn read_coord(&mut self, prompt: &str) -> Result<Coord> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        parse_coord(&line)
    }
}

/// Parses a `row,col` pair of decimal integers.
///
/// Surrounding whitespace is tolerated; anything else is a malformed
/// input error, surfaced before the coordinates ever reach move
/// validation.
pub fn parse_coord(text: &str) -> Result<Coord> {
    let (row, col) = text
        .trim()
        .split_once(',')
        .with_context(|| format!("expected \"row,col\", got {:?}", text.trim()))?;
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("row {:?} is not a number", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("column {:?} is not a number", col.trim()))?;
    Ok(Coord::new(row, col))
}

/// Human player: asks its input collaborator each turn.
///
/// Performs no validation and never consults the board's contents;
/// the engine validates and re-prompts on illegal moves.
pub struct HumanPlayer<I> {
    name: String,
    marker: Marker,
    input: I,
}

impl<I: CoordInput> HumanPlayer<I> {
    /// Creates a human player reading moves from `input`.
    pub fn new(name: impl Into<String>, marker: Marker, input: I) -> Self {
        Self {
            name: name.into(),
            marker,
            input,
        }
    }
}

impl<I: CoordInput> MoveSource for HumanPlayer<I> {
    fn decide(&mut self, _board: &Board) -> Result<Coord> {
        let prompt = format!(
            "{}, enter the spot for {} as row,col: ",
            self.name, self.marker
        );
        let coord = self.input.read_coord(&prompt)?;
        debug!(player = %self.name, %coord, "human chose a spot");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
