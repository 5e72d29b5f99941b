//! Move sources: where each turn's coordinates come from.
//!
//! The engine is polymorphic over a single capability - supply a
//! coordinate pair for a board snapshot. Humans and bots are tagged
//! variants of that capability, injected into the engine at
//! construction rather than subclassed.

mod bot;
mod human;

pub use bot::RandomBot;
pub use human::{CoordInput, HumanPlayer, InputClosed, StdinInput, parse_coord};

use crate::game::{Board, Coord};
use anyhow::Result;

/// Capability to decide the next move.
pub trait MoveSource {
    /// Produces coordinates for the next move.
    ///
    /// The board is a read-only snapshot; validation is the engine's
    /// job, so implementations may return out-of-range or occupied
    /// coordinates and expect a re-prompt.
    fn decide(&mut self, board: &Board) -> Result<Coord>;

    /// Display name for prompts and logs.
    fn name(&self) -> &str;
}
