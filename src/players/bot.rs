//! Randomized bot player.

use super::MoveSource;
use crate::game::{Board, Coord};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Bot that picks uniformly at random among the empty cells.
///
/// The random source is an injected dependency so tests (and the
/// `--seed` flag) can make games reproducible.
pub struct RandomBot<R = SmallRng> {
    name: String,
    rng: R,
}

impl RandomBot<SmallRng> {
    /// Creates a bot seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a bot with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomBot<R> {
    /// Creates a bot drawing from an externally constructed source.
    pub fn with_rng(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> MoveSource for RandomBot<R> {
    fn decide(&mut self, board: &Board) -> Result<Coord> {
        let open = board.empty_cells();
        if open.is_empty() {
            // The engine detects terminal boards before asking for a
            // move, so this only fires on a misdriven engine.
            anyhow::bail!("no empty spots left to choose from");
        }
        let coord = open[self.rng.random_range(0..open.len())];
        debug!(bot = %self.name, %coord, "bot chose a spot");
        Ok(coord)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
