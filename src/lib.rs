//! Tic-tac-toe game engine with pluggable move sources.
//!
//! Game logic lives in this library and stays free of input and
//! output: the engine validates moves, drives turn alternation, and
//! detects wins and draws, while humans, bots, rendering, and flat-file
//! logging plug in at the edges.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Marker, RandomBot, Seat};
//!
//! let mut game = Game::new(
//!     Seat::new(Marker::X, Box::new(RandomBot::seeded("Bot 1", 1))),
//!     Seat::new(Marker::O, Box::new(RandomBot::seeded("Bot 2", 2))),
//! );
//! while game.status() == GameStatus::InProgress {
//!     game.play_turn()?;
//! }
//! assert!(game.winner().is_some() || game.is_draw());
//! # Ok::<(), tictactoe::TurnError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod players;
pub mod recorder;
pub mod render;

// Crate-level exports - game engine
pub use game::{Board, Cell, Coord, Game, GameStatus, Marker, Move, MoveError, Seat, TurnError};

// Crate-level exports - move sources
pub use players::{CoordInput, HumanPlayer, InputClosed, MoveSource, RandomBot, StdinInput};

// Crate-level exports - persistence
pub use recorder::{RecorderError, SessionRecorder, Tally};
