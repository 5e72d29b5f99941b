//! Game-state engine: board, moves, rules, and the turn state machine.

mod action;
mod engine;
pub mod rules;
mod types;

pub use action::{Coord, Move, MoveError};
pub use engine::{Game, GameStatus, Seat, TurnError};
pub use types::{Board, Cell, Marker};
