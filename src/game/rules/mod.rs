//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots: no mutation, no stored state.
//! Rules are separated from board storage so they can be exercised on
//! arbitrary boards, including ones no legal game would reach.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winner;
