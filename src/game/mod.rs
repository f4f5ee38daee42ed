//! Core Connect Four rules: board with gravity, four-in-a-row detection,
//! side-effect-free move simulation, and the canonical state key used by the
//! value table.

mod board;
mod player;
mod simulate;
mod state_key;
mod win;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use simulate::simulate;
pub use state_key::{InvalidStateKey, StateKey, KEY_LEN};
pub use win::has_four;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}
