use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, COLS, ROWS};

/// Number of digits in a state key (one per cell).
pub const KEY_LEN: usize = ROWS * COLS;

/// Canonical, value-comparable snapshot of a board's cells.
///
/// Cells are written row-major starting from the top row, `0` for empty,
/// `1` for the human and `2` for the AI. Equal boards always produce equal
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStateKey {
    #[error("state key has {0} cells, expected 42")]
    Length(usize),

    #[error("state key contains invalid cell code {0:?}")]
    CellCode(char),
}

impl StateKey {
    pub fn from_board(board: &Board) -> Self {
        let key = board
            .rows()
            .flat_map(|row| row.iter().map(|cell| cell.code()))
            .collect();
        StateKey(key)
    }

    /// Parse a persisted key, checking length and cell codes.
    pub fn parse(raw: &str) -> Result<Self, InvalidStateKey> {
        let len = raw.chars().count();
        if len != KEY_LEN {
            return Err(InvalidStateKey::Length(len));
        }
        if let Some(bad) = raw.chars().find(|c| !matches!(c, '0' | '1' | '2')) {
            return Err(InvalidStateKey::CellCode(bad));
        }
        Ok(StateKey(raw.to_string()))
    }

    /// Columns still open in the encoded board (top-row cell empty).
    pub fn valid_columns(&self) -> Vec<usize> {
        self.0
            .bytes()
            .take(COLS)
            .enumerate()
            .filter(|&(_, code)| code == Cell::Empty.code() as u8)
            .map(|(col, _)| col)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateKey {
    type Error = InvalidStateKey;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        StateKey::parse(&raw)
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
