use super::player::Player;
use super::state_key::StateKey;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

impl Cell {
    /// Digit used for this cell in a [`StateKey`].
    pub fn code(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Human => '1',
            Cell::Ai => '2',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// Contract violations raised by board mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("row {0} is out of range")]
    InvalidRow(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) has no piece below it")]
    FloatingPiece { row: usize, col: usize },
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns whose top cell is still empty, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Lowest empty row in `col`.
    pub fn open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Place `player` at (row, col). The cell must be empty and rest on a
    /// piece or the bottom edge.
    pub fn drop(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if row >= ROWS {
            return Err(MoveError::InvalidRow(row));
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        if row + 1 < ROWS && self.cells[row + 1][col] == Cell::Empty {
            return Err(MoveError::FloatingPiece { row, col });
        }

        self.cells[row][col] = player.to_cell();
        Ok(())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.open_row(col)?;
        self.drop(row, col, player)?;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Snapshot of the cell contents usable as a value-table key.
    pub fn state_key(&self) -> StateKey {
        StateKey::from_board(self)
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
