use super::board::{Board, MoveError};
use super::player::Player;

/// Board after `player` drops into `col`; `board` itself is not modified.
pub fn simulate(board: &Board, col: usize, player: Player) -> Result<Board, MoveError> {
    let mut next = *board;
    next.drop_piece(col, player)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    #[test]
    fn test_simulate_leaves_original_untouched() {
        let mut board = Board::new();
        board.drop_piece(3, Player::Human).unwrap();
        let before = board;

        let next = simulate(&board, 3, Player::Ai).unwrap();

        assert_eq!(board, before);
        assert_eq!(next.get(4, 3), Cell::Ai);
        assert_eq!(board.get(4, 3), Cell::Empty);
    }

    #[test]
    fn test_simulate_full_column_fails() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(1, Player::Ai).unwrap();
        }
        assert_eq!(
            simulate(&board, 1, Player::Human),
            Err(MoveError::ColumnFull(1))
        );
    }
}
