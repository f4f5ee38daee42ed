use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Direction steps (row, col) for the four line orientations.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether `player` has four consecutive pieces in any orientation.
pub fn has_four(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();

    for row in 0..ROWS {
        for col in 0..COLS {
            for &(dr, dc) in &DIRECTIONS {
                let line = (0..4).all(|i| {
                    let r = row as isize + dr * i;
                    let c = col as isize + dc * i;
                    (0..ROWS as isize).contains(&r)
                        && (0..COLS as isize).contains(&c)
                        && board.get(r as usize, c as usize) == cell
                });
                if line {
                    return true;
                }
            }
        }
    }

    false
}
