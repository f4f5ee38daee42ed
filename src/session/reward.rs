use crate::game::{has_four, Board, Player};

/// Reward constants for one half-move.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
    /// Per-move cost, normally a small negative number.
    pub step: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            win: 100.0,
            loss: -100.0,
            draw: 10.0,
            step: -1.0,
        }
    }
}

/// Reward for `player` given the board right after their move.
pub fn compute_reward(board: &Board, player: Player, rewards: &RewardConfig) -> f64 {
    if has_four(board, player) {
        rewards.win
    } else if has_four(board, player.other()) {
        rewards.loss
    } else if board.valid_columns().is_empty() {
        rewards.draw
    } else {
        rewards.step
    }
}
