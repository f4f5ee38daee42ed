use crate::game::{GameOutcome, Player};

/// Running totals over repeated self-play games.
#[derive(Debug, Clone, Default)]
pub struct SelfPlayTally {
    human_side_wins: usize,
    ai_side_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl SelfPlayTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome, moves: usize) {
        match outcome {
            GameOutcome::Winner(Player::Human) => self.human_side_wins += 1,
            GameOutcome::Winner(Player::Ai) => self.ai_side_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_moves += moves;
    }

    pub fn games(&self) -> usize {
        self.human_side_wins + self.ai_side_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Human => self.human_side_wins,
            Player::Ai => self.ai_side_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Fraction of games won by the side moving first.
    pub fn first_mover_win_rate(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.human_side_wins as f32 / n as f32
    }

    pub fn draw_rate(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.draws as f32 / n as f32
    }

    pub fn average_game_length(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.total_moves as f32 / n as f32
    }
}
