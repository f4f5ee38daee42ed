use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::ValueStore;
use crate::error::AgentError;
use crate::game::{has_four, simulate, Board, Player, StateKey};

/// Exploration settings for the automated player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Probability of playing a uniformly random column.
    pub epsilon: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            epsilon: 0.1,
            seed: None,
        }
    }
}

/// Move selection combining exploration, one-ply tactics and learned values.
pub struct Policy {
    epsilon: f64,
    rng: StdRng,
}

impl Policy {
    pub fn new(config: &PolicyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Policy {
            epsilon: config.epsilon,
            rng,
        }
    }

    /// Choose a column for `player`.
    ///
    /// In order: a random column with probability epsilon; a column that
    /// blocks an immediate opponent win; a column that wins immediately; the
    /// column with the highest learned value for the current state.
    pub fn decide(
        &mut self,
        board: &Board,
        player: Player,
        store: &ValueStore,
    ) -> Result<usize, AgentError> {
        let columns = board.valid_columns();
        if columns.is_empty() {
            return Err(AgentError::NoValidColumns);
        }

        if self.rng.random::<f64>() < self.epsilon {
            let col = self.random_column(&columns);
            log::debug!("{} explores column {}", player.name(), col);
            return Ok(col);
        }

        if let Some(col) = tactical_move(board, player, &columns) {
            log::debug!("{} plays tactical column {}", player.name(), col);
            return Ok(col);
        }

        Ok(self.best_valued(&board.state_key(), &columns, store))
    }

    /// Highest-valued column. The candidate is seeded with a random column
    /// at its own value and only replaced by a strictly greater one, so ties
    /// keep the earliest seeded-or-found column.
    fn best_valued(&mut self, state: &StateKey, columns: &[usize], store: &ValueStore) -> usize {
        let mut best_column = self.random_column(columns);
        let mut best_score = store.get(state, best_column);

        for &col in columns {
            let value = store.get(state, col);
            if value > best_score {
                best_score = value;
                best_column = col;
            }
        }

        best_column
    }

    fn random_column(&mut self, columns: &[usize]) -> usize {
        columns[self.rng.random_range(0..columns.len())]
    }
}

/// First column (ascending) that stops the opponent from completing four,
/// or failing that, the first that completes four for `player`.
pub fn tactical_move(board: &Board, player: Player, columns: &[usize]) -> Option<usize> {
    winning_column(board, player.other(), columns)
        .or_else(|| winning_column(board, player, columns))
}

fn winning_column(board: &Board, player: Player, columns: &[usize]) -> Option<usize> {
    columns.iter().copied().find(|&col| {
        simulate(board, col, player)
            .map(|next| has_four(&next, player))
            .unwrap_or(false)
    })
}
