use std::collections::{BTreeMap, HashMap};

use crate::game::StateKey;

/// Step size and discount for the one-step Q-learning update.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LearningParams {
    pub alpha: f64,
    pub gamma: f64,
}

impl Default for LearningParams {
    fn default() -> Self {
        LearningParams {
            alpha: 0.1,
            gamma: 0.9,
        }
    }
}

/// Sparse table of learned state-action values.
///
/// Absent entries read as 0.0 and are never materialised by a lookup, so the
/// table only grows with visited (state, action) pairs. Mutation goes through
/// [`ValueStore::update`] and needs `&mut self`; sharing a store between
/// games running in parallel would need each per-key read-modify-write to be
/// serialized.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    params: LearningParams,
    values: HashMap<StateKey, BTreeMap<usize, f64>>,
}

impl ValueStore {
    pub fn new(params: LearningParams) -> Self {
        ValueStore {
            params,
            values: HashMap::new(),
        }
    }

    /// Rebuild a store from persisted entries. Later duplicates win.
    pub fn from_entries<I>(params: LearningParams, entries: I) -> Self
    where
        I: IntoIterator<Item = (StateKey, usize, f64)>,
    {
        let mut store = ValueStore::new(params);
        for (state, action, value) in entries {
            store.values.entry(state).or_default().insert(action, value);
        }
        store
    }

    pub fn params(&self) -> LearningParams {
        self.params
    }

    /// Learned value of `action` in `state`, 0.0 if never updated.
    pub fn get(&self, state: &StateKey, action: usize) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Best value reachable from `state`, 0.0 when it has no valid columns.
    pub fn max_future(&self, state: &StateKey) -> f64 {
        state
            .valid_columns()
            .into_iter()
            .map(|action| self.get(state, action))
            .fold(None, |best: Option<f64>, v| {
                Some(best.map_or(v, |b| b.max(v)))
            })
            .unwrap_or(0.0)
    }

    /// Apply `Q(s,a) <- Q(s,a) + alpha * (r + gamma * max Q(s',.) - Q(s,a))`
    /// and return the new value.
    pub fn update(
        &mut self,
        state: &StateKey,
        action: usize,
        reward: f64,
        next_state: &StateKey,
    ) -> f64 {
        let current = self.get(state, action);
        let future = self.max_future(next_state);
        let LearningParams { alpha, gamma } = self.params;
        let updated = current + alpha * (reward + gamma * future - current);
        self.values
            .entry(state.clone())
            .or_default()
            .insert(action, updated);
        updated
    }

    pub fn len(&self) -> usize {
        self.values.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, usize, f64)> {
        self.values.iter().flat_map(|(state, actions)| {
            actions
                .iter()
                .map(move |(&action, &value)| (state, action, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player, COLS, ROWS};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn one_move_board() -> Board {
        let mut board = Board::new();
        board.drop_piece(3, Player::Human).unwrap();
        board
    }

    #[test]
    fn test_absent_entry_reads_zero() {
        let store = ValueStore::new(LearningParams::default());
        assert_eq!(store.get(&Board::new().state_key(), 2), 0.0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_from_zero_moves_by_alpha() {
        let mut store = ValueStore::new(LearningParams::default());
        let s = Board::new().state_key();
        let next = one_move_board().state_key();

        let v = store.update(&s, 3, 100.0, &next);
        assert!(approx(v, 10.0));
        assert!(approx(store.get(&s, 3), 10.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_reward_zero_future_is_fixed_point_at_zero() {
        let mut store = ValueStore::new(LearningParams::default());
        let s = Board::new().state_key();
        let next = one_move_board().state_key();

        for _ in 0..5 {
            assert_eq!(store.update(&s, 0, 0.0, &next), 0.0);
        }
    }

    #[test]
    fn test_update_moves_toward_target() {
        let params = LearningParams::default();
        let s = Board::new().state_key();
        let next = one_move_board().state_key();
        let mut store = ValueStore::from_entries(params, vec![(s.clone(), 0, 5.0)]);

        // Target is 0 (no reward, no future); each step shrinks by (1 - alpha)
        let v1 = store.update(&s, 0, 0.0, &next);
        assert!(approx(v1, 4.5));
        let v2 = store.update(&s, 0, 0.0, &next);
        assert!(approx(v2, 4.05));
    }

    #[test]
    fn test_update_uses_best_next_value() {
        let s = Board::new().state_key();
        let next = one_move_board().state_key();
        let mut store = ValueStore::from_entries(
            LearningParams::default(),
            vec![(next.clone(), 1, 50.0), (next.clone(), 2, -20.0)],
        );

        let v = store.update(&s, 3, -1.0, &next);
        // 0 + 0.1 * (-1 + 0.9 * 50 - 0)
        assert!(approx(v, 4.4));
    }

    #[test]
    fn test_future_is_zero_for_full_next_state() {
        let mut full = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                full.drop_piece(col, Player::Ai).unwrap();
            }
        }
        let next = full.state_key();
        let s = Board::new().state_key();
        let mut store = ValueStore::new(LearningParams::default());

        assert_eq!(store.max_future(&next), 0.0);
        let v = store.update(&s, 0, 10.0, &next);
        assert!(approx(v, 1.0));
    }

    #[test]
    fn test_max_future_may_be_negative() {
        let next = one_move_board().state_key();
        let entries = (0..COLS).map(|c| (next.clone(), c, -3.0 - c as f64));
        let store = ValueStore::from_entries(LearningParams::default(), entries);
        assert!(approx(store.max_future(&next), -3.0));
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let store = ValueStore::new(LearningParams::default());
        let s = Board::new().state_key();
        for a in 0..COLS {
            store.get(&s, a);
        }
        assert!(store.is_empty());
    }
}
