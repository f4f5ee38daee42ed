use crate::ai::{Agent, Policy, PolicyConfig, ValueStore};
use crate::error::AgentError;
use crate::game::{Board, Player};

/// Automated player driven by [`Policy`] over the shared value table.
pub struct QLearningAgent {
    policy: Policy,
    name: String,
}

impl QLearningAgent {
    pub fn named(name: impl Into<String>, config: &PolicyConfig) -> Self {
        QLearningAgent {
            policy: Policy::new(config),
            name: name.into(),
        }
    }
}

impl Agent for QLearningAgent {
    fn select_action(
        &mut self,
        board: &Board,
        player: Player,
        store: &ValueStore,
    ) -> Result<usize, AgentError> {
        self.policy.decide(board, player, store)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
