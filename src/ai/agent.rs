use crate::ai::ValueStore;
use crate::error::AgentError;
use crate::game::{Board, Player};

/// Synchronous move provider for one side of a game.
///
/// The session asks the acting side's agent for a column every half-move.
/// Agents may read the value table but never write it; learning updates are
/// applied by the session after the move lands.
pub trait Agent {
    /// Select a column for `player` on `board`.
    fn select_action(
        &mut self,
        board: &Board,
        player: Player,
        store: &ValueStore,
    ) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Whether moves come from the program rather than a person.
    fn is_automated(&self) -> bool {
        true
    }
}
