//! Turn orchestration: the session state machine that applies moves, scores
//! them, and feeds each half-move into the value table.

mod game;
mod reward;
mod tally;

pub use game::{NoopObserver, Session, SessionObserver, SessionState, TurnReport};
pub use reward::{compute_reward, RewardConfig};
pub use tally::SelfPlayTally;
