//! Move selection: the agent seam, the epsilon / block / win / learned-value
//! policy, and the tabular value store it reads.

mod agent;
mod policy;
mod q_learning;
mod value_store;

pub use agent::Agent;
pub use policy::{Policy, PolicyConfig};
pub use q_learning::QLearningAgent;
pub use value_store::{LearningParams, ValueStore};
