use serde::{Deserialize, Serialize};

use crate::ai::LearningParams;
use crate::game::StateKey;

/// Current on-disk layout of the value table file.
pub const FORMAT_VERSION: u32 = 1;

/// Header written alongside the entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    pub format_version: u32,
    pub saved_at: u64,
    pub entry_count: usize,
    pub learning: LearningParams,
}

/// One learned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub state: StateKey,
    pub action: usize,
    pub value: f64,
}

/// Whole value table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub metadata: TableMetadata,
    pub entries: Vec<TableEntry>,
}
