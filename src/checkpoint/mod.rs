//! Value table persistence: a JSON file loaded wholesale at start and
//! written wholesale when a game ends.

mod metadata;
mod table_file;

pub use metadata::{TableEntry, TableMetadata, TableSnapshot, FORMAT_VERSION};
pub use table_file::{flush_store, load_store, TableFile, TablePersistence};
