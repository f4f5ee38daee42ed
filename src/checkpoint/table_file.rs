use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ai::{LearningParams, ValueStore};
use crate::checkpoint::metadata::{TableEntry, TableMetadata, TableSnapshot, FORMAT_VERSION};
use crate::error::TableError;
use crate::game::COLS;

/// Load/save contract for the value table.
pub trait TablePersistence {
    /// Read every stored entry.
    fn load(&self) -> Result<Vec<TableEntry>, TableError>;

    /// Replace the stored table with the contents of `store`.
    fn save(&self, store: &ValueStore) -> Result<(), TableError>;
}

/// Value table kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct TableFile {
    path: PathBuf,
}

impl TableFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TableFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TablePersistence for TableFile {
    fn load(&self) -> Result<Vec<TableEntry>, TableError> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TableError::NotFound(self.path.clone())
            } else {
                TableError::Read {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let snapshot: TableSnapshot =
            serde_json::from_str(&json).map_err(|e| TableError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        if snapshot.metadata.format_version != FORMAT_VERSION {
            return Err(TableError::UnsupportedVersion(
                snapshot.metadata.format_version,
            ));
        }
        if let Some(bad) = snapshot.entries.iter().find(|e| e.action >= COLS) {
            return Err(TableError::InvalidAction(bad.action));
        }

        Ok(snapshot.entries)
    }

    fn save(&self, store: &ValueStore) -> Result<(), TableError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut entries: Vec<TableEntry> = store
            .iter()
            .map(|(state, action, value)| TableEntry {
                state: state.clone(),
                action,
                value,
            })
            .collect();
        entries.sort_by(|a, b| (&a.state, a.action).cmp(&(&b.state, b.action)));

        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let snapshot = TableSnapshot {
            metadata: TableMetadata {
                format_version: FORMAT_VERSION,
                saved_at,
                entry_count: entries.len(),
                learning: store.params(),
            },
            entries,
        };

        // Write then rename so a crash never leaves a half-written table
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_string(&snapshot)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Build a store from persisted entries, starting empty when the table is
/// missing or unreadable.
pub fn load_store(persistence: &dyn TablePersistence, params: LearningParams) -> ValueStore {
    match persistence.load() {
        Ok(entries) => {
            let store = ValueStore::from_entries(
                params,
                entries.into_iter().map(|e| (e.state, e.action, e.value)),
            );
            log::info!("Loaded {} learned values", store.len());
            store
        }
        Err(TableError::NotFound(path)) => {
            log::info!("No value table at {}, starting fresh", path.display());
            ValueStore::new(params)
        }
        Err(e) => {
            log::warn!("Ignoring unreadable value table: {}", e);
            ValueStore::new(params)
        }
    }
}

/// Save the store, reporting failure without propagating it.
/// Returns whether the save succeeded.
pub fn flush_store(persistence: &dyn TablePersistence, store: &ValueStore) -> bool {
    match persistence.save(store) {
        Ok(()) => {
            log::info!("Saved {} learned values", store.len());
            true
        }
        Err(e) => {
            log::warn!("Failed to save value table: {}", e);
            false
        }
    }
}
