//! Whole-graph inventory persistence.
//!
//! The entire [`Inventory`] (catalog, nested waiting lists, customer list) is
//! written and read as one JSON record. Restoring is best-effort: any I/O or
//! decoding failure is logged and reported as "nothing to restore", so the
//! caller keeps its empty default inventory.

pub mod file;
pub mod in_memory;

pub use file::FileInventoryStore;
pub use in_memory::InMemoryInventoryStore;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_inventory::Inventory;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no persisted inventory at {0}")]
    Missing(PathBuf),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("corrupt or incompatible inventory record: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Persisted record layout.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot<I> {
    saved_at: DateTime<Utc>,
    inventory: I,
}

pub(crate) fn encode(inventory: &Inventory) -> Result<Vec<u8>, PersistenceError> {
    let snapshot = Snapshot {
        saved_at: Utc::now(),
        inventory,
    };
    serde_json::to_vec_pretty(&snapshot).map_err(PersistenceError::Encode)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Inventory, PersistenceError> {
    let snapshot: Snapshot<Inventory> =
        serde_json::from_slice(bytes).map_err(PersistenceError::Decode)?;
    tracing::debug!(saved_at = %snapshot.saved_at, "decoded inventory record");
    Ok(snapshot.inventory)
}

/// Storage for the single persisted inventory record.
///
/// Accessed at most twice per session: [`InventoryStore::restore`] at start-up
/// and [`InventoryStore::save`] at shutdown.
pub trait InventoryStore: Send + Sync {
    /// Persist the full inventory graph, replacing any previous record.
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError>;

    /// Read the persisted record, surfacing the reason on failure.
    fn load(&self) -> Result<Inventory, PersistenceError>;

    /// Read the persisted record, degrading every failure to `None`.
    fn restore(&self) -> Option<Inventory> {
        match self.load() {
            Ok(inventory) => {
                tracing::info!(
                    titles = inventory.catalog().size(),
                    customers = inventory.customers().size(),
                    "inventory restored"
                );
                Some(inventory)
            }
            Err(PersistenceError::Missing(path)) => {
                tracing::info!(path = %path.display(), "no saved inventory; starting empty");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "restore failed; starting empty");
                None
            }
        }
    }
}

impl<S: InventoryStore + ?Sized> InventoryStore for &S {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        (**self).save(inventory)
    }

    fn load(&self) -> Result<Inventory, PersistenceError> {
        (**self).load()
    }
}
