use std::path::PathBuf;
use std::sync::RwLock;

use stockroom_inventory::Inventory;

use super::{InventoryStore, PersistenceError, decode, encode};

/// In-memory inventory record.
///
/// Intended for tests/dev. Goes through the same encoding as the file store.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    record: RwLock<Option<Vec<u8>>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with raw record bytes (e.g. a corrupt record).
    pub fn with_record(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            record: RwLock::new(Some(bytes.into())),
        }
    }

    /// Copy of the raw record, if one has been saved.
    pub fn record(&self) -> Option<Vec<u8>> {
        self.record.read().ok().and_then(|record| record.clone())
    }

    fn location() -> PathBuf {
        PathBuf::from("<memory>")
    }

    fn poisoned() -> PersistenceError {
        PersistenceError::Io {
            path: Self::location(),
            source: std::io::Error::other("lock poisoned"),
        }
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let bytes = encode(inventory)?;
        let mut record = self.record.write().map_err(|_| Self::poisoned())?;
        *record = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Inventory, PersistenceError> {
        let record = self.record.read().map_err(|_| Self::poisoned())?;
        match record.as_deref() {
            Some(bytes) => decode(bytes),
            None => Err(PersistenceError::Missing(Self::location())),
        }
    }
}
