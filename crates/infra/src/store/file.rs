use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_inventory::Inventory;

use super::{InventoryStore, PersistenceError, decode, encode};

/// Inventory record kept in a single file on disk.
#[derive(Debug, Clone)]
pub struct FileInventoryStore {
    path: PathBuf,
}

impl FileInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryStore for FileInventoryStore {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let bytes = encode(inventory)?;
        std::fs::write(&self.path, &bytes).map_err(|err| self.io_error(err))?;
        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "inventory saved");
        Ok(())
    }

    fn load(&self) -> Result<Inventory, PersistenceError> {
        let bytes = std::fs::read(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => PersistenceError::Missing(self.path.clone()),
            _ => self.io_error(err),
        })?;
        decode(&bytes)
    }
}
