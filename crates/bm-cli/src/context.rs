use bm_core::{Storage, StorageConfig};

/// Application context that gets passed to command handlers
///
/// Commands get the storage location from here instead of reading the
/// environment themselves, so tests can point them at a temporary directory.
pub struct Context {
    storage: Storage,
}

impl Context {
    /// Create a context for the given storage location
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            storage: config.storage(),
        }
    }

    /// Create a context from BM_STORAGE_HOME / BM_STORAGE_FILE_NAME
    pub fn from_env() -> Self {
        Self::new(&StorageConfig::from_env())
    }

    /// Get the book storage
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
