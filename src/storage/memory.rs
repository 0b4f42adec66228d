//! In-memory storage fake for tests and ephemeral usage.

use std::collections::HashMap;

use super::{Result, StoragePort};

/// Keeps every collection in a process-local map. Nothing survives the
/// process; useful as a test double for [`StoragePort`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw payload under `key`, bypassing the store. Lets tests
    /// stage malformed data the way a corrupted medium would present it.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl StoragePort for MemoryStorage {
    fn read(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
