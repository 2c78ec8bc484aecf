//! Key-Value Storage
//!
//! Synchronous string storage behind a trait so the favorites store can
//! run against `window.localStorage` in the browser and memory in tests.

use crate::error::{Error, Result};

/// Minimal synchronous key-value persistence
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(Error::StorageUnavailable)?
            .local_storage()
            .map_err(|_| Error::StorageUnavailable)?
            .ok_or(Error::StorageUnavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| Error::StorageRead {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage_write(key, format!("{:?}", e)))
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
