//! The storage seam shared by every backend.

use thiserror::Error;

/// Failure to write or delete a persisted value.
///
/// Reads never fail: an unreadable slot is reported as absent.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string slots addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Current value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
