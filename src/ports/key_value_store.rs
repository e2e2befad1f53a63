//! Key-Value Store Port - Interface for the snapshot cache backend.
//!
//! The store is a plain string map. It has no notion of expiry; freshness
//! is decided by whoever reads the value.

use async_trait::async_trait;

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Port for a process-wide string-keyed store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `None` when nothing has been stored under the key
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_error_io_displays_cause() {
        let err = KeyValueError::IoError("permission denied".to_string());
        assert_eq!(err.to_string(), "IO error: permission denied");
    }
}
