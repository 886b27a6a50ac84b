//! Remembered form values.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! Cache is automatically cleared when the mini-app is closed, so the
//! calculators start fresh on a new launch but keep their values while
//! switching between views.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

/// Cache operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cached value")]
    SerializationFailed,
    #[error("failed to write to sessionStorage")]
    WriteFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    decode(&json)
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Store data, logging instead of failing.
pub fn remember<T: Serialize>(key: &str, data: &T) {
    if let Err(e) = set(key, data) {
        log::warn!("cache {}: {}", key, e);
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Option<T> {
    serde_json::from_str(json).ok()
}
