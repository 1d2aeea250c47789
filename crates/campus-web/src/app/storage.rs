use serde::{Deserialize, Serialize};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Generic browser storage abstraction that supports localStorage,
/// sessionStorage, or no-op mode. Off web (unit tests), every operation is
/// a no-op so callers never need their own cfg gates.
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    /// Create a new BrowserStorage instance with the specified storage type
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    /// Session-persistent local storage, the default for app state.
    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    #[cfg(feature = "web")]
    fn backing(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.storage_type {
            StorageType::Local => window.local_storage().ok().flatten(),
            StorageType::Session => window.session_storage().ok().flatten(),
            StorageType::None => None,
        }
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backing()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key, "failed to read storage item");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.storage_type == StorageType::None {
            return Ok(());
        }
        #[cfg(feature = "web")]
        {
            let storage = self.backing().ok_or_else(|| "Storage not available".to_string())?;
            storage.set_item(key, value).map_err(|e| {
                let err_msg = format!("Failed to set storage item '{}': {:?}", key, e);
                tracing::warn!("{}", err_msg);
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Remove a value from storage
    pub fn remove(&self, key: &str) -> Result<(), String> {
        if self.storage_type == StorageType::None {
            return Ok(());
        }
        #[cfg(feature = "web")]
        {
            let storage = self.backing().ok_or_else(|| "Storage not available".to_string())?;
            storage.remove_item(key).map_err(|e| {
                let err_msg = format!("Failed to remove storage item '{}': {:?}", key, e);
                tracing::warn!("{}", err_msg);
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Get and deserialize a JSON value from storage
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse JSON from storage");
                None
            }
        }
    }

    /// Serialize and set a JSON value in storage
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }
}
