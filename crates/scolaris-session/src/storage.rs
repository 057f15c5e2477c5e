//! Key-value storage backing session persistence.
//!
//! On `wasm32` this maps onto the browser's `localStorage` and
//! `sessionStorage`. Everywhere else an in-memory map stands in, which is
//! what tests run against.

use serde::{de::DeserializeOwned, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
use std::fmt;

/// Which browser storage area to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Persists across browser sessions.
    Local,
    /// Cleared when the tab closes. Sessions live here.
    #[default]
    Session,
}

/// Typed storage handle.
#[derive(Debug)]
pub struct Storage {
    kind: StorageKind,
    #[cfg(not(target_arch = "wasm32"))]
    memory: std::sync::Mutex<HashMap<String, String>>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(StorageKind::Session)
    }
}

impl Storage {
    /// Create a storage handle for the given area.
    #[must_use]
    pub fn new(kind: StorageKind) -> Self {
        Self {
            kind,
            #[cfg(not(target_arch = "wasm32"))]
            memory: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Handle on the session-scoped area.
    #[must_use]
    pub fn session() -> Self {
        Self::new(StorageKind::Session)
    }

    /// Handle on the persistent area.
    #[must_use]
    pub fn local() -> Self {
        Self::new(StorageKind::Local)
    }

    /// The area this handle targets.
    #[must_use]
    pub const fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Read a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    /// Write a raw value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.set_wasm(key, value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Remove a value.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.remove_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .remove(key);
            Ok(())
        }
    }

    /// Read and JSON-decode a value. `Ok(None)` when the key is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key) {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// JSON-encode and write a value.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.set(key, &json)
    }

    #[cfg(target_arch = "wasm32")]
    fn area(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.kind {
            StorageKind::Local => window.local_storage().ok()?,
            StorageKind::Session => window.session_storage().ok()?,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn get_wasm(&self, key: &str) -> Option<String> {
        self.area()?.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn set_wasm(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.area()
            .ok_or(StorageError::NotAvailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    #[cfg(target_arch = "wasm32")]
    fn remove_wasm(&self, key: &str) -> Result<(), StorageError> {
        self.area()
            .ok_or(StorageError::NotAvailable)?
            .remove_item(key)
            .map_err(|_| StorageError::AccessDenied)
    }
}

/// Storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage exists but cannot be reached, e.g. private browsing.
    NotAvailable,
    /// Quota exceeded on write.
    QuotaExceeded,
    /// Access denied.
    AccessDenied,
    /// JSON encode/decode failure.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "storage not available"),
            Self::QuotaExceeded => write!(f, "storage quota exceeded"),
            Self::AccessDenied => write!(f, "storage access denied"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}
