//! Persistence adapter: full-library snapshots in a key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor keeps one record, the whole album collection as JSON text,
//! under a single key. Every save rewrites that record; there are no deltas
//! and no transactions. A failed save leaves the in-memory library untouched
//! so edits stay visible for the session even when they are not durable.
//!
//! On load, a missing record, a backend error, and text that does not parse
//! all mean "no prior data". The caller decides whether to seed sample
//! content.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};

use crate::doc::Album;
use crate::error::{PersistError, StoreError};

/// `DOMException.code` for a quota failure in Chromium and WebKit.
const DOM_QUOTA_CODE: u16 = 22;

/// `DOMException.code` for a quota failure in Gecko.
const DOM_QUOTA_CODE_GECKO: u16 = 1014;

/// A string key-value backend.
pub trait KeyValueStore {
    /// Read the value for `key`. `Ok(None)` means the key has never been set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] when the backend is full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// =============================================================
// In-memory backend
// =============================================================

/// `HashMap` backend with an optional total capacity in bytes (keys + values).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes which would push it past `bytes`.
    #[must_use]
    pub fn with_capacity_bytes(bytes: usize) -> Self {
        Self { capacity: Some(bytes), ..Self::default() }
    }

    /// Change the capacity limit. `None` removes it.
    pub fn set_capacity_bytes(&mut self, bytes: Option<usize>) {
        self.capacity = bytes;
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored text for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Bytes used if `key` held `value` and every other entry stayed put.
    fn usage_with(&self, key: &str, value: &str) -> usize {
        let others: usize = self
            .entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        others + key.len() + value.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(cap) = self.capacity {
            if self.usage_with(key, value) > cap {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// =============================================================
// Browser backend
// =============================================================

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct WebStore {
    storage: web_sys::Storage,
}

impl WebStore {
    /// Bind to the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] outside a browser window or when
    /// storage is disabled.
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable("localStorage disabled".into())),
            Err(e) => Err(classify_js_error(&e)),
        }
    }
}

impl KeyValueStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|e| classify_js_error(&e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|e| classify_js_error(&e))
    }
}

fn classify_js_error(err: &JsValue) -> StoreError {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        let name = dom.name();
        let code = dom.code();
        if name == "QuotaExceededError"
            || name == "NS_ERROR_DOM_QUOTA_REACHED"
            || code == DOM_QUOTA_CODE
            || code == DOM_QUOTA_CODE_GECKO
        {
            return StoreError::QuotaExceeded;
        }
        return StoreError::Unavailable(format!("{name}: {}", dom.message()));
    }
    if let Some(js) = err.dyn_ref::<js_sys::Error>() {
        return StoreError::Unavailable(String::from(js.message()));
    }
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// =============================================================
// Persistence
// =============================================================

/// Snapshot writer/reader bound to one key of a backend.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    key: String,
    degraded: bool,
}

impl<S: KeyValueStore> Persistence<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), degraded: false }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Whether the most recent save failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Write the whole album collection.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when encoding fails or the backend refuses the
    /// write. The caller's in-memory state is not affected either way.
    pub fn save(&mut self, albums: &[Album]) -> Result<(), PersistError> {
        let result = serde_json::to_string(albums)
            .map_err(PersistError::from)
            .and_then(|raw| self.store.set(&self.key, &raw).map_err(PersistError::from));
        self.degraded = result.is_err();
        result
    }

    /// Read the album collection. `None` covers a missing record, an
    /// unreadable backend, and text that does not parse.
    #[must_use]
    pub fn load(&self) -> Option<Vec<Album>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, key = %self.key, "storage read failed; starting fresh");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Album>>(&raw) {
            Ok(albums) => Some(albums),
            Err(e) => {
                warn!(error = %e, key = %self.key, bytes = raw.len(), "discarding malformed album snapshot");
                None
            }
        }
    }
}
