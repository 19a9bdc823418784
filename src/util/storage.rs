//! `localStorage` / `sessionStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme, cookie consent, and the selected course are the only persisted
//! values. Storage can be missing or throw (private browsing, quota), so
//! every call is best-effort: reads yield `None`, failed writes are logged.
//! Outside the browser every call is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Survives restarts.
    Local,
    /// Cleared with the tab.
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    match storage {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("storage: {area:?} unavailable: {err:?}");
            None
        }
    }
}

/// Read a raw string value.
pub fn load(area: Area, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

/// Write a raw string value.
pub fn save(area: Area, key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage(area) else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("storage: failed to write `{key}`: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
    }
}

/// Read and decode a JSON value. Undecodable values are logged and ignored.
pub fn load_json<T: DeserializeOwned>(area: Area, key: &str) -> Option<T> {
    let raw = load(area, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("storage: `{key}` is not valid JSON: {err}");
            None
        }
    }
}

/// Encode and write a JSON value.
pub fn save_json<T: Serialize>(area: Area, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save(area, key, &raw),
        Err(err) => log::warn!("storage: failed to encode `{key}`: {err}"),
    }
}
