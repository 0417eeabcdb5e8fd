//! Persistence Boundary
//!
//! Key-value storage behind a trait so the store can be tested off-browser.

/// Minimal key-value contract over the runtime's persistent storage
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` adapter
///
/// Failures (storage disabled, quota exceeded) are swallowed: `get` answers
/// `None` and `set` drops the write, so the app degrades to in-memory-only
/// operation for the session.
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}
