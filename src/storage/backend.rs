use super::StoreError;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Raw string-keyed persistence used by [`super::KeyValueStore`].
///
/// Implementations never interpret values; JSON encoding happens one layer up.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`.
///
/// The storage handle is looked up on every call: browsers may revoke access
/// (private mode, cleared site data) while the page is open.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

fn backend_error(key: &str, err: wasm_bindgen::JsValue) -> StoreError {
    let reason = js_sys::Reflect::get(&err, &"name".into())
        .ok()
        .and_then(|n| n.as_string())
        .unwrap_or_else(|| format!("{err:?}"));

    if reason == "QuotaExceededError" {
        StoreError::QuotaExceeded {
            key: key.to_string(),
        }
    } else {
        StoreError::Backend {
            key: key.to_string(),
            reason,
        }
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| backend_error(key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| backend_error(key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| backend_error(key, e))
    }
}

/// In-process map, used on the host and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<BTreeMap<String, String>>,
    /// Total bytes (keys + values) allowed, like the browser's per-origin quota.
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: Mutex::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.items.lock().map_err(|_| StoreError::Unavailable)
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get_item("k").expect("get"), None);

        backend.set_item("k", "v1").expect("set");
        backend.set_item("k", "v2").expect("overwrite");
        assert_eq!(backend.get_item("k").expect("get").as_deref(), Some("v2"));

        backend.remove_item("k").expect("remove");
        backend.remove_item("k").expect("removing twice is fine");
        assert_eq!(backend.get_item("k").expect("get"), None);
    }

    #[test]
    fn test_memory_backend_quota_rejects_oversized_write() {
        let backend = MemoryBackend::with_quota(8);
        backend.set_item("a", "1234").expect("fits");

        let err = backend.set_item("b", "12345").expect_err("over quota");
        assert!(matches!(err, StoreError::QuotaExceeded { ref key } if key == "b"));

        // Overwriting an existing key only counts the new value.
        backend.set_item("a", "1234567").expect("replacement fits");
    }
}
