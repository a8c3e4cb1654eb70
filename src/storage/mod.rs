mod backend;

pub use backend::{LocalStorageBackend, MemoryBackend, StorageBackend};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use strum::{AsRefStr, Display};
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "scms_";

/// One key per persisted concern. The physical key is `<namespace><name>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StorageKey {
    Username,
    Theme,
    SavedAnnouncements,
    RegisteredEvents,
    JoinedClubs,
    LastVisited,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage rejected `{key}`: {reason}")]
    Backend { key: String, reason: String },

    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },

    #[error("malformed value under `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON key-value store over a [`StorageBackend`].
///
/// `load`/`save`/`remove` never fail: reads fall back to the caller's default
/// and write failures are logged. A failed `save` is invisible to the caller,
/// so on-screen state can run ahead of what is actually persisted.
#[derive(Clone)]
pub struct KeyValueStore {
    backend: Arc<dyn StorageBackend>,
    namespace: Arc<str>,
}

impl KeyValueStore {
    pub fn new(backend: impl StorageBackend + 'static, namespace: &str) -> Self {
        Self {
            backend: Arc::new(backend),
            namespace: Arc::from(namespace),
        }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser(namespace: &str) -> Self {
        Self::new(LocalStorageBackend, namespace)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new(), DEFAULT_NAMESPACE)
    }

    pub fn physical_key(&self, key: StorageKey) -> String {
        format!("{}{}", self.namespace, key.as_ref())
    }

    /// Absent and empty values both read as `None`.
    pub fn try_load<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StoreError> {
        let physical = self.physical_key(key);
        let Some(raw) = self.backend.get_item(&physical)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: physical,
                source,
            })
    }

    pub fn load<T: DeserializeOwned>(&self, key: StorageKey, fallback: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                leptos::logging::warn!("[storage] load {key} failed, using fallback: {e}");
                fallback
            }
        }
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        let physical = self.physical_key(key);
        let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: physical.clone(),
            source,
        })?;
        self.backend.set_item(&physical, &json)
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            leptos::logging::error!("[storage] save {key} failed: {e}");
        }
    }

    pub fn remove(&self, key: StorageKey) {
        if let Err(e) = self.backend.remove_item(&self.physical_key(key)) {
            leptos::logging::error!("[storage] remove {key} failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SelectionSet, Theme};

    fn store_with(backend: MemoryBackend) -> (KeyValueStore, Arc<MemoryBackend>) {
        // Keep a second handle on the backend so tests can plant raw values.
        let backend = Arc::new(backend);
        let store = KeyValueStore {
            backend: backend.clone(),
            namespace: Arc::from(DEFAULT_NAMESPACE),
        };
        (store, backend)
    }

    #[test]
    fn test_physical_keys_are_namespaced() {
        let store = KeyValueStore::in_memory();
        assert_eq!(store.physical_key(StorageKey::Username), "scms_username");
        assert_eq!(store.physical_key(StorageKey::Theme), "scms_theme");
        assert_eq!(
            store.physical_key(StorageKey::SavedAnnouncements),
            "scms_saved_announcements"
        );
        assert_eq!(
            store.physical_key(StorageKey::RegisteredEvents),
            "scms_registered_events"
        );
        assert_eq!(store.physical_key(StorageKey::JoinedClubs), "scms_joined_clubs");
        assert_eq!(store.physical_key(StorageKey::LastVisited), "scms_last_visited");

        let custom = KeyValueStore::new(MemoryBackend::new(), "portal:");
        assert_eq!(custom.physical_key(StorageKey::Theme), "portal:theme");
    }

    #[test]
    fn test_load_never_written_returns_fallback() {
        let store = KeyValueStore::in_memory();
        assert_eq!(store.load(StorageKey::Username, String::new()), "");
        assert_eq!(
            store.load(StorageKey::LastVisited, "index.html".to_string()),
            "index.html"
        );
        assert_eq!(store.load(StorageKey::Theme, Theme::Light), Theme::Light);
        assert!(store
            .load(StorageKey::JoinedClubs, SelectionSet::default())
            .is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip_ignores_fallback() {
        let store = KeyValueStore::in_memory();

        store.save(StorageKey::Username, "Ada");
        assert_eq!(store.load(StorageKey::Username, "fallback".to_string()), "Ada");

        let value = serde_json::json!({"nested": [1, 2, {"x": null}], "s": "ok"});
        store.save(StorageKey::LastVisited, &value);
        assert_eq!(
            store.load(StorageKey::LastVisited, serde_json::Value::Null),
            value
        );
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = KeyValueStore::in_memory();
        store.save(StorageKey::Theme, &Theme::Dark);
        store.save(StorageKey::Theme, &Theme::Light);
        assert_eq!(store.load(StorageKey::Theme, Theme::Dark), Theme::Light);
    }

    #[test]
    fn test_malformed_and_empty_values_fall_back() {
        let (store, backend) = store_with(MemoryBackend::new());

        backend
            .set_item("scms_registered_events", "[1, 2")
            .expect("plant malformed json");
        assert!(matches!(
            store.try_load::<SelectionSet>(StorageKey::RegisteredEvents),
            Err(StoreError::Decode { .. })
        ));
        assert!(store
            .load(StorageKey::RegisteredEvents, SelectionSet::default())
            .is_empty());

        backend.set_item("scms_username", "").expect("plant empty");
        assert_eq!(store.load(StorageKey::Username, "anon".to_string()), "anon");

        // Wrong shape is malformed too.
        backend
            .set_item("scms_theme", "\"sepia\"")
            .expect("plant unknown theme");
        assert_eq!(store.load(StorageKey::Theme, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_failed_save_is_swallowed_and_keeps_previous_value() {
        let (store, _backend) = store_with(MemoryBackend::with_quota(40));

        store.save(StorageKey::Username, "Ada");
        let long_name = "x".repeat(64);
        assert!(matches!(
            store.try_save(StorageKey::Username, long_name.as_str()),
            Err(StoreError::QuotaExceeded { .. })
        ));

        // The swallowing variant must not panic.
        store.save(StorageKey::Username, long_name.as_str());
        assert_eq!(store.load(StorageKey::Username, String::new()), "Ada");
    }

    #[test]
    fn test_remove_deletes_and_tolerates_absent_key() {
        let store = KeyValueStore::in_memory();
        store.remove(StorageKey::Username);

        store.save(StorageKey::Username, "Ada");
        store.remove(StorageKey::Username);
        assert_eq!(store.load(StorageKey::Username, "gone".to_string()), "gone");
    }

    #[test]
    fn test_selection_sets_are_stored_as_plain_id_arrays() {
        let (store, backend) = store_with(MemoryBackend::new());

        let mut set = SelectionSet::default();
        set.insert(3);
        set.insert(1);
        store.save(StorageKey::JoinedClubs, &set);

        assert_eq!(
            backend.get_item("scms_joined_clubs").expect("get").as_deref(),
            Some("[3,1]")
        );
    }

    /// Backend whose storage area is gone, like a revoked `localStorage`.
    struct UnavailableBackend;

    impl StorageBackend for UnavailableBackend {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }

        fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_unavailable_backend_reads_fallback_and_swallows_writes() {
        let store = KeyValueStore::new(UnavailableBackend, DEFAULT_NAMESPACE);

        assert!(matches!(
            store.try_load::<String>(StorageKey::Username),
            Err(StoreError::Unavailable)
        ));
        assert_eq!(
            store.load(StorageKey::Username, "fallback".to_string()),
            "fallback"
        );
        assert_eq!(store.load(StorageKey::Theme, Theme::Dark), Theme::Dark);

        assert!(matches!(
            store.try_save(StorageKey::Username, "Ada"),
            Err(StoreError::Unavailable)
        ));
        store.save(StorageKey::Username, "Ada");
        store.remove(StorageKey::Username);
        assert_eq!(store.load(StorageKey::Username, String::new()), "");
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_store_roundtrip_username() {
        let store = KeyValueStore::browser("scms_test_");
        store.remove(StorageKey::Username);
        assert_eq!(store.load(StorageKey::Username, String::new()), "");

        store.save(StorageKey::Username, "Ada");
        assert_eq!(store.load(StorageKey::Username, String::new()), "Ada");

        store.remove(StorageKey::Username);
        assert_eq!(store.load(StorageKey::Username, String::new()), "");
    }
}
