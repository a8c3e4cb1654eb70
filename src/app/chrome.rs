//! Cross-page chrome: theme and navigation memory.

use crate::models::Theme;
use crate::storage::{KeyValueStore, StorageKey};

pub const HOME_PAGE: &str = "index.html";
const THEME_ATTRIBUTE: &str = "data-theme";

pub fn load_theme(store: &KeyValueStore) -> Theme {
    store.load(StorageKey::Theme, Theme::default())
}

/// Persists and returns the opposite of `current`.
pub fn toggle_theme(store: &KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(StorageKey::Theme, &next);
    next
}

/// Sets `data-theme` on `<html>`. No document (or no root element) means no-op.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_ref()) {
        leptos::logging::warn!("[chrome] cannot apply theme {theme}: {e:?}");
    }
}

/// Page identifier for a route path: `/` -> `index.html`, `/clubs` -> `clubs.html`.
pub fn page_identifier(path: &str) -> String {
    let last = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('/')
        .find(|segment| !segment.is_empty());

    match last {
        None => HOME_PAGE.to_string(),
        Some(segment) if segment.contains('.') => segment.to_string(),
        Some(segment) => format!("{segment}.html"),
    }
}

pub fn load_last_visited(store: &KeyValueStore) -> String {
    store.load(StorageKey::LastVisited, HOME_PAGE.to_string())
}

/// Overwrites navigation memory with `page` and returns what it held before.
pub fn record_last_visited(store: &KeyValueStore, page: &str) -> String {
    let previous = load_last_visited(store);
    store.save(StorageKey::LastVisited, page);
    previous
}
