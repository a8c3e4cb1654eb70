use crate::catalog::CatalogItem;
use crate::models::{ItemId, SelectionSet};
use crate::storage::{KeyValueStore, StorageKey};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please enter a name.")]
    EmptyName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub id: ItemId,
    pub text: String,
}

/// Selected items of one catalog, in catalog order, truncated to `limit`.
pub fn summary_rows<T: CatalogItem>(
    catalog: &[T],
    selection: &SelectionSet,
    limit: usize,
) -> Vec<SummaryRow> {
    catalog
        .iter()
        .filter(|item| selection.contains(item.id()))
        .take(limit)
        .map(|item| SummaryRow {
            id: item.id(),
            text: item.summary_line(),
        })
        .collect()
}

pub fn greeting(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(format!("Welcome, {name}"))
    }
}

pub fn validate_display_name(input: &str) -> Result<String, ProfileError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ProfileError::EmptyName);
    }
    Ok(name.to_string())
}

/// Validates and persists the display name; nothing is written on error.
pub fn save_display_name(store: &KeyValueStore, input: &str) -> Result<String, ProfileError> {
    let name = validate_display_name(input)?;
    store.save(StorageKey::Username, &name);
    Ok(name)
}

pub fn load_display_name(store: &KeyValueStore) -> String {
    store.load(StorageKey::Username, String::new())
}
