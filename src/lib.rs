//! Campus portal: announcements, events and clubs with per-browser selections.
//!
//! Catalog filtering, card view-models, the toast queue and dashboard
//! summaries are plain Rust. Leptos components in `components`, `pages` and
//! `app` wire them to the DOM, and `storage` persists to `localStorage`.

mod app;
pub mod catalog;
mod components;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod models;
pub mod notify;
mod pages;
pub mod render;
mod state;
pub mod storage;
mod util;

pub use app::App;

use crate::app::chrome::{apply_theme, load_theme};
use crate::config::PortalConfig;
use crate::storage::KeyValueStore;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = PortalConfig::from_window();
    let store = KeyValueStore::browser(&config.storage_namespace);

    // Before mount, so the first paint already uses the stored theme.
    apply_theme(load_theme(&store));

    mount_to_body(move || view! { <App config=config store=store /> });
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::events;
    use crate::catalog::CatalogKind;
    use crate::filter::{filter_catalog, CatalogQuery};
    use crate::render::{render_cards, select_item, CardListView, SelectOutcome};

    #[test]
    fn test_register_then_rerender_disables_the_card() {
        let store = KeyValueStore::in_memory();
        let catalog = events();

        let (selection, outcome) = select_item(&store, CatalogKind::Events, 1);
        assert_eq!(outcome, SelectOutcome::Added);

        let matched = filter_catalog(&catalog, &CatalogQuery::new("", "all"));
        let CardListView::Cards(cards) = render_cards(&matched, &selection) else {
            panic!("expected cards");
        };
        let card = cards.iter().find(|c| c.id == 1).expect("event 1");
        assert_eq!(card.action.label, "Registered");
        assert!(card.action.disabled);
        assert!(cards.iter().filter(|c| c.id != 1).all(|c| !c.action.disabled));
    }
}
