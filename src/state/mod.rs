use crate::app::chrome::{load_last_visited, load_theme, toggle_theme};
use crate::catalog::CatalogKind;
use crate::config::PortalConfig;
use crate::dashboard::load_display_name;
use crate::models::{SelectionSet, Theme};
use crate::notify::Notifier;
use crate::storage::KeyValueStore;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub config: StoredValue<PortalConfig>,
    pub store: StoredValue<KeyValueStore>,

    pub theme: RwSignal<Theme>,
    pub username: RwSignal<String>,

    /// Page recorded before the current one.
    pub previous_page: RwSignal<String>,

    /// Disposable copies of the persisted selection sets.
    pub saved_announcements: RwSignal<SelectionSet>,
    pub joined_clubs: RwSignal<SelectionSet>,
    pub registered_events: RwSignal<SelectionSet>,

    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: PortalConfig, store: KeyValueStore) -> Self {
        let selection = |kind: CatalogKind| {
            RwSignal::new(store.load(kind.selection_key(), SelectionSet::default()))
        };

        Self {
            theme: RwSignal::new(load_theme(&store)),
            username: RwSignal::new(load_display_name(&store)),
            previous_page: RwSignal::new(load_last_visited(&store)),
            saved_announcements: selection(CatalogKind::Announcements),
            joined_clubs: selection(CatalogKind::Clubs),
            registered_events: selection(CatalogKind::Events),
            notifier: Notifier::new(config.toast_visible_ms, config.toast_fade_ms),
            config: StoredValue::new(config),
            store: StoredValue::new(store),
        }
    }

    pub fn selection(&self, kind: CatalogKind) -> RwSignal<SelectionSet> {
        match kind {
            CatalogKind::Announcements => self.saved_announcements,
            CatalogKind::Clubs => self.joined_clubs,
            CatalogKind::Events => self.registered_events,
        }
    }

    /// Re-reads one selection set from the store.
    pub fn reload_selection(&self, kind: CatalogKind) {
        let fresh = self
            .store
            .with_value(|store| store.load(kind.selection_key(), SelectionSet::default()));
        self.selection(kind).set(fresh);
    }

    /// Flips and persists the theme. `<html>` follows through the shell effect.
    pub fn toggle_theme(&self) {
        let current = self.theme.get_untracked();
        let next = self.store.with_value(|store| toggle_theme(store, current));
        self.theme.set(next);
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

/// App state, or `None` (with a warning) when `who` renders outside `App`.
pub(crate) fn use_app_state(who: &str) -> Option<AppState> {
    let state = use_context::<AppContext>().map(|ctx| ctx.0);
    if state.is_none() {
        leptos::logging::warn!("[state] {who} rendered without app state");
    }
    state
}
