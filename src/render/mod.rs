//! Catalog records -> card view-models, and the card's primary action.
//!
//! Everything here is plain data. `components::card_list` maps it to DOM.

use crate::catalog::{CatalogItem, CatalogKind};
use crate::models::{ItemId, SelectionSet};
use crate::notify::ToastKind;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Category,
    Highlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn category(label: &str) -> Self {
        Self {
            label: label.to_string(),
            tone: BadgeTone::Category,
        }
    }
}

/// Content of the details overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub notes: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionState {
    pub label: &'static str,
    pub disabled: bool,
}

impl ActionState {
    pub fn for_membership(kind: CatalogKind, selected: bool) -> Self {
        let labels = kind.action_labels();
        if selected {
            Self {
                label: labels.done,
                disabled: true,
            }
        } else {
            Self {
                label: labels.idle,
                disabled: false,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: ItemId,
    pub title: String,
    pub badges: Vec<Badge>,
    pub description: String,
    pub meta: String,
    pub footer_note: Option<String>,
    pub action: ActionState,
    pub details: DetailView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardListView {
    Empty { message: &'static str },
    Cards(Vec<CardView>),
}

pub fn card_view<T: CatalogItem>(item: &T, selection: &SelectionSet) -> CardView {
    let selected = selection.contains(item.id());
    CardView {
        id: item.id(),
        title: item.title().to_string(),
        badges: item.badges(),
        description: item.description().to_string(),
        meta: item.meta_line(),
        footer_note: item.footer_note(selected),
        action: ActionState::for_membership(T::KIND, selected),
        details: item.details(selected),
    }
}

/// Full replacement of the list; no diffing against a previous render.
pub fn render_cards<T: CatalogItem>(items: &[&T], selection: &SelectionSet) -> CardListView {
    if items.is_empty() {
        return CardListView::Empty {
            message: T::KIND.empty_message(),
        };
    }

    CardListView::Cards(items.iter().map(|item| card_view(*item, selection)).collect())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Added,
    AlreadySelected,
}

impl SelectOutcome {
    pub fn notification(self, kind: CatalogKind) -> (&'static str, ToastKind) {
        match self {
            SelectOutcome::Added => (kind.success_message(), ToastKind::Success),
            SelectOutcome::AlreadySelected => (kind.already_selected_message(), ToastKind::Error),
        }
    }
}

/// Adds `id` to the persisted selection of `kind`.
///
/// The set is re-read from the store so a stale in-memory copy cannot drop
/// ids. Nothing is written when `id` is already present.
pub fn select_item(
    store: &KeyValueStore,
    kind: CatalogKind,
    id: ItemId,
) -> (SelectionSet, SelectOutcome) {
    let mut selection = store.load(kind.selection_key(), SelectionSet::default());

    if !selection.insert(id) {
        return (selection, SelectOutcome::AlreadySelected);
    }

    store.save(kind.selection_key(), &selection);
    (selection, SelectOutcome::Added)
}
