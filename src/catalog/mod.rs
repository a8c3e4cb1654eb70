pub mod data;

use crate::models::{Announcement, Club, Event, ItemId};
use crate::render::{Badge, BadgeTone, DetailView};
use crate::storage::StorageKey;
use crate::util::format_datetime;
use strum::{AsRefStr, Display};

/// The three static domains served by the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum CatalogKind {
    Announcements,
    Clubs,
    Events,
}

/// Label of the primary card action before and after the user takes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionLabels {
    pub idle: &'static str,
    pub done: &'static str,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Announcements,
        CatalogKind::Clubs,
        CatalogKind::Events,
    ];

    pub fn selection_key(self) -> StorageKey {
        match self {
            CatalogKind::Announcements => StorageKey::SavedAnnouncements,
            CatalogKind::Clubs => StorageKey::JoinedClubs,
            CatalogKind::Events => StorageKey::RegisteredEvents,
        }
    }

    pub fn action_labels(self) -> ActionLabels {
        match self {
            CatalogKind::Announcements => ActionLabels {
                idle: "Save",
                done: "Saved",
            },
            CatalogKind::Clubs => ActionLabels {
                idle: "Join club",
                done: "Joined",
            },
            CatalogKind::Events => ActionLabels {
                idle: "Register",
                done: "Registered",
            },
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "Announcement saved successfully.",
            CatalogKind::Clubs => "Joined club successfully.",
            CatalogKind::Events => "Event registered successfully.",
        }
    }

    pub fn already_selected_message(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "Already saved.",
            CatalogKind::Clubs => "Already joined.",
            CatalogKind::Events => "Already registered.",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "No announcements found.",
            CatalogKind::Clubs => "No clubs found.",
            CatalogKind::Events => "No events found.",
        }
    }

    /// Dashboard placeholder when the selection set is empty.
    pub fn nothing_selected_message(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "No saved announcements yet.",
            CatalogKind::Clubs => "No joined clubs yet.",
            CatalogKind::Events => "No registered events yet.",
        }
    }

    /// Dashboard section heading.
    pub fn selection_title(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "Saved announcements",
            CatalogKind::Clubs => "Joined clubs",
            CatalogKind::Events => "Registered events",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self {
            CatalogKind::Announcements => "Search announcements...",
            CatalogKind::Clubs => "Search clubs...",
            CatalogKind::Events => "Search by title, description or location...",
        }
    }

    /// Fixed category vocabulary, in select-option order.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            CatalogKind::Announcements => &["Academic", "Club", "Emergency", "Event"],
            CatalogKind::Clubs => &["Tech", "Sports", "Arts", "Community"],
            CatalogKind::Events => &["Competition", "Workshop", "Seminar", "Social"],
        }
    }
}

/// A read-only record shown as a card.
pub trait CatalogItem {
    const KIND: CatalogKind;

    fn id(&self) -> ItemId;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;

    /// Text fields the search box matches against.
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title(), self.description()]
    }

    fn badges(&self) -> Vec<Badge> {
        vec![Badge::category(self.category())]
    }

    fn meta_line(&self) -> String;

    fn footer_note(&self, _selected: bool) -> Option<String> {
        None
    }

    fn details(&self, selected: bool) -> DetailView;

    /// One-line dashboard row.
    fn summary_line(&self) -> String {
        format!("{} ({})", self.title(), self.category())
    }
}

impl CatalogItem for Announcement {
    const KIND: CatalogKind = CatalogKind::Announcements;

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn badges(&self) -> Vec<Badge> {
        let mut badges = vec![Badge::category(&self.category)];
        if self.is_new {
            badges.push(Badge {
                label: "New".to_string(),
                tone: BadgeTone::Highlight,
            });
        }
        badges
    }

    fn meta_line(&self) -> String {
        format!("Date: {}", self.date)
    }

    fn details(&self, _selected: bool) -> DetailView {
        DetailView {
            title: self.title.clone(),
            subtitle: format!("Category: {} · Date: {}", self.category, self.date),
            body: self.description.clone(),
            notes: vec![],
        }
    }
}

impl CatalogItem for Club {
    const KIND: CatalogKind = CatalogKind::Clubs;

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn meta_line(&self) -> String {
        format!("Members: {}+", self.members_count)
    }

    fn details(&self, _selected: bool) -> DetailView {
        DetailView {
            title: self.name.clone(),
            subtitle: format!("Category: {}", self.category),
            body: self.description.clone(),
            notes: vec![
                self.meta_line(),
                "Activities: Weekly meetings, project groups, and campus events.".to_string(),
            ],
        }
    }
}

impl Event {
    /// Only this browser's registration is known, so the count is 0 or 1.
    fn capacity_line(&self, registered: bool) -> String {
        format!("Capacity: {}/{}", u32::from(registered), self.capacity)
    }
}

impl CatalogItem for Event {
    const KIND: CatalogKind = CatalogKind::Events;

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }

    fn meta_line(&self) -> String {
        format!("{} · {}", format_datetime(&self.start), self.location)
    }

    fn footer_note(&self, selected: bool) -> Option<String> {
        Some(self.capacity_line(selected))
    }

    fn details(&self, selected: bool) -> DetailView {
        DetailView {
            title: self.title.clone(),
            subtitle: self.meta_line(),
            body: self.description.clone(),
            notes: vec![self.capacity_line(selected)],
        }
    }

    fn summary_line(&self) -> String {
        format!("{} @ {}", self.title, self.location)
    }
}
