use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

pub type ItemId = u32;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Club {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "membersCount")]
    pub members_count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// Local time, `YYYY-MM-DDTHH:MM`.
    pub start: String,
    pub end: String,
    pub capacity: u32,
}

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Ids the user saved/joined/registered, in the order they were added.
///
/// Persisted as a bare JSON array; duplicates in stored data collapse on decode.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<ItemId>", into = "Vec<ItemId>")]
pub struct SelectionSet(Vec<ItemId>);

impl SelectionSet {
    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    /// Returns `false` (and changes nothing) when `id` is already present.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ItemId>> for SelectionSet {
    fn from(ids: Vec<ItemId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<ItemId> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

impl FromIterator<ItemId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut set = SelectionSet::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_insert_is_idempotent() {
        let mut once = SelectionSet::default();
        assert!(once.insert(4));

        let mut twice = SelectionSet::default();
        assert!(twice.insert(4));
        assert!(!twice.insert(4));

        assert_eq!(once, twice);
        assert_eq!(twice.ids(), &[4]);
    }

    #[test]
    fn test_selection_decode_collapses_duplicates() {
        let set: SelectionSet = serde_json::from_str("[2, 1, 2, 3, 1]").expect("should parse");
        assert_eq!(set.ids(), &[2, 1, 3]);
        assert_eq!(serde_json::to_string(&set).expect("encode"), "[2,1,3]");
    }

    #[test]
    fn test_selection_rejects_non_integer_ids() {
        assert!(serde_json::from_str::<SelectionSet>(r#"["1"]"#).is_err());
        assert!(serde_json::from_str::<SelectionSet>("{}").is_err());
    }

    #[test]
    fn test_theme_wire_format_and_toggle() {
        assert_eq!(serde_json::to_string(&Theme::Dark).expect("encode"), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").expect("decode"),
            Theme::Light
        );
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_ref(), "light");
    }

    #[test]
    fn test_catalog_records_use_camel_case_fixture_fields() {
        let json = r#"{
            "id": 2,
            "name": "Campus Football Club",
            "description": "Weekly training.",
            "category": "Sports",
            "membersCount": 32
        }"#;
        let club: Club = serde_json::from_str(json).expect("club should parse");
        assert_eq!(club.members_count, 32);

        let v = serde_json::to_value(Announcement {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            category: "Academic".to_string(),
            date: "2025-03-12".to_string(),
            is_new: true,
        })
        .expect("should serialize");
        assert_eq!(v["isNew"], true);
    }
}
