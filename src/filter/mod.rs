use crate::catalog::CatalogItem;

/// Category part of a catalog query. `"all"` is the wildcard select value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Already lower-cased.
    search: String,
    category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new(search: &str, category: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            category: CategoryFilter::parse(category),
        }
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        self.category.matches(item.category())
            && (self.search.is_empty()
                || item
                    .searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&self.search)))
    }
}

/// Items matching `query`, in catalog order.
pub fn filter_catalog<'a, T: CatalogItem>(items: &'a [T], query: &CatalogQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}
