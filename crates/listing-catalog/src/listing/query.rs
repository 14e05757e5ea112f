//! Query state: the user's current search, category, sort, and wishlist.

use crate::catalog::ALL_CATEGORIES;
use crate::listing::Wishlist;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Product field the listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive name order.
    #[default]
    Name,
    /// Current price.
    Price,
    /// Average rating.
    Rating,
}

impl SortKey {
    /// Every key, in the order the sort selector lists them.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Price, SortKey::Rating];

    /// Parse a selector value. Unknown values fall back to [`SortKey::Name`].
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => SortKey::Name,
        }
    }

    /// The selector value (e.g., "price").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    /// The selector option label (e.g., "Price").
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Short value (e.g., "asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Direction button label.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }

    /// Orient a natural-order comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: every category, or one exact category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a selector value; "All" selects every category.
    pub fn parse(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        }
    }

    /// The selector value.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Check if a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user has selected in the listing controls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    /// Selected category.
    pub category: CategoryFilter,
    /// Free-text search, matched case-insensitively against name and brand.
    pub search: String,
    /// Sort field.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Wishlisted product ids.
    pub wishlist: Wishlist,
}

impl QueryState {
    /// Create the default state: all categories, no search, name ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort field and direction.
    pub fn with_sort(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price"), SortKey::Price);
        assert_eq!(SortKey::parse("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse("name"), SortKey::Name);
        assert_eq!(SortKey::parse("popularity"), SortKey::Name);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggled().toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.label(), "Descending");
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        let laptop = CategoryFilter::parse("Laptop");
        assert!(laptop.matches("Laptop"));
        assert!(!laptop.matches("laptop"));
        assert!(CategoryFilter::All.matches("anything"));
        assert_eq!(laptop.as_str(), "Laptop");
    }

    #[test]
    fn test_category_filter_serde() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let parsed: CategoryFilter = serde_json::from_str("\"Mobile\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Named("Mobile".to_string()));
    }

    #[test]
    fn test_query_builder() {
        let query = QueryState::new()
            .with_search("apple")
            .with_category(CategoryFilter::parse("Mobile"))
            .with_sort(SortKey::Price, SortOrder::Descending);

        assert_eq!(query.search, "apple");
        assert_eq!(query.category.as_str(), "Mobile");
        assert_eq!(query.sort_by, SortKey::Price);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert!(query.wishlist.is_empty());
    }
}
