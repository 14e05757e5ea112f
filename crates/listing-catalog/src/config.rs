//! Listing configuration.

use crate::catalog::ALL_CATEGORIES;
use crate::error::{ListingError, Result};
use crate::listing::{CategoryFilter, QueryState, SortKey, SortOrder};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Listing configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Page heading.
    pub title: String,

    /// Currency used to format prices.
    pub currency: Currency,

    /// Query state at mount.
    pub initial: InitialQuery,

    /// Message shown instead of the grid when nothing matches.
    pub no_results_message: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            title: "Product Listing".to_string(),
            currency: Currency::INR,
            initial: InitialQuery::default(),
            no_results_message: "No products found.".to_string(),
        }
    }
}

/// Starting values for the listing controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialQuery {
    pub category: String,
    pub search: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for InitialQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort_by: SortKey::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl ListingConfig {
    /// Load config from a file. Paths ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ListingError::Io {
            path: path.to_string(),
            source,
        })?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON config text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Query state a freshly mounted listing starts with. The wishlist starts empty.
    pub fn initial_query(&self) -> QueryState {
        QueryState::new()
            .with_category(CategoryFilter::parse(&self.initial.category))
            .with_search(self.initial.search.clone())
            .with_sort(self.initial.sort_by, self.initial.sort_order)
    }
}
