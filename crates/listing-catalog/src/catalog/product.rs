//! Product record.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::pricing::discount_percent;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Records are immutable once seeded. `original_price >= price` and id
/// uniqueness are expected of seed data but not checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Category label, shared with other products.
    pub category: String,
    /// Current price in whole currency units.
    pub price: i64,
    /// Price before discount, in whole currency units.
    #[serde(default)]
    pub original_price: Option<i64>,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Image URL.
    pub image: String,
    /// Short promotional label (e.g., "Best Seller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Current price as money in the given currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Original price as money, if the product has one.
    pub fn original_price_in(&self, currency: Currency) -> Option<Money> {
        self.original_price.map(|p| Money::new(p, currency))
    }

    /// Whole-percent discount from the original price; 0 when there is none.
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.original_price, self.price)
    }

    /// Case-insensitive substring match against name or brand.
    ///
    /// `needle_lower` must already be lowercased. An empty needle matches.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.brand.to_lowercase().contains(needle_lower)
    }
}
