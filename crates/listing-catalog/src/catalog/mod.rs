//! Product catalog module.
//!
//! Contains the product record and the fixed catalog the listing browses.

mod product;
mod seed;

pub use product::Product;

use crate::error::{ListingError, Result};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Sentinel category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// An immutable, ordered list of products.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog of six electronics products.
    pub fn seed() -> Self {
        Self::new(seed::products())
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ListingError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category options: "All" followed by distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.get(ProductId::new(4)).map(|p| p.name.as_str()),
            Some("MacBook Air M2")
        );
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.categories(), vec!["All", "Mobile", "Laptop", "Accessories"]);
    }

    #[test]
    fn test_empty_catalog_categories() {
        assert_eq!(Catalog::default().categories(), vec!["All"]);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"id": 1, "name": "Desk Lamp", "brand": "Lumo", "category": "Home",
             "price": 1499, "rating": 4.1, "image": "https://example.com/lamp.jpg",
             "badge": "New"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories(), vec!["All", "Home"]);
    }

    #[test]
    fn test_catalog_from_invalid_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ListingError::Json(_)));
    }

    #[test]
    fn test_catalog_load_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, ListingError::Io { .. }));
    }
}
