//! Product listing domain: a static catalog with in-memory search,
//! category filtering, multi-key sorting, and a wishlist.
//!
//! This crate provides:
//!
//! - **Catalog**: Product records and the seeded catalog
//! - **Money**: Whole-unit prices with locale-aware currency formatting
//! - **Listing**: Query state, the filter/sort derivation and its memo cache,
//!   the wishlist set, and the view model handed to a renderer
//! - **Render**: HTML rendering of the view model
//!
//! # Example
//!
//! ```rust
//! use listing_catalog::prelude::*;
//!
//! let mut listing = ProductListing::new(Catalog::seed());
//! listing.apply(ListingEvent::SearchChanged("apple".to_string()));
//! listing.apply(ListingEvent::WishlistToggled(ProductId::new(4)));
//!
//! let view = listing.view();
//! assert_eq!(view.cards().len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;

pub mod catalog;
pub mod listing;
pub mod render;

pub use config::ListingConfig;
pub use error::ListingError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{InitialQuery, ListingConfig};
    pub use crate::error::ListingError;
    pub use crate::ids::ProductId;
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::pricing::discount_percent;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Listing
    pub use crate::listing::{
        derive, CategoryFilter, DerivationCache, DerivationKey, ListingContent, ListingEvent,
        ListingView, ProductCardView, ProductListing, QueryState, SortKey, SortOrder, Wishlist,
    };

    // Render
    pub use crate::render::render_listing;
}
