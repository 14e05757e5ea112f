//! Listing module.
//!
//! Contains the query state, the filter/sort derivation with its memo
//! cache, the wishlist, the view model, and the controller tying them
//! together.

mod controller;
mod derivation;
mod query;
pub mod view;
mod wishlist;

pub use controller::{ListingEvent, ProductListing};
pub use derivation::{derive, DerivationCache, DerivationKey};
pub use query::{CategoryFilter, QueryState, SortKey, SortOrder};
pub use view::{ListingContent, ListingView, ProductCardView, SelectOption};
pub use wishlist::Wishlist;
