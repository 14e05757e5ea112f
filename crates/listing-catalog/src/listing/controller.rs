//! Listing controller: owns the query state and applies host input events.

use crate::catalog::{Catalog, Product};
use crate::config::ListingConfig;
use crate::ids::ProductId;
use crate::listing::{
    CategoryFilter, DerivationCache, ListingView, QueryState, SortKey, Wishlist,
};
use crate::money::Currency;
use tracing::debug;

/// Input events from the host rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// Search box text changed.
    SearchChanged(String),
    /// Category select changed to a raw option value.
    CategorySelected(String),
    /// Sort-key select changed to a raw option value.
    SortKeySelected(String),
    /// Direction button clicked.
    SortOrderToggled,
    /// Wishlist button clicked on a card.
    WishlistToggled(ProductId),
}

/// A mounted product listing.
///
/// State lives as long as this value; nothing is persisted.
#[derive(Debug)]
pub struct ProductListing {
    catalog: Catalog,
    categories: Vec<String>,
    query: QueryState,
    cache: DerivationCache,
    title: String,
    currency: Currency,
    no_results_message: String,
}

impl ProductListing {
    /// Mount a listing over `catalog` with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, &ListingConfig::default())
    }

    /// Mount a listing using the given configuration.
    pub fn with_config(catalog: Catalog, config: &ListingConfig) -> Self {
        let categories = catalog.categories();
        Self {
            catalog,
            categories,
            query: config.initial_query(),
            cache: DerivationCache::new(),
            title: config.title.clone(),
            currency: config.currency,
            no_results_message: config.no_results_message.clone(),
        }
    }

    /// Apply one input event.
    pub fn apply(&mut self, event: ListingEvent) {
        debug!(?event, "listing event");
        match event {
            ListingEvent::SearchChanged(text) => self.query.search = text,
            ListingEvent::CategorySelected(value) => {
                self.query.category = CategoryFilter::parse(&value)
            }
            ListingEvent::SortKeySelected(value) => self.query.sort_by = SortKey::parse(&value),
            ListingEvent::SortOrderToggled => self.query.sort_order = self.query.sort_order.toggled(),
            ListingEvent::WishlistToggled(id) => self.toggle_wishlist(id),
        }
    }

    /// Toggle wishlist membership, replacing the set with a new snapshot.
    pub fn toggle_wishlist(&mut self, id: ProductId) {
        self.query.wishlist = self.query.wishlist.toggled(id);
    }

    /// Current query state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Current wishlist snapshot.
    pub fn wishlist(&self) -> &Wishlist {
        &self.query.wishlist
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category options, "All" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Visible products, recomputed only when a filter or sort input changed.
    pub fn visible(&mut self) -> &[Product] {
        self.cache.get_or_derive(&self.catalog, &self.query)
    }

    /// Number of derivations performed since mount.
    pub fn recomputations(&self) -> u64 {
        self.cache.recomputations()
    }

    /// Build the display tree for the current state.
    pub fn view(&mut self) -> ListingView {
        let visible = self.cache.get_or_derive(&self.catalog, &self.query);
        ListingView::build(
            &self.title,
            &self.categories,
            &self.query,
            visible,
            self.currency,
            &self.no_results_message,
        )
    }
}
