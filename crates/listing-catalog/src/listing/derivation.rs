//! Filter and sort derivation of the visible product list.

use crate::catalog::{Catalog, Product};
use crate::listing::{CategoryFilter, QueryState, SortKey, SortOrder};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// The query fields the visible list depends on.
///
/// The wishlist is deliberately absent: membership is read per card at
/// render time and never changes which products are visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationKey {
    pub category: CategoryFilter,
    pub search: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl From<&QueryState> for DerivationKey {
    fn from(query: &QueryState) -> Self {
        Self {
            category: query.category.clone(),
            search: query.search.clone(),
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        }
    }
}

impl DerivationKey {
    /// Filter and sort `catalog` for this key.
    pub fn derive(&self, catalog: &Catalog) -> Vec<Product> {
        let needle = self.search.to_lowercase();

        let mut visible: Vec<Product> = catalog
            .products()
            .iter()
            .filter(|p| self.category.matches(&p.category) && p.matches_text(&needle))
            .cloned()
            .collect();

        // Stable: ties keep catalog order in both directions.
        visible.sort_by(|a, b| self.sort_order.apply(compare(a, b, self.sort_by)));
        visible
    }

    /// Stable string form, e.g. `listing:Laptop:macbook:price:desc`.
    pub fn cache_key(&self) -> String {
        format!(
            "listing:{}:{}:{}:{}",
            self.category,
            self.search.to_lowercase(),
            self.sort_by,
            self.sort_order
        )
    }
}

/// Natural-order comparison of two products by `key`.
fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
    }
}

/// Derive the visible product list for a query.
///
/// Pure and idempotent: the same catalog and query always produce the same
/// products in the same order.
pub fn derive(catalog: &Catalog, query: &QueryState) -> Vec<Product> {
    DerivationKey::from(query).derive(catalog)
}

/// Memo of the last derivation, keyed by [`DerivationKey`].
///
/// A cache is bound to one catalog; call [`DerivationCache::invalidate`]
/// before using it with another.
#[derive(Debug, Default)]
pub struct DerivationCache {
    entry: Option<(DerivationKey, Vec<Product>)>,
    recomputations: u64,
}

impl DerivationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the visible list for `query`, recomputing only if the key changed.
    pub fn get_or_derive(&mut self, catalog: &Catalog, query: &QueryState) -> &[Product] {
        let key = DerivationKey::from(query);
        let fresh = matches!(&self.entry, Some((cached, _)) if *cached == key);

        if fresh {
            trace!(key = %key.cache_key(), "derivation cache hit");
        } else {
            let products = key.derive(catalog);
            self.recomputations += 1;
            debug!(
                key = %key.cache_key(),
                results = products.len(),
                recomputations = self.recomputations,
                "recomputed visible products"
            );
            self.entry = Some((key, products));
        }

        match &self.entry {
            Some((_, products)) => products,
            None => &[],
        }
    }

    /// Number of times the list has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop the cached result so the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
