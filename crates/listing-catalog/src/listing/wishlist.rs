//! Wishlist membership set.
//!
//! Backed by a persistent ordered set so every toggle yields a new value
//! while the previous one stays intact. Renderers that detect changes by
//! identity can compare snapshots with [`Wishlist::ptr_eq`].

use crate::ids::ProductId;
use im::OrdSet;
use tracing::debug;

/// Set of wishlisted product ids. Membership only, no ordering semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: OrdSet<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Return a new wishlist with `id` removed if present, added otherwise.
    ///
    /// Ids are not checked against any catalog.
    pub fn toggled(&self, id: ProductId) -> Self {
        let ids = if self.ids.contains(&id) {
            debug!(product_id = %id, "removing from wishlist");
            self.ids.without(&id)
        } else {
            debug!(product_id = %id, "adding to wishlist");
            self.ids.update(id)
        };
        Self { ids }
    }

    /// Check if two wishlists share the same underlying storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.ids.ptr_eq(&other.ids)
    }

    /// Number of wishlisted ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ProductId> for Wishlist {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = Wishlist::new();
        let one = empty.toggled(ProductId::new(3));
        assert!(one.contains(ProductId::new(3)));
        assert_eq!(one.len(), 1);

        let none = one.toggled(ProductId::new(3));
        assert!(!none.contains(ProductId::new(3)));
        assert!(none.is_empty());
    }

    #[test]
    fn test_toggle_leaves_previous_snapshot_untouched() {
        let before: Wishlist = [ProductId::new(1), ProductId::new(2)].into_iter().collect();
        let after = before.toggled(ProductId::new(2));

        assert!(before.contains(ProductId::new(2)));
        assert!(!after.contains(ProductId::new(2)));
        assert!(!before.ptr_eq(&after));
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = Wishlist::new().toggled(ProductId::new(1));
        let b = a.clone();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let w = Wishlist::new().toggled(ProductId::new(9999));
        assert!(w.contains(ProductId::new(9999)));
    }

    #[test]
    fn test_iter_sorted() {
        let w: Wishlist = [ProductId::new(5), ProductId::new(2)].into_iter().collect();
        let ids: Vec<u32> = w.iter().map(ProductId::get).collect();
        assert_eq!(ids, vec![2, 5]);
    }
}
