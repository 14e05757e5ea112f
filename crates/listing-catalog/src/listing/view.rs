//! View model handed to a renderer.
//!
//! Everything here is display-ready text; renderers only lay it out.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::listing::{QueryState, SortKey, SortOrder, Wishlist};
use crate::money::Currency;
use serde::Serialize;

pub const SEARCH_LABEL: &str = "Search: ";
pub const SEARCH_PLACEHOLDER: &str = "Search by name or brand...";
pub const CATEGORY_LABEL: &str = "Category: ";
pub const SORT_LABEL: &str = "Sort By: ";
pub const ADD_TO_WISHLIST: &str = "Add to Wishlist";
pub const REMOVE_FROM_WISHLIST: &str = "Remove from Wishlist";

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Display fields of a single product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub image: String,
    pub name: String,
    pub brand: String,
    /// Current price, e.g. "₹79,999".
    pub price: String,
    /// Original price, present only when the product is discounted.
    pub original_price: Option<String>,
    /// Whole-percent discount; 0 when not discounted.
    pub discount_percent: u32,
    pub rating: f64,
    pub category: String,
    pub badge: Option<String>,
    pub wishlisted: bool,
}

impl ProductCardView {
    /// Build a card, reading wishlist membership for this row.
    pub fn build(product: &Product, currency: Currency, wishlist: &Wishlist) -> Self {
        Self {
            wishlisted: wishlist.contains(product.id),
            ..Self::new(product, currency)
        }
    }

    /// Build the static part of a card. `wishlisted` is false; renderers
    /// that track membership reactively read it themselves.
    pub fn new(product: &Product, currency: Currency) -> Self {
        let discount_percent = product.discount_percent();
        let original_price = if discount_percent > 0 {
            product.original_price_in(currency).map(|m| m.display())
        } else {
            None
        };

        Self {
            id: product.id,
            image: product.image.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price_in(currency).display(),
            original_price,
            discount_percent,
            rating: product.rating,
            category: product.category.clone(),
            badge: product.badge.clone(),
            wishlisted: false,
        }
    }

    /// "By {brand}".
    pub fn brand_line(&self) -> String {
        format!("By {}", self.brand)
    }

    /// "({n}% OFF)" when discounted.
    pub fn discount_text(&self) -> Option<String> {
        (self.discount_percent > 0).then(|| format!("({}% OFF)", self.discount_percent))
    }

    /// "Rating: {rating}".
    pub fn rating_text(&self) -> String {
        format!("Rating: {}", self.rating)
    }

    /// "Category: {category}".
    pub fn category_text(&self) -> String {
        format!("Category: {}", self.category)
    }

    /// Wishlist button label for the current membership.
    pub fn wishlist_label(&self) -> &'static str {
        if self.wishlisted {
            REMOVE_FROM_WISHLIST
        } else {
            ADD_TO_WISHLIST
        }
    }
}

/// Body of the listing: a grid of cards, or the empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingContent {
    Grid { cards: Vec<ProductCardView> },
    Empty { message: String },
}

/// Complete display tree for one render of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub title: String,
    /// Current search box text.
    pub search: String,
    pub category_options: Vec<SelectOption>,
    pub selected_category: String,
    pub sort_options: Vec<SelectOption>,
    pub selected_sort: SortKey,
    pub sort_order: SortOrder,
    pub content: ListingContent,
}

impl ListingView {
    /// Assemble the view from the query and the already-derived visible list.
    pub fn build(
        title: &str,
        categories: &[String],
        query: &QueryState,
        visible: &[Product],
        currency: Currency,
        no_results_message: &str,
    ) -> Self {
        let content = if visible.is_empty() {
            ListingContent::Empty {
                message: no_results_message.to_string(),
            }
        } else {
            ListingContent::Grid {
                cards: visible
                    .iter()
                    .map(|p| ProductCardView::build(p, currency, &query.wishlist))
                    .collect(),
            }
        };

        Self {
            title: title.to_string(),
            search: query.search.clone(),
            category_options: categories
                .iter()
                .map(|c| SelectOption::new(c.as_str(), c.as_str()))
                .collect(),
            selected_category: query.category.as_str().to_string(),
            sort_options: SortKey::ALL
                .iter()
                .map(|k| SelectOption::new(k.as_str(), k.label()))
                .collect(),
            selected_sort: query.sort_by,
            sort_order: query.sort_order,
            content,
        }
    }

    /// Cards in display order; empty when nothing matched.
    pub fn cards(&self) -> &[ProductCardView] {
        match &self.content {
            ListingContent::Grid { cards } => cards,
            ListingContent::Empty { .. } => &[],
        }
    }

    /// Check if the empty state is shown.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, ListingContent::Empty { .. })
    }

    /// Direction button label.
    pub fn sort_order_label(&self) -> &'static str {
        self.sort_order.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::listing::derive;

    #[test]
    fn test_card_for_discounted_product() {
        let catalog = Catalog::seed();
        let Some(iphone) = catalog.get(ProductId::new(1)) else {
            panic!("seed product 1 missing");
        };
        let card = ProductCardView::build(iphone, Currency::INR, &Wishlist::new());

        assert_eq!(card.price, "\u{20b9}79,999");
        assert_eq!(card.original_price.as_deref(), Some("\u{20b9}89,999"));
        assert_eq!(card.discount_text().as_deref(), Some("(11% OFF)"));
        assert_eq!(card.brand_line(), "By Apple");
        assert_eq!(card.rating_text(), "Rating: 4.8");
        assert_eq!(card.category_text(), "Category: Mobile");
        assert_eq!(card.badge.as_deref(), Some("Best Seller"));
        assert_eq!(card.wishlist_label(), "Add to Wishlist");
    }

    #[test]
    fn test_card_hides_original_price_without_discount() {
        let mut product = Catalog::seed().products()[0].clone();
        product.original_price = Some(product.price);
        let card = ProductCardView::build(&product, Currency::INR, &Wishlist::new());

        assert_eq!(card.original_price, None);
        assert_eq!(card.discount_text(), None);
    }

    #[test]
    fn test_card_reflects_wishlist() {
        let catalog = Catalog::seed();
        let product = &catalog.products()[0];
        let wishlist = Wishlist::new().toggled(product.id);
        let card = ProductCardView::build(product, Currency::INR, &wishlist);

        assert!(card.wishlisted);
        assert_eq!(card.wishlist_label(), "Remove from Wishlist");
    }

    #[test]
    fn test_static_card_matches_built_card() {
        let catalog = Catalog::seed();
        let product = &catalog.products()[3];
        let wishlist = Wishlist::new().toggled(product.id);

        let fixed = ProductCardView::new(product, Currency::INR);
        let built = ProductCardView::build(product, Currency::INR, &wishlist);

        assert!(!fixed.wishlisted);
        assert_eq!(fixed, ProductCardView { wishlisted: false, ..built });
    }

    #[test]
    fn test_view_empty_state() {
        let catalog = Catalog::seed();
        let query = QueryState::new().with_search("zzz");
        let visible = derive(&catalog, &query);
        let view = ListingView::build(
            "Product Listing",
            &catalog.categories(),
            &query,
            &visible,
            Currency::INR,
            "No products found.",
        );

        assert!(view.is_empty());
        assert!(view.cards().is_empty());
        assert_eq!(
            view.content,
            ListingContent::Empty {
                message: "No products found.".to_string()
            }
        );
    }

    #[test]
    fn test_view_controls() {
        let catalog = Catalog::seed();
        let query = QueryState::new();
        let visible = derive(&catalog, &query);
        let view = ListingView::build(
            "Product Listing",
            &catalog.categories(),
            &query,
            &visible,
            Currency::INR,
            "No products found.",
        );

        let categories: Vec<&str> = view.category_options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(categories, vec!["All", "Mobile", "Laptop", "Accessories"]);

        let sorts: Vec<(&str, &str)> = view
            .sort_options
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(sorts, vec![("name", "Name"), ("price", "Price"), ("rating", "Rating")]);
        assert_eq!(view.sort_order_label(), "Ascending");
        assert_eq!(view.selected_category, "All");
        assert_eq!(view.cards().len(), 6);
    }
}
