//! HTML rendering of the listing view.
//!
//! Produces the same tree the interactive component builds, as markup, for
//! server-side rendering and snapshot checks.

use crate::listing::view::{CATEGORY_LABEL, SEARCH_LABEL, SEARCH_PLACEHOLDER, SORT_LABEL};
use crate::listing::{ListingContent, ListingView, ProductCardView, SelectOption};

/// Render the complete listing.
pub fn render_listing(view: &ListingView) -> String {
    format!(
        r#"<div class="container">
    <h1>{}</h1>
    {}
    <hr>
    <div class="product-grid">
        {}
    </div>
</div>"#,
        html_escape(&view.title),
        render_controls(view),
        render_content(&view.content)
    )
}

fn render_controls(view: &ListingView) -> String {
    format!(
        r#"<div class="control-panel">
        <div class="control-group">
            <label>{}</label>
            <input type="text" placeholder="{}" value="{}">
        </div>
        <div class="control-group">
            <label>{}</label>
            <select name="category">{}</select>
        </div>
        <div class="control-group">
            <label>{}</label>
            <select name="sort">{}</select>
        </div>
        <div class="control-group">
            <button type="button" data-sort-order="{}">{}</button>
        </div>
    </div>"#,
        html_escape(SEARCH_LABEL),
        html_escape(SEARCH_PLACEHOLDER),
        html_escape(&view.search),
        html_escape(CATEGORY_LABEL),
        render_options(&view.category_options, &view.selected_category),
        html_escape(SORT_LABEL),
        render_options(&view.sort_options, view.selected_sort.as_str()),
        view.sort_order.as_str(),
        view.sort_order_label()
    )
}

fn render_options(options: &[SelectOption], selected: &str) -> String {
    options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                html_escape(&o.value),
                if o.value == selected { " selected" } else { "" },
                html_escape(&o.label)
            )
        })
        .collect()
}

fn render_content(content: &ListingContent) -> String {
    match content {
        ListingContent::Grid { cards } => cards.iter().map(render_product_card).collect(),
        ListingContent::Empty { message } => {
            format!(r#"<p class="no-results">{}</p>"#, html_escape(message))
        }
    }
}

fn render_product_card(card: &ProductCardView) -> String {
    let badge = card
        .badge
        .as_ref()
        .map(|b| format!(r#"<span class="badge">{}</span>"#, html_escape(b)))
        .unwrap_or_default();

    let discount = match (&card.original_price, card.discount_text()) {
        (Some(original), Some(text)) => format!(
            r#"<span class="original-price">{}</span><span class="discount-percent">{}</span>"#,
            html_escape(original),
            text
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="product-card" data-product-id="{}">
    <div class="card-header">
        <img src="{}" alt="{}" class="product-img">
        <button class="wishlist-btn{}" data-product-id="{}">{}</button>
        {}
    </div>
    <h3>{}</h3>
    <p class="brand">{}</p>
    <div class="price-details">
        <span class="current-price">{}</span>{}
    </div>
    <div class="rating-stock">
        <span>{}</span>
    </div>
    <p>{}</p>
</div>"#,
        card.id,
        html_escape(&card.image),
        html_escape(&card.name),
        if card.wishlisted { " wished" } else { "" },
        card.id,
        card.wishlist_label(),
        badge,
        html_escape(&card.name),
        html_escape(&card.brand_line()),
        html_escape(&card.price),
        discount,
        card.rating_text(),
        html_escape(&card.category_text())
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use crate::listing::{ListingEvent, ProductListing};

    #[test]
    fn test_render_grid() {
        let mut listing = ProductListing::new(Catalog::seed());
        listing.apply(ListingEvent::WishlistToggled(ProductId::new(4)));
        let html = render_listing(&listing.view());

        assert!(html.contains("<h1>Product Listing</h1>"));
        assert_eq!(html.matches(r#"<div class="product-card""#).count(), 6);
        assert!(html.contains("\u{20b9}79,999"));
        assert!(html.contains("(11% OFF)"));
        assert!(html.contains(r#"<button class="wishlist-btn wished" data-product-id="4">Remove from Wishlist</button>"#));
        assert!(html.contains(r#"<option value="All" selected>All</option>"#));
        assert!(html.contains(">Ascending</button>"));
        assert!(!html.contains("No products found."));
    }

    #[test]
    fn test_render_empty_state() {
        let mut listing = ProductListing::new(Catalog::seed());
        listing.apply(ListingEvent::SearchChanged("zzz".to_string()));
        let html = render_listing(&listing.view());

        assert!(html.contains(r#"<p class="no-results">No products found.</p>"#));
        assert!(!html.contains("product-card"));
        assert!(html.contains(r#"value="zzz""#));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut listing = ProductListing::new(Catalog::seed());
        listing.apply(ListingEvent::SearchChanged("<script>\"x\"".to_string()));
        let html = render_listing(&listing.view());

        assert!(html.contains("&lt;script&gt;&quot;x&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("A & B's <b>"), "A &amp; B&#39;s &lt;b&gt;");
    }
}
