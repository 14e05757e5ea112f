//! Application components.

use leptos::prelude::*;
use leptos_meta::*;
use listing_catalog::listing::view::{
    ADD_TO_WISHLIST, CATEGORY_LABEL, REMOVE_FROM_WISHLIST, SEARCH_LABEL, SEARCH_PLACEHOLDER,
    SORT_LABEL,
};
use listing_catalog::prelude::*;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ListingConfig::default();
    let title = config.title.clone();

    view! {
        <Meta name="description" content="Browse, filter, and sort the product catalog"/>
        <Title text=title/>

        <main>
            <ProductListingPage catalog=Catalog::seed() config=config/>
        </main>
    }
}

/// Write `value` only if it differs, so unchanged input never re-runs the derivation.
fn replace_if_changed<T>(signal: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    signal.maybe_update(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}

/// Reactive copy of the listing query, one signal per control.
#[derive(Clone, Copy)]
struct ListingSignals {
    category: RwSignal<CategoryFilter>,
    search: RwSignal<String>,
    sort_by: RwSignal<SortKey>,
    sort_order: RwSignal<SortOrder>,
    wishlist: RwSignal<Wishlist>,
}

impl ListingSignals {
    fn new(initial: QueryState) -> Self {
        Self {
            category: RwSignal::new(initial.category),
            search: RwSignal::new(initial.search),
            sort_by: RwSignal::new(initial.sort_by),
            sort_order: RwSignal::new(initial.sort_order),
            wishlist: RwSignal::new(initial.wishlist),
        }
    }

    /// Tracked read of the four inputs the visible list depends on.
    fn key(&self) -> DerivationKey {
        DerivationKey {
            category: self.category.get(),
            search: self.search.get(),
            sort_by: self.sort_by.get(),
            sort_order: self.sort_order.get(),
        }
    }

    /// Visible products, recomputed only when [`ListingSignals::key`] changes.
    /// The wishlist signal is never read here.
    fn visible<F>(self, catalog: StoredValue<Catalog>, derive: F) -> Memo<Vec<Product>>
    where
        F: Fn(&DerivationKey, &Catalog) -> Vec<Product> + Send + Sync + 'static,
    {
        Memo::new(move |_| {
            let key = self.key();
            catalog.with_value(|c| derive(&key, c))
        })
    }

    fn toggle_sort_order(&self) {
        self.sort_order.update(|o| *o = o.toggled());
    }

    fn toggle_wishlist(&self, id: ProductId) {
        self.wishlist.update(|w| *w = w.toggled(id));
    }
}

// ============================================================================
// Listing Page
// ============================================================================

/// Search box, category and sort controls, and the product grid.
///
/// The visible list is a memo over exactly the category, search, sort key,
/// and sort order signals. Wishlist membership is read per card.
#[component]
pub fn ProductListingPage(catalog: Catalog, config: ListingConfig) -> impl IntoView {
    let categories = catalog.categories();
    let catalog = StoredValue::new(catalog);
    let currency = config.currency;
    let no_results = config.no_results_message.clone();

    let signals = ListingSignals::new(config.initial_query());
    let ListingSignals {
        category,
        search,
        sort_by,
        wishlist,
        ..
    } = signals;
    let visible = signals.visible(catalog, DerivationKey::derive);

    let category_options = categories
        .into_iter()
        .map(|name| {
            let value = name.clone();
            let selected_value = name.clone();
            view! {
                <option
                    value=value
                    selected=move || category.with(|c| c.as_str() == selected_value)
                >
                    {name}
                </option>
            }
        })
        .collect_view();

    let sort_options = SortKey::ALL
        .iter()
        .copied()
        .map(|key| {
            view! {
                <option value=key.as_str() selected=move || sort_by.get() == key>
                    {key.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="container">
            <h1>{config.title.clone()}</h1>

            <div class="control-panel">
                <div class="control-group">
                    <label>{SEARCH_LABEL}</label>
                    <input
                        type="text"
                        placeholder=SEARCH_PLACEHOLDER
                        prop:value=move || search.get()
                        on:input=move |ev| replace_if_changed(search, event_target_value(&ev))
                    />
                </div>

                <div class="control-group">
                    <label>{CATEGORY_LABEL}</label>
                    <select on:change=move |ev| {
                        replace_if_changed(category, CategoryFilter::parse(&event_target_value(&ev)))
                    }>
                        {category_options}
                    </select>
                </div>

                <div class="control-group">
                    <label>{SORT_LABEL}</label>
                    <select on:change=move |ev| {
                        replace_if_changed(sort_by, SortKey::parse(&event_target_value(&ev)))
                    }>
                        {sort_options}
                    </select>
                </div>

                <div class="control-group">
                    <button on:click=move |_| signals.toggle_sort_order()>
                        {move || signals.sort_order.get().label()}
                    </button>
                </div>
            </div>

            <hr/>

            <div class="product-grid">
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || view! { <p class="no-results">{no_results.clone()}</p> }
                >
                    <For
                        each=move || visible.get()
                        key=|product| product.id
                        children=move |product: Product| {
                            view! { <ProductCard product=product currency=currency wishlist=wishlist/> }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductCard(product: Product, currency: Currency, wishlist: RwSignal<Wishlist>) -> impl IntoView {
    let id = product.id;
    let card = ProductCardView::new(&product, currency);
    let wished = move || wishlist.with(|w| w.contains(id));

    let badge = card
        .badge
        .clone()
        .map(|badge| view! { <span class="badge">{badge}</span> });

    let discount = card
        .original_price
        .clone()
        .zip(card.discount_text())
        .map(|(original, text)| {
            view! {
                <span class="original-price">{original}</span>
                <span class="discount-percent">{text}</span>
            }
        });

    view! {
        <div class="product-card">
            <div class="card-header">
                <img src=card.image.clone() alt=card.name.clone() class="product-img"/>
                <button
                    class="wishlist-btn"
                    class:wished=wished
                    on:click=move |_| wishlist.update(|w| *w = w.toggled(id))
                >
                    {move || if wished() { REMOVE_FROM_WISHLIST } else { ADD_TO_WISHLIST }}
                </button>
                {badge}
            </div>

            <h3>{card.name.clone()}</h3>
            <p class="brand">{card.brand_line()}</p>

            <div class="price-details">
                <span class="current-price">{card.price.clone()}</span>
                {discount}
            </div>

            <div class="rating-stock">
                <span>{card.rating_text()}</span>
            </div>

            <p>{card.category_text()}</p>
        </div>
    }
}
