//! Product listing component.
//!
//! A single page with a search box, category and sort controls, and a grid
//! of product cards with wishlist toggles. All filtering, sorting, and
//! formatting comes from `listing-catalog`; this crate only binds it to
//! reactive signals.

mod app;

pub use app::{App, ProductListingPage};
