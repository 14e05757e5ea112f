//! Client-side rendered entry point (`trunk serve --features csr`).

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(listing_app::App);
}
