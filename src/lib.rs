//! # atelier
//!
//! Leptos + WASM storefront client for an online gallery selling original
//! paintings. The server side of the product is an external REST API; this
//! crate owns the browser experience: catalog and artist pages, sign-in
//! and sign-up, the customer dashboard and order history, static content
//! pages, and the client session lifecycle that ties them together.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
