//! # cestas-web
//!
//! Leptos + WASM front end for a food-basket distribution office: family
//! registration, delivery records, supply items, kit composition and basket
//! stock, all backed by a JSON HTTP API with a cookie session.
//!
//! Operations live in `services` and talk to the browser and the API
//! through ports, so everything below `components` and `pages` runs natively
//! under `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
