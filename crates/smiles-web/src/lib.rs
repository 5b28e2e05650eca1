//! We Scale Smiles Web Frontend
//!
//! Leptos-based WASM landing page. Copy, theme tokens and the contact-form
//! draft live in `smiles-core`; this crate only composes markup.

mod app;
mod components;
mod config;
mod icons;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    config::log_startup(&config::site_config());

    leptos::mount::mount_to_body(App);
}
