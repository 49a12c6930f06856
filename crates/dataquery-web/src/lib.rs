//! DataQuery Web Frontend
//!
//! Leptos-based WASM frontend for the institutional site. Content comes from
//! `dataquery-core`; this crate only turns it into markup.

mod app;
mod chrome;
mod components;
mod icons;
mod pages;
mod sections;
mod styles;

pub use app::App;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
