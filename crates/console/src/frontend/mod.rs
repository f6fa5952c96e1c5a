//! Leptos frontend, mounted into the browser document.

pub mod app;
pub mod components;
pub mod cookie_store;
pub mod download;
pub mod guard;
pub mod pages;
pub mod polling;
pub mod toast;

use wasm_bindgen::prelude::*;

/// WASM entry point; runs automatically when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
