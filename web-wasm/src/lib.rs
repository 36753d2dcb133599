//! Pizza Co. Storefront Web App (Leptos + WASM)

mod app;
mod components;
pub mod browser;
pub mod state;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    browser::console_log("Pizza Co. storefront started");
    leptos::mount::mount_to_body(app::App);
}
