//! OTB Helper Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod export;
mod storage;
mod debounce;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("OTB Helper - Disc Golf Disc Finder initialized");
    leptos::mount::mount_to_body(app::App);
}
