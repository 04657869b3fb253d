pub mod app;
pub mod components;
pub mod config;
pub mod field_name;
pub mod form;
pub mod pages;

/// Client entry point, called by the generated JS once the WASM bundle loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
