// lib.rs - Root module for the device_catalog library
//
// - web_app: the catalog browser (models, queries, server functions, UI)
// - sync: the catalog updater used by the `catalog_sync` binary
// - fixtures: reusable test catalogs

pub mod fixtures;
pub mod sync;
pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
