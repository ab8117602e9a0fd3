use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point. The portal pages are static, so hydrating islands is a
/// no-op until a page declares an `#[island]`.
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_islands();
}

// Islands are registered by linking the crate that declares them
#[allow(unused_imports)]
use portal_web;
