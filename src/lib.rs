#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod portfolio;
pub mod scroll_spy;
pub mod viewer;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a logger may already be installed after a hot reload
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already initialised");
    }
    leptos::mount::hydrate_body(App);
}
